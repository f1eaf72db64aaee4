use crate::candidates::domain::{Education, WorkExperience};

/// Role phrases that mark an experience entry as relevant tech work.
const TECH_ROLES: [&str; 7] = [
    "full stack developer",
    "software engineer",
    "software developer",
    "backend developer",
    "frontend developer",
    "web developer",
    "engineer",
];

/// Role phrases that mark an experience entry as leadership work. A role may
/// count toward both vocabularies.
const LEADERSHIP_ROLES: [&str; 5] = [
    "project manager",
    "product manager",
    "team lead",
    "tech lead",
    "engineering manager",
];

const RELEVANT_SUBJECTS: [&str; 5] = [
    "computer science",
    "software engineering",
    "computer engineering",
    "information technology",
    "information systems",
];

const HIGH_VALUE_SKILLS: [&str; 23] = [
    "react",
    "node",
    "javascript",
    "typescript",
    "python",
    "java",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "cloud",
    "microservices",
    "api",
    "rest",
    "graphql",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "git",
    "ci/cd",
    "devops",
];

/// Substring markers for a strong GPA. Matched against the raw GPA string,
/// so "3.55" fires via "3.5".
const HIGH_GPA_MARKERS: [&str; 6] = ["3.5", "3.6", "3.7", "3.8", "3.9", "4.0"];

const BUDGET_MIN: i64 = 80_000;
const BUDGET_MAX: i64 = 130_000;
const IDEAL_MIN: i64 = 90_000;
const IDEAL_MAX: i64 = 120_000;
// BUDGET_MAX * 1.2, the tolerated stretch above budget.
const STRETCH_MAX: i64 = 156_000;

fn contains_any(haystack: &str, vocabulary: &[&str]) -> bool {
    vocabulary.iter().any(|term| haystack.contains(term))
}

/// Experience sub-score, max 35: capped credit for tech roles, a small
/// leadership premium, and a generic seniority term per role held.
pub(crate) fn experience_score(experiences: &[WorkExperience]) -> f64 {
    if experiences.is_empty() {
        return 0.0;
    }

    let mut tech_roles = 0u32;
    let mut leadership_roles = 0u32;
    for experience in experiences {
        let role = experience.role_name.as_deref().unwrap_or("").to_lowercase();
        if contains_any(&role, &TECH_ROLES) {
            tech_roles += 1;
        }
        if contains_any(&role, &LEADERSHIP_ROLES) {
            leadership_roles += 1;
        }
    }

    let score = (f64::from(tech_roles) * 4.0).min(20.0)
        + (f64::from(leadership_roles) * 2.5).min(5.0)
        + (experiences.len() as f64 * 1.5).min(10.0);

    score.min(35.0)
}

/// Education sub-score, max 25: highest-level tier (only the top tier
/// fires), plus flat bonuses for a relevant subject, a strong GPA, a top-50
/// school, and holding more than one degree.
pub(crate) fn education_score(education: Option<&Education>) -> f64 {
    let Some(education) = education else {
        return 0.0;
    };
    if education.degrees.is_empty() {
        return 0.0;
    }

    let mut score: f64 = 0.0;

    let highest = education
        .highest_level
        .as_deref()
        .unwrap_or("")
        .to_lowercase();
    if highest.contains("phd") || highest.contains("doctorate") {
        score += 10.0;
    } else if highest.contains("master") {
        score += 8.0;
    } else if highest.contains("bachelor") {
        score += 6.0;
    }

    let relevant_subject = education.degrees.iter().any(|degree| {
        let subject = degree.subject.as_deref().unwrap_or("").to_lowercase();
        contains_any(&subject, &RELEVANT_SUBJECTS)
    });
    if relevant_subject {
        score += 8.0;
    }

    let high_gpa = education.degrees.iter().any(|degree| {
        let gpa = degree.gpa.as_deref().unwrap_or("").to_lowercase();
        contains_any(&gpa, &HIGH_GPA_MARKERS)
    });
    if high_gpa {
        score += 4.0;
    }

    if education
        .degrees
        .iter()
        .any(|degree| degree.is_top50 == Some(true))
    {
        score += 2.0;
    }

    if education.degrees.len() > 1 {
        score += 1.0;
    }

    score.min(25.0)
}

/// Skills sub-score, max 20: one point per skill up to 10, plus two points
/// per high-value skill up to 10. A skill counts as high-value at most once,
/// no matter how many vocabulary terms it contains.
pub(crate) fn skills_score(skills: &[String]) -> f64 {
    if skills.is_empty() {
        return 0.0;
    }

    let high_value = skills
        .iter()
        .filter(|skill| contains_any(&skill.to_lowercase(), &HIGH_VALUE_SKILLS))
        .count();

    let score = (skills.len() as f64).min(10.0) + (high_value as f64 * 2.0).min(10.0);
    score.min(20.0)
}

/// Salary-fit sub-score, max 10. A strictly ordered decision ladder; the
/// first matching band wins. Missing or unparsable expectations are the
/// neutral 5.
pub(crate) fn salary_score(expected: Option<i64>) -> f64 {
    let Some(salary) = expected else {
        return 5.0;
    };

    if (IDEAL_MIN..=IDEAL_MAX).contains(&salary) {
        10.0
    } else if (BUDGET_MIN..=BUDGET_MAX).contains(&salary) {
        8.0
    } else if salary < BUDGET_MIN {
        6.0
    } else if salary <= STRETCH_MAX {
        4.0
    } else {
        2.0
    }
}

/// Availability sub-score, max 10. Membership is exact, not substring.
pub(crate) fn availability_score(availability: &[String]) -> f64 {
    if availability.is_empty() {
        return 5.0;
    }

    let full_time = availability.iter().any(|slot| slot == "full-time");
    let part_time = availability.iter().any(|slot| slot == "part-time");

    match (full_time, part_time) {
        (true, true) => 10.0,
        (true, false) => 9.0,
        _ => 5.0,
    }
}
