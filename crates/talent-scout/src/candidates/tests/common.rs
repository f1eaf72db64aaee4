use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::candidates::directory::{CandidateDirectory, SelectionRequest};
use crate::candidates::domain::{Candidate, Degree, Education, WorkExperience};
use crate::candidates::router::candidate_router;
use crate::candidates::source::StaticSource;

pub(super) fn experience(role: &str, company: &str) -> WorkExperience {
    WorkExperience {
        role_name: Some(role.to_string()),
        company: Some(company.to_string()),
    }
}

pub(super) fn degree(subject: &str, gpa: &str, top50: bool) -> Degree {
    Degree {
        degree: Some("Degree".to_string()),
        subject: Some(subject.to_string()),
        school: Some("State University".to_string()),
        gpa: Some(gpa.to_string()),
        is_top50: Some(top50),
        ..Degree::default()
    }
}

pub(super) fn salary_expectation(amount: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("full-time".to_string(), amount.to_string())])
}

pub(super) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Five-person roster with known scores:
/// Ava 71.0, Noah 48.0, Mia 11.5, Liam 12.0, Emma 96.5.
pub(super) fn roster() -> Vec<Candidate> {
    let ava = Candidate {
        name: Some("Ava Chen".to_string()),
        email: Some("ava@example.com".to_string()),
        location: Some("New York".to_string()),
        work_experiences: vec![
            experience("Software Engineer", "Acme Corp"),
            experience("Full Stack Developer", "Acme Corp"),
            experience("Engineering Manager", "Acme Corp"),
        ],
        education: Some(Education {
            highest_level: Some("Bachelor's Degree".to_string()),
            degrees: vec![degree("Computer Science", "3.8", true)],
        }),
        skills: strings(&["React", "Node.js", "PostgreSQL", "Docker"]),
        annual_salary_expectation: salary_expectation("$95,000"),
        work_availability: strings(&["full-time", "part-time"]),
        ..Candidate::default()
    };

    let noah = Candidate {
        name: Some("Noah Patel".to_string()),
        email: Some("noah@example.com".to_string()),
        location: Some("San Francisco".to_string()),
        work_experiences: vec![
            experience("Backend Developer", "Globex"),
            experience("DevOps Engineer", "Globex"),
        ],
        education: Some(Education {
            highest_level: Some("Master's Degree".to_string()),
            degrees: vec![
                degree("Software Engineering", "3.2", false),
                degree("Business Administration", "3.1", false),
            ],
        }),
        skills: strings(&["Kubernetes", "AWS", "Terraform"]),
        annual_salary_expectation: salary_expectation("$145,000"),
        work_availability: strings(&["full-time"]),
        ..Candidate::default()
    };

    let mia = Candidate {
        name: Some("Mia Torres".to_string()),
        email: Some("mia@example.com".to_string()),
        location: Some("New York".to_string()),
        work_experiences: vec![experience("Graphic Designer", "Initech")],
        annual_salary_expectation: salary_expectation("Negotiable"),
        work_availability: strings(&["part-time"]),
        ..Candidate::default()
    };

    let liam = Candidate {
        name: Some("Liam O'Brien".to_string()),
        location: Some("Austin".to_string()),
        education: Some(Education {
            highest_level: Some("Bachelor's Degree".to_string()),
            degrees: Vec::new(),
        }),
        skills: strings(&["Excel"]),
        annual_salary_expectation: salary_expectation("$75,000"),
        ..Candidate::default()
    };

    let emma = Candidate {
        name: Some("Emma Müller".to_string()),
        email: Some("emma@example.com".to_string()),
        location: Some("Berlin".to_string()),
        work_experiences: vec![
            experience("Software Engineer", "Hooli"),
            experience("Tech Lead", "Hooli"),
            experience("Software Developer", "Hooli"),
            experience("Web Developer", "Hooli"),
            experience("Frontend Developer", "Hooli"),
            experience("Backend Developer", "Hooli"),
        ],
        education: Some(Education {
            highest_level: Some("PhD".to_string()),
            degrees: vec![
                degree("Computer Science", "3.9/4.0", true),
                degree("Mathematics", "3.6", false),
            ],
        }),
        skills: strings(&[
            "React",
            "Node",
            "TypeScript",
            "JavaScript",
            "Python",
            "Docker",
            "Kubernetes",
            "AWS",
            "GraphQL",
            "SQL",
            "Git",
            "CI/CD",
        ]),
        annual_salary_expectation: salary_expectation("$110,000"),
        work_availability: strings(&["full-time", "part-time"]),
        ..Candidate::default()
    };

    vec![ava, noah, mia, liam, emma]
}

pub(super) fn directory() -> CandidateDirectory<StaticSource> {
    CandidateDirectory::load(StaticSource::new(roster())).expect("static source loads")
}

pub(super) fn router() -> axum::Router {
    candidate_router(Arc::new(directory()))
}

pub(super) fn shortlist(ids: &[usize]) -> SelectionRequest {
    let justifications = ids
        .iter()
        .map(|id| (id.to_string(), format!("strong fit #{id}")))
        .collect();
    SelectionRequest {
        selected_candidates: ids.to_vec(),
        justifications,
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
