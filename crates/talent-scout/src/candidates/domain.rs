use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Candidate record as supplied by the source document.
///
/// Every field is optional or defaultable: the source data is heterogeneous
/// and partially missing, and scoring substitutes defined neutral values
/// rather than rejecting a record. Serde names match the upstream JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub work_experiences: Vec<WorkExperience>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub annual_salary_expectation: BTreeMap<String, String>,
    #[serde(default)]
    pub work_availability: Vec<String>,
}

impl Candidate {
    /// Declared full-time salary parsed out of its currency string
    /// (`"$95,000"` style), if present and parsable.
    pub fn expected_salary(&self) -> Option<i64> {
        self.annual_salary_expectation
            .get("full-time")
            .and_then(|raw| parse_currency(raw))
    }
}

/// One prior role. Order follows the source data, not chronology.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    #[serde(rename = "roleName", default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Education block: the self-reported highest level plus individual degrees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_level: Option<String>,
    #[serde(default)]
    pub degrees: Vec<Degree>,
}

/// A single degree. `gpa` is free text and is matched by substring, never
/// parsed numerically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(
        rename = "originalSchool",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_school: Option<String>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(rename = "isTop50", default, skip_serializing_if = "Option::is_none")]
    pub is_top50: Option<bool>,
}

/// Suitability score: the rounded total plus its five-way breakdown. Field
/// names are the wire contract the review UI consumes verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
}

/// Per-factor sub-scores, each clamped to its maximum and rounded to one
/// decimal place. Maxima: experience 35, education 25, skills 20, salary 10,
/// availability 10.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub experience: f64,
    pub education: f64,
    pub skills: f64,
    pub salary: f64,
    pub availability: f64,
}

/// Candidate enriched with its positional identifier and a fresh score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub id: usize,
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: Score,
}

/// Leading-integer parse after stripping `$` and `,`. Trailing garbage is
/// ignored, so `"95000.50"` parses as 95000; a string without leading digits
/// yields `None`.
fn parse_currency(raw: &str) -> Option<i64> {
    let cleaned: String = raw.chars().filter(|c| *c != '$' && *c != ',').collect();
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate_with_salary(raw: &str) -> Candidate {
        Candidate {
            annual_salary_expectation: BTreeMap::from([(
                "full-time".to_string(),
                raw.to_string(),
            )]),
            ..Candidate::default()
        }
    }

    #[test]
    fn parses_currency_formatted_salaries() {
        assert_eq!(candidate_with_salary("$95,000").expected_salary(), Some(95_000));
        assert_eq!(candidate_with_salary("120000").expected_salary(), Some(120_000));
        assert_eq!(candidate_with_salary(" $88,500 ").expected_salary(), Some(88_500));
    }

    #[test]
    fn truncates_at_first_non_digit() {
        assert_eq!(
            candidate_with_salary("$95,000.50").expected_salary(),
            Some(95_000)
        );
        assert_eq!(
            candidate_with_salary("90000 USD").expected_salary(),
            Some(90_000)
        );
    }

    #[test]
    fn rejects_non_numeric_salaries() {
        assert_eq!(candidate_with_salary("negotiable").expected_salary(), None);
        assert_eq!(candidate_with_salary("").expected_salary(), None);
        assert_eq!(Candidate::default().expected_salary(), None);
    }

    #[test]
    fn only_the_full_time_key_is_considered() {
        let candidate = Candidate {
            annual_salary_expectation: BTreeMap::from([(
                "part-time".to_string(),
                "$40,000".to_string(),
            )]),
            ..Candidate::default()
        };
        assert_eq!(candidate.expected_salary(), None);
    }
}
