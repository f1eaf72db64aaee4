use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use talent_scout::candidates::{
    Candidate, CandidateSource, Degree, Education, JsonFileSource, SourceError, StaticSource,
    WorkExperience,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Candidate source for the serve command: a JSON document when configured,
/// the built-in sample roster otherwise.
pub(crate) enum ServeSource {
    File(JsonFileSource),
    BuiltIn(StaticSource),
}

impl CandidateSource for ServeSource {
    fn load(&self) -> Result<Vec<Candidate>, SourceError> {
        match self {
            ServeSource::File(source) => source.load(),
            ServeSource::BuiltIn(source) => source.load(),
        }
    }
}

pub(crate) fn serve_source(path: Option<&Path>) -> ServeSource {
    match path {
        Some(path) => ServeSource::File(JsonFileSource::new(path)),
        None => ServeSource::BuiltIn(StaticSource::new(sample_candidates())),
    }
}

fn experience(role: &str, company: &str) -> WorkExperience {
    WorkExperience {
        role_name: Some(role.to_string()),
        company: Some(company.to_string()),
    }
}

fn salary(amount: &str) -> BTreeMap<String, String> {
    BTreeMap::from([("full-time".to_string(), amount.to_string())])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Small demo roster so `serve` and `score` work without a data file.
pub(crate) fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            name: Some("Jordan Lee".to_string()),
            email: Some("jordan.lee@example.com".to_string()),
            location: Some("Chicago".to_string()),
            work_experiences: vec![
                experience("Software Engineer", "Lakeshore Systems"),
                experience("Tech Lead", "Lakeshore Systems"),
            ],
            education: Some(Education {
                highest_level: Some("Master's Degree".to_string()),
                degrees: vec![Degree {
                    degree: Some("MS".to_string()),
                    subject: Some("Computer Science".to_string()),
                    school: Some("University of Illinois".to_string()),
                    gpa: Some("3.7".to_string()),
                    is_top50: Some(true),
                    ..Degree::default()
                }],
            }),
            skills: strings(&["React", "TypeScript", "PostgreSQL", "Docker", "AWS"]),
            annual_salary_expectation: salary("$115,000"),
            work_availability: strings(&["full-time"]),
            ..Candidate::default()
        },
        Candidate {
            name: Some("Sam Rivera".to_string()),
            email: Some("sam.rivera@example.com".to_string()),
            location: Some("Denver".to_string()),
            work_experiences: vec![experience("Product Manager", "Summit Labs")],
            skills: strings(&["Roadmapping", "SQL"]),
            annual_salary_expectation: salary("$98,000"),
            work_availability: strings(&["full-time", "part-time"]),
            ..Candidate::default()
        },
        Candidate {
            name: Some("Alex Kim".to_string()),
            email: Some("alex.kim@example.com".to_string()),
            location: Some("Chicago".to_string()),
            work_experiences: vec![
                experience("Backend Developer", "Northwind"),
                experience("Full Stack Developer", "Northwind"),
                experience("Engineering Manager", "Northwind"),
            ],
            education: Some(Education {
                highest_level: Some("Bachelor's Degree".to_string()),
                degrees: vec![Degree {
                    degree: Some("BS".to_string()),
                    subject: Some("Software Engineering".to_string()),
                    school: Some("Purdue University".to_string()),
                    gpa: Some("3.5".to_string()),
                    ..Degree::default()
                }],
            }),
            skills: strings(&["Java", "Kubernetes", "Microservices", "GraphQL"]),
            annual_salary_expectation: salary("$132,000"),
            work_availability: strings(&["full-time"]),
            ..Candidate::default()
        },
        Candidate {
            name: Some("Robin Novak".to_string()),
            location: Some("Remote".to_string()),
            work_experiences: vec![experience("Copywriter", "Bright Agency")],
            annual_salary_expectation: salary("negotiable"),
            work_availability: strings(&["part-time"]),
            ..Candidate::default()
        },
    ]
}
