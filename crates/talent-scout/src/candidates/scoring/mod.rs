//! Deterministic multi-factor scoring rubric over candidate records.
//!
//! Scoring is total and side-effect free: missing or malformed fields
//! degrade to zero or the neutral 5 rather than failing, so every candidate
//! receives a score and ranking never has to handle an error path.

mod rules;

use super::domain::{Candidate, Score, ScoreBreakdown, ScoredCandidate};

/// Round to one decimal place, the resolution of every displayed score.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Score a single candidate against the fixed rubric.
///
/// Each sub-score is clamped to its maximum and rounded to one decimal
/// before the total is formed, so the total always equals the sum of the
/// breakdown values exactly as displayed.
pub fn score_candidate(candidate: &Candidate) -> Score {
    let breakdown = ScoreBreakdown {
        experience: round1(rules::experience_score(&candidate.work_experiences)),
        education: round1(rules::education_score(candidate.education.as_ref())),
        skills: round1(rules::skills_score(&candidate.skills)),
        salary: round1(rules::salary_score(candidate.expected_salary())),
        availability: round1(rules::availability_score(&candidate.work_availability)),
    };

    let total = breakdown.experience
        + breakdown.education
        + breakdown.skills
        + breakdown.salary
        + breakdown.availability;

    Score {
        // Re-rounding the sum of already-rounded terms only absorbs binary
        // float noise; every increment is a multiple of 0.5.
        total_score: round1(total),
        breakdown,
    }
}

/// Score a collection, assigning each record its position in input order as
/// a stable identifier.
pub fn score_all(candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
    candidates
        .into_iter()
        .enumerate()
        .map(|(id, candidate)| {
            let score = score_candidate(&candidate);
            ScoredCandidate {
                id,
                candidate,
                score,
            }
        })
        .collect()
}
