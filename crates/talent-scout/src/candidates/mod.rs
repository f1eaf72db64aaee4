//! Candidate intake, scoring, and directory services.
//!
//! The scoring rubric in [`scoring`] is the decision core: a pure, total
//! function over a candidate record. [`directory`] owns the scored
//! collection and the saved shortlist; [`router`] exposes both over HTTP.

pub mod directory;
pub mod domain;
pub mod router;
pub mod scoring;
pub mod source;

#[cfg(test)]
mod tests;

pub use directory::{
    CandidateDirectory, CandidatePage, CandidateQuery, DirectoryError, DirectoryStats,
    LocationCount, Pagination, SavedSelection, ScoreDistribution, SelectionRequest, SortBy,
    SortOrder, SHORTLIST_SIZE,
};
pub use domain::{
    Candidate, Degree, Education, Score, ScoreBreakdown, ScoredCandidate, WorkExperience,
};
pub use router::candidate_router;
pub use scoring::{score_all, score_candidate};
pub use source::{CandidateSource, JsonFileSource, SourceError, StaticSource};
