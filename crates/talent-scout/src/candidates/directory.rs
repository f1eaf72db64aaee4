use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::ScoredCandidate;
use super::scoring::{round1, score_all};
use super::source::{CandidateSource, SourceError};

/// Required shortlist size for a saved selection.
pub const SHORTLIST_SIZE: usize = 5;

const DEFAULT_PAGE_LIMIT: usize = 20;
const TOP_LOCATIONS: usize = 10;

/// Owns the scored candidate collection and the single saved selection.
///
/// The collection is derived state: it is computed from the source once at
/// construction and only changes through [`CandidateDirectory::refresh`].
/// Individual scores are never persisted as authoritative data.
pub struct CandidateDirectory<S> {
    source: S,
    records: RwLock<Vec<ScoredCandidate>>,
    selection: Mutex<Option<SavedSelection>>,
}

impl<S: CandidateSource> CandidateDirectory<S> {
    /// Load and score the full candidate set, keeping the source for later
    /// refreshes.
    pub fn load(source: S) -> Result<Self, SourceError> {
        let records = score_all(source.load()?);
        info!(total = records.len(), "candidate directory scored");
        Ok(Self {
            source,
            records: RwLock::new(records),
            selection: Mutex::new(None),
        })
    }

    /// Re-read the source and recompute every score, replacing the cached
    /// collection. Returns the new record count.
    pub fn refresh(&self) -> Result<usize, DirectoryError> {
        let records = score_all(self.source.load()?);
        let total = records.len();
        *self.records.write().expect("directory lock poisoned") = records;
        info!(total, "candidate directory refreshed");
        Ok(total)
    }

    pub fn total(&self) -> usize {
        self.records.read().expect("directory lock poisoned").len()
    }

    /// Filter, sort, and paginate the scored collection.
    pub fn query(&self, query: &CandidateQuery) -> CandidatePage {
        let records = self.records.read().expect("directory lock poisoned");
        let mut matches: Vec<ScoredCandidate> = records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();
        drop(records);

        sort_records(&mut matches, query.sort_by, query.sort_order);

        let total = matches.len();
        let page = query.page.max(1);
        let limit = query.limit.max(1);
        let candidates = matches
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .collect();

        CandidatePage {
            candidates,
            pagination: Pagination {
                total,
                page,
                limit,
                total_pages: total.div_ceil(limit),
            },
        }
    }

    pub fn get(&self, id: usize) -> Option<ScoredCandidate> {
        self.records
            .read()
            .expect("directory lock poisoned")
            .iter()
            .find(|record| record.id == id)
            .cloned()
    }

    /// Aggregate statistics over the whole collection. An empty directory
    /// yields zeroed stats rather than dividing by zero.
    pub fn stats(&self) -> DirectoryStats {
        let records = self.records.read().expect("directory lock poisoned");
        if records.is_empty() {
            return DirectoryStats::default();
        }

        let mut distribution = ScoreDistribution::default();
        let mut sum = 0.0;
        let mut max_score = f64::MIN;
        let mut min_score = f64::MAX;
        let mut locations: BTreeMap<String, usize> = BTreeMap::new();

        for record in records.iter() {
            let total = record.score.total_score;
            sum += total;
            max_score = max_score.max(total);
            min_score = min_score.min(total);

            if total >= 80.0 {
                distribution.excellent += 1;
            } else if total >= 60.0 {
                distribution.good += 1;
            } else if total >= 40.0 {
                distribution.average += 1;
            } else {
                distribution.below += 1;
            }

            let location = record
                .candidate
                .location
                .clone()
                .unwrap_or_else(|| "Unknown".to_string());
            *locations.entry(location).or_default() += 1;
        }

        let mut top_locations: Vec<LocationCount> = locations
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect();
        top_locations.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.location.cmp(&b.location)));
        top_locations.truncate(TOP_LOCATIONS);

        let salaries: Vec<i64> = records
            .iter()
            .filter_map(|record| record.candidate.expected_salary())
            .filter(|salary| *salary > 0)
            .collect();
        let avg_salary = if salaries.is_empty() {
            0
        } else {
            (salaries.iter().sum::<i64>() as f64 / salaries.len() as f64).round() as i64
        };

        DirectoryStats {
            total: records.len(),
            avg_score: round1(sum / records.len() as f64),
            max_score,
            min_score,
            distribution,
            top_locations,
            avg_salary,
        }
    }

    /// Record the final shortlist. Last write wins; the shortlist must name
    /// exactly five distinct, known candidates.
    pub fn save_selection(
        &self,
        request: SelectionRequest,
    ) -> Result<SavedSelection, DirectoryError> {
        if request.selected_candidates.len() != SHORTLIST_SIZE {
            return Err(DirectoryError::ShortlistSize(
                request.selected_candidates.len(),
            ));
        }

        let known = self.total();
        let mut seen = BTreeSet::new();
        for &id in &request.selected_candidates {
            if id >= known {
                return Err(DirectoryError::UnknownCandidate(id));
            }
            if !seen.insert(id) {
                return Err(DirectoryError::DuplicateCandidate(id));
            }
        }

        let saved = SavedSelection {
            selected_candidates: request.selected_candidates,
            justifications: request.justifications,
            timestamp: Some(Utc::now()),
        };
        *self.selection.lock().expect("selection lock poisoned") = Some(saved.clone());
        Ok(saved)
    }

    /// The saved selection, or an empty default when nothing was recorded.
    pub fn current_selection(&self) -> SavedSelection {
        self.selection
            .lock()
            .expect("selection lock poisoned")
            .clone()
            .unwrap_or_default()
    }

    /// Flat CSV export of the scored collection.
    pub fn export_csv(&self) -> Result<Vec<u8>, DirectoryError> {
        let records = self.records.read().expect("directory lock poisoned");
        let mut writer = csv::Writer::from_writer(Vec::new());

        writer
            .write_record([
                "id",
                "name",
                "email",
                "phone",
                "location",
                "total_score",
                "experience",
                "education",
                "skills",
                "salary",
                "availability",
                "expected_salary",
            ])
            .map_err(|err| DirectoryError::Export(err.to_string()))?;

        for record in records.iter() {
            let candidate = &record.candidate;
            let breakdown = &record.score.breakdown;
            writer
                .write_record([
                    record.id.to_string(),
                    candidate.name.clone().unwrap_or_default(),
                    candidate.email.clone().unwrap_or_default(),
                    candidate.phone.clone().unwrap_or_default(),
                    candidate.location.clone().unwrap_or_default(),
                    format!("{:.1}", record.score.total_score),
                    format!("{:.1}", breakdown.experience),
                    format!("{:.1}", breakdown.education),
                    format!("{:.1}", breakdown.skills),
                    format!("{:.1}", breakdown.salary),
                    format!("{:.1}", breakdown.availability),
                    candidate
                        .expected_salary()
                        .map(|salary| salary.to_string())
                        .unwrap_or_default(),
                ])
                .map_err(|err| DirectoryError::Export(err.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|err| DirectoryError::Export(err.to_string()))
    }
}

/// Error raised by directory operations.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("shortlist must contain exactly 5 candidates, got {0}")]
    ShortlistSize(usize),
    #[error("candidate {0} appears more than once in the shortlist")]
    DuplicateCandidate(usize),
    #[error("unknown candidate id {0}")]
    UnknownCandidate(usize),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("csv export failed: {0}")]
    Export(String),
}

/// Query parameters accepted by the candidate listing endpoint. Parameter
/// names match the original API contract.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CandidateQuery {
    pub search: Option<String>,
    #[serde(rename = "minScore")]
    pub min_score: Option<f64>,
    #[serde(rename = "maxScore")]
    pub max_score: Option<f64>,
    #[serde(rename = "minSalary")]
    pub min_salary: Option<i64>,
    #[serde(rename = "maxSalary")]
    pub max_salary: Option<i64>,
    pub location: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
    #[serde(rename = "sortOrder")]
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
}

impl Default for CandidateQuery {
    fn default() -> Self {
        Self {
            search: None,
            min_score: None,
            max_score: None,
            min_salary: None,
            max_salary: None,
            location: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl CandidateQuery {
    fn matches(&self, record: &ScoredCandidate) -> bool {
        if let Some(needle) = &self.search {
            if !matches_search(record, &needle.to_lowercase()) {
                return false;
            }
        }

        if let Some(min) = self.min_score {
            if record.score.total_score < min {
                return false;
            }
        }
        if let Some(max) = self.max_score {
            if record.score.total_score > max {
                return false;
            }
        }

        if self.min_salary.is_some() || self.max_salary.is_some() {
            // Candidates without a parsable expectation are excluded from
            // salary-bounded queries.
            let Some(salary) = record.candidate.expected_salary() else {
                return false;
            };
            if self.min_salary.is_some_and(|min| salary < min) {
                return false;
            }
            if self.max_salary.is_some_and(|max| salary > max) {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if !location.eq_ignore_ascii_case("all") {
                let candidate_location = record
                    .candidate
                    .location
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase();
                if !candidate_location.contains(&location.to_lowercase()) {
                    return false;
                }
            }
        }

        true
    }
}

fn matches_search(record: &ScoredCandidate, needle: &str) -> bool {
    let candidate = &record.candidate;
    let field_matches = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|value| value.to_lowercase().contains(needle))
    };

    field_matches(&candidate.name)
        || field_matches(&candidate.email)
        || field_matches(&candidate.location)
        || candidate
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
        || candidate.work_experiences.iter().any(|experience| {
            field_matches(&experience.company) || field_matches(&experience.role_name)
        })
}

fn sort_records(records: &mut [ScoredCandidate], sort_by: SortBy, order: SortOrder) {
    match sort_by {
        SortBy::Score => records.sort_by(|a, b| {
            a.score
                .total_score
                .partial_cmp(&b.score.total_score)
                .unwrap_or(Ordering::Equal)
        }),
        SortBy::Name => records.sort_by(|a, b| {
            a.candidate
                .name
                .as_deref()
                .unwrap_or("")
                .cmp(b.candidate.name.as_deref().unwrap_or(""))
        }),
        SortBy::Salary => {
            records.sort_by_key(|record| record.candidate.expected_salary().unwrap_or(0))
        }
        SortBy::Experience => {
            records.sort_by_key(|record| record.candidate.work_experiences.len())
        }
    }

    if order == SortOrder::Desc {
        records.reverse();
    }
}

/// Sort keys supported by the listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Score,
    Name,
    Salary,
    Experience,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
pub struct CandidatePage {
    pub candidates: Vec<ScoredCandidate>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Aggregate view served by the stats endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DirectoryStats {
    pub total: usize,
    #[serde(rename = "avgScore")]
    pub avg_score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    #[serde(rename = "minScore")]
    pub min_score: f64,
    pub distribution: ScoreDistribution,
    #[serde(rename = "topLocations")]
    pub top_locations: Vec<LocationCount>,
    #[serde(rename = "avgSalary")]
    pub avg_salary: i64,
}

/// Score bucket counts: excellent ≥ 80, good ≥ 60, average ≥ 40, below < 40.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub below: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub location: String,
    pub count: usize,
}

/// Incoming shortlist payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(rename = "selectedCandidates", default)]
    pub selected_candidates: Vec<usize>,
    /// Free-text rationale keyed by candidate id.
    #[serde(default)]
    pub justifications: BTreeMap<String, String>,
}

/// The single stored selection. Last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSelection {
    #[serde(rename = "selectedCandidates")]
    pub selected_candidates: Vec<usize>,
    pub justifications: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}
