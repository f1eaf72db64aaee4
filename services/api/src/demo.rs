use crate::infra::sample_candidates;
use clap::Args;
use std::cmp::Ordering;
use std::path::PathBuf;
use talent_scout::candidates::{score_all, CandidateSource, JsonFileSource};
use talent_scout::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Candidate JSON document to score (defaults to the built-in sample roster)
    #[arg(long)]
    pub(crate) data: Option<PathBuf>,
    /// Number of top-ranked candidates to print
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let candidates = match &args.data {
        Some(path) => JsonFileSource::new(path).load()?,
        None => sample_candidates(),
    };

    let mut scored = score_all(candidates);
    scored.sort_by(|a, b| {
        b.score
            .total_score
            .partial_cmp(&a.score.total_score)
            .unwrap_or(Ordering::Equal)
    });

    println!("Candidate scoring report ({} records)", scored.len());
    println!("rank  id    total | exp  edu  skl  sal  avl | name");
    for (rank, record) in scored.iter().take(args.top).enumerate() {
        let breakdown = &record.score.breakdown;
        println!(
            "{:>4}  {:<4} {:>6.1} | {:>4.1} {:>4.1} {:>4.1} {:>4.1} {:>4.1} | {}",
            rank + 1,
            record.id,
            record.score.total_score,
            breakdown.experience,
            breakdown.education,
            breakdown.skills,
            breakdown.salary,
            breakdown.availability,
            record.candidate.name.as_deref().unwrap_or("(unnamed)"),
        );
    }

    Ok(())
}
