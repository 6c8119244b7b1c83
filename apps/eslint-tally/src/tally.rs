//! Tally runner: count one rule's messages per file and rank the files.
//!
//! Produces a `TallySummary` whose counts are sorted by descending count.
//! The sort is stable, so files with equal counts keep report order.

use crate::config::Effective;
use crate::loader::{load_report, ReportError};
use crate::models::report::ReportRecord;
use crate::models::{FileIssueCount, TallySummary};
use crate::utils::normalize_separators;
use rayon::prelude::*;
use serde_json::Value as Json;

/// Options controlling how matches are counted and paths displayed.
#[derive(Debug, Clone)]
pub struct TallyOptions<'a> {
    pub rule: &'a str,
    pub strip_prefix: Option<&'a str>,
    pub normalize_separators: bool,
}

impl<'a> TallyOptions<'a> {
    pub fn from_effective(eff: &'a Effective) -> Self {
        TallyOptions {
            rule: &eff.rule,
            strip_prefix: eff.strip_prefix.as_deref(),
            normalize_separators: eff.normalize_separators,
        }
    }
}

/// Load the configured report and produce the ranked summary.
pub fn run_tally(eff: &Effective) -> Result<TallySummary, ReportError> {
    let records = load_report(&eff.report)?;
    Ok(summarize(&records, &TallyOptions::from_effective(eff)))
}

/// Aggregate and rank already-parsed report records.
pub fn summarize(records: &[Json], opts: &TallyOptions) -> TallySummary {
    let counts = rank(count_matches(records, opts));
    TallySummary {
        rule: opts.rule.to_string(),
        total: counts.len(),
        counts,
        scanned: records.len(),
    }
}

/// One `FileIssueCount` per record with at least one matching message,
/// in report order.
pub fn count_matches(records: &[Json], opts: &TallyOptions) -> Vec<FileIssueCount> {
    records
        .par_iter()
        .filter_map(|v| {
            let rec = ReportRecord(v);
            let errors = rec
                .messages()
                .filter(|m| m.rule_id() == Some(opts.rule))
                .count();
            if errors == 0 {
                return None;
            }
            Some(FileIssueCount {
                file: display_path(rec.file_path(), opts),
                errors,
            })
        })
        .collect()
}

/// Sort descending by count; ties keep their relative order.
pub fn rank(mut counts: Vec<FileIssueCount>) -> Vec<FileIssueCount> {
    counts.sort_by(|a, b| b.errors.cmp(&a.errors));
    counts
}

fn display_path(raw: &str, opts: &TallyOptions) -> String {
    let (path, prefix) = if opts.normalize_separators {
        (
            normalize_separators(raw),
            opts.strip_prefix.map(normalize_separators),
        )
    } else {
        (raw.to_string(), opts.strip_prefix.map(str::to_string))
    };
    match prefix {
        Some(p) if !p.is_empty() => match path.strip_prefix(p.as_str()) {
            Some(rest) => rest.to_string(),
            None => path,
        },
        _ => path,
    }
}
