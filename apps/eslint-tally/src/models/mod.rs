//! Shared data models for the report views and tally output structs.

pub mod report;

use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Number of matching messages found in one file.
pub struct FileIssueCount {
    pub file: String,
    pub errors: usize,
}

#[derive(Serialize, Debug, Clone)]
/// Ranked tally handed to printers.
pub struct TallySummary {
    pub rule: String,
    /// Qualifying files, descending by count; ties keep report order.
    pub counts: Vec<FileIssueCount>,
    /// Number of qualifying files (never capped by `top`).
    pub total: usize,
    /// Number of file records in the report.
    pub scanned: usize,
}
