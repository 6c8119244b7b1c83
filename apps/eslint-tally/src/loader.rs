//! Report loading: read, decode, and parse an ESLint JSON report.
//!
//! Reports redirected from PowerShell are UTF-16 with a byte order mark,
//! so the loader sniffs the BOM before parsing. Every failure (missing file,
//! unreadable bytes, invalid JSON, non-array root) is the same
//! `ReportError::Unavailable` to callers.

use serde_json::Value as Json;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("{}: {reason}", path.display())]
    Unavailable { path: PathBuf, reason: String },
}

impl ReportError {
    fn unavailable(path: &Path, reason: impl ToString) -> Self {
        ReportError::Unavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Read and parse the report at `path` into its top-level array of file records.
pub fn load_report(path: &Path) -> Result<Vec<Json>, ReportError> {
    let bytes = fs::read(path).map_err(|e| ReportError::unavailable(path, e))?;
    let text = decode_text(&bytes).map_err(|e| ReportError::unavailable(path, e))?;
    let json: Json = serde_json::from_str(&text).map_err(|e| ReportError::unavailable(path, e))?;
    match json {
        Json::Array(records) => Ok(records),
        other => Err(ReportError::unavailable(
            path,
            format!("expected a JSON array of file results, found {}", kind_of(&other)),
        )),
    }
}

/// Decode report bytes, honoring UTF-8 and UTF-16 byte order marks.
pub fn decode_text(bytes: &[u8]) -> Result<String, String> {
    if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        return String::from_utf8(rest.to_vec()).map_err(|e| e.to_string());
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFF, 0xFE]) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err("truncated UTF-16 text (odd byte count)".to_string());
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| unit([c[0], c[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| e.to_string())
}

fn kind_of(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}
