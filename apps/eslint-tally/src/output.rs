//! Output rendering for tally summaries.
//!
//! Supports `human` (default) and `json` outputs. Uncolored human output is
//! the plain `<count> -> <file>` listing followed by the total line.

use crate::models::TallySummary;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Label printed before a report loading failure.
pub const ERROR_LABEL: &str = "Error reading report:";

fn use_colors(output: &str, no_color: bool) -> bool {
    output != "json" && !no_color && crate::utils::colors_enabled()
}

fn header(rule: &str) -> String {
    if rule == crate::config::DEFAULT_RULE {
        "Files with 'any' types:".to_string()
    } else {
        format!("Files with the most {} errors:", rule)
    }
}

/// Print the summary in the requested format.
pub fn print_tally(res: &TallySummary, output: &str, top: usize, no_color: bool) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_tally_json(res, top)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => print!("{}", render_human(res, top, use_colors(output, no_color))),
    }
}

/// Render the human summary (pure) for printing and tests.
pub fn render_human(res: &TallySummary, top: usize, color: bool) -> String {
    let mut out = String::new();
    let head = header(&res.rule);
    if color {
        out.push_str(&head.bold().to_string());
    } else {
        out.push_str(&head);
    }
    out.push('\n');
    for c in res.counts.iter().take(top) {
        if color {
            out.push_str(&format!("{} -> {}\n", c.errors.red().bold(), c.file));
        } else {
            out.push_str(&format!("{} -> {}\n", c.errors, c.file));
        }
    }
    out.push('\n');
    let total = format!("Total files needing fix: {}", res.total);
    if color {
        out.push_str(&total.bold().to_string());
    } else {
        out.push_str(&total);
    }
    out.push('\n');
    out
}

/// Compose the JSON summary object (pure) for testing/snapshot purposes.
pub fn compose_tally_json(res: &TallySummary, top: usize) -> JsonVal {
    let files: Vec<_> = res
        .counts
        .iter()
        .take(top)
        .map(|c| json!({"file": c.file, "errors": c.errors}))
        .collect();
    json!({
        "rule": res.rule,
        "files": files,
        "shown": files.len(),
        "total": res.total,
        "scanned": res.scanned,
    })
}

/// Print a load failure as one line on stdout, where the summary would have gone.
pub fn print_load_error(err: &crate::loader::ReportError) {
    println!("{}", format_load_error(err));
}

/// Format a load failure as the single line printed to the user.
pub fn format_load_error(err: &crate::loader::ReportError) -> String {
    format!("{} {}", ERROR_LABEL, err)
}
