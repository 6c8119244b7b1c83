//! Small helpers shared by the binary and printers.

use owo_colors::OwoColorize;

/// Whether stderr/stdout styling is allowed by the environment.
pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Convert Windows separators to `/`.
pub fn normalize_separators(p: &str) -> String {
    p.replace('\\', "/")
}
