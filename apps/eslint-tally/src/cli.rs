//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    name = "eslint-tally",
    version,
    about = "Tally one ESLint rule per file",
    long_about = "eslint-tally reads an ESLint JSON report, counts the messages of a single rule per file, and prints the files needing the most fixes.\n\nConfiguration precedence: CLI > tally.toml > defaults.",
    after_help = "Examples:\n  eslint-tally\n  eslint-tally --report lint_report.json --rule no-unused-vars --top 10\n  eslint-tally --strip-prefix 'C:/work/app/' --output json"
)]
/// Top-level CLI options. Every flag is optional; no flags reproduces the defaults.
pub struct Cli {
    #[arg(long, help = "Report file (default: eslint-report.json)")]
    pub report: Option<String>,
    #[arg(long, help = "Rule id to tally (default: @typescript-eslint/no-explicit-any)")]
    pub rule: Option<String>,
    #[arg(long, help = "Literal prefix stripped from file paths (default: repo root)")]
    pub strip_prefix: Option<String>,
    #[arg(long, help = "Number of files to show (default: 20)")]
    pub top: Option<usize>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Disable colored output")]
    pub no_color: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print effective settings to stderr")]
    pub verbose: bool,
}
