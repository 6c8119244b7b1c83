//! eslint-tally CLI binary entry point.
//! Resolves settings, runs the tally, and prints results.

use clap::Parser;
use eslint_tally::cli::Cli;
use eslint_tally::{config, output, tally, utils};

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(&config::Overrides {
        repo_root: cli.repo_root.as_deref(),
        report: cli.report.as_deref(),
        rule: cli.rule.as_deref(),
        strip_prefix: cli.strip_prefix.as_deref(),
        top: cli.top,
        output: cli.output.as_deref(),
    });

    // A config file exists but could not be parsed
    if eff.config_path.is_none() {
        if let Some(p) = config::find_config(&eff.repo_root) {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("{} is not valid; using defaults.", p.to_string_lossy())
            );
        }
    }
    if !config::OUTPUT_MODES.contains(&eff.output.as_str()) {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            format!("Unknown output mode '{}'; using human.", eff.output)
        );
    }
    if cli.verbose {
        if let Some(p) = eff.config_path.as_ref() {
            eprintln!("{} config: {}", utils::info_prefix(), p.to_string_lossy());
        }
        eprintln!("{} report: {}", utils::info_prefix(), eff.report.to_string_lossy());
        eprintln!("{} rule: {}", utils::info_prefix(), eff.rule);
        eprintln!(
            "{} strip prefix: {}",
            utils::info_prefix(),
            eff.strip_prefix.as_deref().unwrap_or("(none)")
        );
    }

    match tally::run_tally(&eff) {
        Ok(summary) => output::print_tally(&summary, &eff.output, eff.top, cli.no_color),
        Err(e) => {
            output::print_load_error(&e);
            std::process::exit(2);
        }
    }
}
