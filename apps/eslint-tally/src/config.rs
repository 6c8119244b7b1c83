//! Configuration discovery and effective settings resolution.
//!
//! eslint-tally reads `tally.toml|yaml|yml` from the start directory (or the
//! closest ancestor, stopping at a `.git` directory) and merges it with CLI
//! flags to produce an `Effective` config.
//! Defaults:
//! - `report`: `eslint-report.json` in the start directory
//! - `rule`: `@typescript-eslint/no-explicit-any`
//! - `stripPrefix`: absolute repository root followed by `/`
//! - `top`: 20
//! - `output`: `human`
//! - `normalizeSeparators`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Report file name looked up when nothing else is configured.
pub const DEFAULT_REPORT: &str = "eslint-report.json";
/// Rule whose messages are tallied by default.
pub const DEFAULT_RULE: &str = "@typescript-eslint/no-explicit-any";
/// Number of files shown in the summary.
pub const DEFAULT_TOP: usize = 20;
pub const DEFAULT_OUTPUT: &str = "human";
/// Output modes understood by the printers.
pub const OUTPUT_MODES: [&str; 2] = ["human", "json"];

const CONFIG_FILES: [&str; 3] = ["tally.toml", "tally.yaml", "tally.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `tally.toml|yaml`.
pub struct TallyConfig {
    pub report: Option<String>,
    pub rule: Option<String>,
    #[serde(rename = "stripPrefix")]
    pub strip_prefix: Option<String>,
    pub top: Option<usize>,
    pub output: Option<String>,
    #[serde(rename = "normalizeSeparators")]
    pub normalize_separators: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the run after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub report: PathBuf,
    pub rule: String,
    /// `None` disables prefix stripping.
    pub strip_prefix: Option<String>,
    pub top: usize,
    pub output: String,
    pub normalize_separators: bool,
    /// Config file that contributed settings, if any.
    pub config_path: Option<PathBuf>,
}

/// CLI-level overrides, all optional.
#[derive(Debug, Default, Clone)]
pub struct Overrides<'a> {
    pub repo_root: Option<&'a str>,
    pub report: Option<&'a str>,
    pub rule: Option<&'a str>,
    pub strip_prefix: Option<&'a str>,
    pub top: Option<usize>,
    pub output: Option<&'a str>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `tally.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// First config file present under `root`, in lookup order.
pub fn find_config(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|f| root.join(f))
        .find(|p| p.is_file())
}

/// Load `TallyConfig` from `tally.toml` or `tally.yaml|yml` if present and valid.
pub fn load_config(root: &Path) -> Option<TallyConfig> {
    let path = find_config(root)?;
    let s = fs::read_to_string(&path).ok()?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str(&s).ok()
    } else {
        serde_yaml::from_str(&s).ok()
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Effective {
    let start = PathBuf::from(cli.repo_root.unwrap_or("."));
    let start = fs::canonicalize(&start).unwrap_or(start);
    let repo_root = detect_repo_root(&start);
    let cfg = load_config(&repo_root);
    let config_path = cfg.as_ref().and(find_config(&repo_root));
    let cfg = cfg.unwrap_or_default();

    // CLI paths are taken as given; config paths are relative to the config file.
    let report = match (cli.report, cfg.report.as_deref()) {
        (Some(r), _) => PathBuf::from(r),
        (None, Some(r)) => repo_root.join(r),
        (None, None) => start.join(DEFAULT_REPORT),
    };

    let rule = cli
        .rule
        .map(|s| s.to_string())
        .or(cfg.rule)
        .unwrap_or_else(|| DEFAULT_RULE.to_string());

    let strip_prefix = cli
        .strip_prefix
        .map(|s| s.to_string())
        .or(cfg.strip_prefix)
        .or_else(|| default_strip_prefix(&repo_root));
    let strip_prefix = strip_prefix.filter(|p| !p.is_empty());

    let top = cli.top.or(cfg.top).unwrap_or(DEFAULT_TOP);

    let output = cli
        .output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let normalize_separators = cfg.normalize_separators.unwrap_or(true);

    Effective {
        repo_root,
        report,
        rule,
        strip_prefix,
        top,
        output,
        normalize_separators,
        config_path,
    }
}

/// Absolute root path with a trailing `/`, in report path notation.
fn default_strip_prefix(root: &Path) -> Option<String> {
    if !root.is_absolute() {
        return None;
    }
    let normalized = crate::utils::normalize_separators(&root.to_string_lossy());
    let mut s = strip_verbatim(&normalized);
    if !s.ends_with('/') {
        s.push('/');
    }
    Some(s)
}

/// Drop the Windows extended-length marker that `fs::canonicalize` adds,
/// so the prefix matches the plain drive paths ESLint writes.
fn strip_verbatim(p: &str) -> String {
    if let Some(rest) = p.strip_prefix("//?/UNC/") {
        format!("//{}", rest)
    } else if let Some(rest) = p.strip_prefix("//?/") {
        rest.to_string()
    } else {
        p.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn at(root: &Path) -> Overrides<'_> {
        Overrides {
            repo_root: root.to_str(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(&at(dir.path()));
        assert_eq!(eff.rule, DEFAULT_RULE);
        assert_eq!(eff.top, 20);
        assert_eq!(eff.output, "human");
        assert!(eff.normalize_separators);
        assert!(eff.config_path.is_none());
        assert_eq!(eff.report.file_name().unwrap(), DEFAULT_REPORT);
        let prefix = eff.strip_prefix.unwrap();
        assert!(prefix.ends_with('/'));
    }

    #[test]
    fn test_strip_verbatim() {
        assert_eq!(strip_verbatim("//?/C:/work/app"), "C:/work/app");
        assert_eq!(strip_verbatim("//?/UNC/host/share/app"), "//host/share/app");
        assert_eq!(strip_verbatim("/home/dev/app"), "/home/dev/app");
        assert_eq!(
            default_strip_prefix(Path::new(r"\\?\C:\work\app")).as_deref(),
            if cfg!(windows) { Some("C:/work/app/") } else { None }
        );
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("tally.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
report = "reports/lint.json"
rule = "no-console"
stripPrefix = "C:/work/app/"
top = 5
output = "json"
normalizeSeparators = false
    "#
        )
        .unwrap();

        let eff = resolve_effective(&at(root));
        assert_eq!(eff.rule, "no-console");
        assert_eq!(eff.top, 5);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.strip_prefix.as_deref(), Some("C:/work/app/"));
        assert!(!eff.normalize_separators);
        assert!(eff.report.ends_with("reports/lint.json"));
        assert!(eff.config_path.unwrap().ends_with("tally.toml"));
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tally.yaml"), "rule: no-debugger\ntop: 3\n").unwrap();
        let eff = resolve_effective(&at(root));
        assert_eq!(eff.rule, "no-debugger");
        assert_eq!(eff.top, 3);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tally.toml"), "rule = \"no-console\"\ntop = 5\n").unwrap();
        let eff = resolve_effective(&Overrides {
            repo_root: root.to_str(),
            rule: Some("eqeqeq"),
            top: Some(50),
            strip_prefix: Some(""),
            ..Default::default()
        });
        assert_eq!(eff.rule, "eqeqeq");
        assert_eq!(eff.top, 50);
        // An empty prefix disables stripping
        assert!(eff.strip_prefix.is_none());
    }

    #[test]
    fn test_config_found_in_ancestor() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tally.toml"), "top = 7\n").unwrap();
        let nested = root.join("packages/web");
        fs::create_dir_all(&nested).unwrap();
        let eff = resolve_effective(&at(&nested));
        assert_eq!(eff.top, 7);
        // The default report still lives in the start directory
        assert!(eff.report.starts_with(fs::canonicalize(&nested).unwrap()));
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("tally.toml"), "top = \"lots\"\n").unwrap();
        assert!(load_config(root).is_none());
        assert!(find_config(root).is_some());
        let eff = resolve_effective(&at(root));
        assert_eq!(eff.top, DEFAULT_TOP);
        assert!(eff.config_path.is_none());
    }
}
