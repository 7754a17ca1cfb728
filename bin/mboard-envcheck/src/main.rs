//! mboard-envcheck - CI secret-injection audit.
//!
//! Runs inside the deployment pipeline after secrets are injected.  Reads
//! the process environment, materializes `*_ENV_FILE` secrets as local
//! `.env` files for later pipeline steps, and prints a report with every
//! value masked.  The process environment is never modified; variables
//! parsed out of the env files are tracked in memory only.

use std::collections::BTreeMap;
use std::env;
use std::fs;

use anyhow::{Context, Result};
use chrono::Local;

/// Environment-file secrets handled by the audit, with the local file each
/// one materializes to.
const ENV_FILE_SECRETS: [(&str, &str); 3] = [
    ("DEV_ENV_FILE", "dev.env"),
    ("PROD_ENV_FILE", "prod.env"),
    ("STAGING_ENV_FILE", "staging.env"),
];

/// Variables a deployment commonly injects; reported with their values
/// (masked for sensitive-looking names).
const COMMON_VARS: [&str; 7] = [
    "APP_NAME",
    "API_URL",
    "DATABASE_URL",
    "DEBUG",
    "PORT",
    "NODE_ENV",
    "ENVIRONMENT",
];

/// Name fragments that force value masking in the loaded-variables report.
const MASK_KEYWORDS: [&str; 5] = ["URL", "KEY", "SECRET", "PASSWORD", "TOKEN"];

/// Name fragments that mark a variable for the final presence sweep.
const SENSITIVE_KEYWORDS: [&str; 7] = [
    "SECRET", "KEY", "TOKEN", "PASSWORD", "ENV", "API", "DATABASE",
];

fn main() -> Result<()> {
    println!("=== Environment Secrets Audit ===");
    println!("Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(50));

    // Materialize env-file secrets and collect the variables they define.
    let mut loaded = BTreeMap::new();
    for (name, file) in ENV_FILE_SECRETS {
        match env::var(name) {
            Ok(content) if !content.is_empty() => {
                handle_env_file(name, file, &content, &mut loaded)?;
            }
            _ => println!("{name}: Not set"),
        }
        println!();
    }

    let process = process_env();
    print_loaded_variables(&process, &loaded);

    println!("{}", "=".repeat(50));
    println!("All environment variables containing 'ENV', 'KEY', 'SECRET', etc.:");

    let sensitive = sensitive_vars(&process, &loaded);
    if sensitive.is_empty() {
        println!("No environment variables found");
    } else {
        for (name, value) in &sensitive {
            println!("  {name}: [PRESENT - {} characters]", value.chars().count());
        }
    }

    println!("{}", "=".repeat(50));
    println!("Audit completed");
    Ok(())
}

/// Materialize one `*_ENV_FILE` secret as a local file, print a masked
/// report, and collect its `KEY=value` pairs into `loaded`.
fn handle_env_file(
    name: &str,
    file: &str,
    content: &str,
    loaded: &mut BTreeMap<String, String>,
) -> Result<()> {
    println!("Processing {name} environment file...");

    fs::write(file, content).with_context(|| format!("Failed to write {file}"))?;

    println!("  - Created: {file}");
    println!("  - Lines: {}", line_count(content));

    println!("  - Content preview:");
    for line in preview_lines(content) {
        println!("    {line}");
    }

    loaded.extend(parse_env_content(content));
    println!("  - Environment variables parsed from {file}");
    Ok(())
}

/// Report the commonly injected variables, masking sensitive-looking names.
fn print_loaded_variables(process: &BTreeMap<String, String>, loaded: &BTreeMap<String, String>) {
    println!("=== Loaded Environment Variables ===");
    for var in COMMON_VARS {
        let Some(value) = loaded_value(var, process, loaded) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if is_masked_name(var) {
            println!("{var}: [PRESENT - {} characters]", value.chars().count());
        } else {
            println!("{var}: {value}");
        }
    }
}

/// Snapshot of the process environment.  Non-UTF-8 names or values are
/// skipped.
fn process_env() -> BTreeMap<String, String> {
    env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}

/// Parse `KEY=value` lines, skipping blanks and `#` comments.
fn parse_env_content(content: &str) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_owned(), value.trim().to_owned());
        }
    }
    vars
}

/// Look up a variable, preferring env-file values over the process
/// environment.
fn loaded_value<'a>(
    name: &str,
    process: &'a BTreeMap<String, String>,
    loaded: &'a BTreeMap<String, String>,
) -> Option<&'a String> {
    loaded.get(name).or_else(|| process.get(name))
}

/// Union of process environment and env-file variables, filtered to
/// sensitive-looking names and sorted by name.  Env-file values take
/// precedence over the process environment.
fn sensitive_vars(
    process: &BTreeMap<String, String>,
    loaded: &BTreeMap<String, String>,
) -> Vec<(String, String)> {
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    for (name, value) in process {
        merged.insert(name, value);
    }
    for (name, value) in loaded {
        merged.insert(name, value);
    }

    merged
        .into_iter()
        .filter(|(name, _)| is_sensitive_name(name))
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .collect()
}

/// Masked preview of an env-file body: at most the first three lines, values
/// replaced by `***`.  Whitespace-only content previews as one blank line.
fn preview_lines(content: &str) -> Vec<String> {
    content
        .trim()
        .split('\n')
        .take(3)
        .map(mask_preview_line)
        .collect()
}

/// Mask the value part of one previewed `KEY=value` line.
fn mask_preview_line(line: &str) -> String {
    match line.split_once('=') {
        Some((key, _)) => format!("{key}=***"),
        None => line.to_owned(),
    }
}

/// Line count as reported for a created file: zero for blank content,
/// otherwise newline count plus one (a trailing newline counts as a line).
fn line_count(content: &str) -> usize {
    if content.trim().is_empty() {
        0
    } else {
        content.matches('\n').count() + 1
    }
}

fn is_masked_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    MASK_KEYWORDS.iter().any(|k| upper.contains(k))
}

fn is_sensitive_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    SENSITIVE_KEYWORDS.iter().any(|k| upper.contains(k))
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn line_count_matches_report_format() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("   \n "), 0);
        assert_eq!(line_count("A=1"), 1);
        assert_eq!(line_count("A=1\nB=2"), 2);
        // A trailing newline is reported as an extra line.
        assert_eq!(line_count("A=1\n"), 2);
    }

    #[test]
    fn preview_masks_values_but_keeps_other_lines() {
        assert_eq!(mask_preview_line("API_KEY=abc123"), "API_KEY=***");
        assert_eq!(mask_preview_line("KEY=a=b"), "KEY=***");
        assert_eq!(mask_preview_line("# comment"), "# comment");
    }

    #[test]
    fn preview_shows_at_most_three_masked_lines() {
        let preview = preview_lines("A=1\nB=2\nC=3\nD=4");
        assert_eq!(preview, ["A=***", "B=***", "C=***"]);
    }

    #[test]
    fn whitespace_only_content_previews_as_one_blank_line() {
        assert_eq!(preview_lines("  \n   "), [""]);
    }

    #[test]
    fn parse_skips_comments_and_blanks() {
        let parsed = parse_env_content("# header\n\nAPP_NAME=board\nno equals\nDEBUG=true\n");
        assert_eq!(parsed, map(&[("APP_NAME", "board"), ("DEBUG", "true")]));
    }

    #[test]
    fn parse_trims_and_splits_on_first_equals() {
        let parsed = parse_env_content("  DATABASE_URL = sqlite://x?a=b  ");
        assert_eq!(parsed, map(&[("DATABASE_URL", "sqlite://x?a=b")]));
    }

    #[test]
    fn masked_names_match_keywords_case_insensitively() {
        assert!(is_masked_name("DATABASE_URL"));
        assert!(is_masked_name("api_key"));
        assert!(!is_masked_name("APP_NAME"));
        assert!(!is_masked_name("DEBUG"));
    }

    #[test]
    fn sensitive_names_cover_env_api_and_database() {
        assert!(is_sensitive_name("MY_SECRET"));
        assert!(is_sensitive_name("NODE_ENV"));
        assert!(is_sensitive_name("API_URL"));
        assert!(is_sensitive_name("database_url"));
        assert!(!is_sensitive_name("HOME"));
        assert!(!is_sensitive_name("DEBUG"));
    }

    #[test]
    fn env_file_values_take_precedence() {
        let process = map(&[("API_URL", "from-process"), ("PORT", "5000")]);
        let loaded = map(&[("API_URL", "from-file")]);

        assert_eq!(
            loaded_value("API_URL", &process, &loaded).map(String::as_str),
            Some("from-file")
        );
        assert_eq!(
            loaded_value("PORT", &process, &loaded).map(String::as_str),
            Some("5000")
        );
        assert_eq!(loaded_value("MISSING", &process, &loaded), None);
    }

    #[test]
    fn sensitive_sweep_is_sorted_and_filtered() {
        let process = map(&[("ZOO_TOKEN", "zzz"), ("HOME", "/root"), ("API_URL", "a")]);
        let loaded = map(&[("AWS_SECRET", "s"), ("API_URL", "b")]);

        let swept = sensitive_vars(&process, &loaded);
        let names: Vec<&str> = swept.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["API_URL", "AWS_SECRET", "ZOO_TOKEN"]);

        // API_URL value must come from the env file, not the process.
        assert_eq!(swept[0].1, "b");
    }

    #[test]
    fn handle_env_file_writes_and_collects() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("dev.env");
        let file = file.to_str().expect("utf-8 path");

        let mut loaded = BTreeMap::new();
        handle_env_file("DEV_ENV_FILE", file, "A=1\n# c\nB=2", &mut loaded)
            .expect("handle env file");

        assert_eq!(fs::read_to_string(file).expect("read back"), "A=1\n# c\nB=2");
        assert_eq!(loaded, map(&[("A", "1"), ("B", "2")]));
    }
}
