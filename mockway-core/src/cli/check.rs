use crate::conf::{ConfigError, RuntimeConfig, ValidationIssue, load_config};
use crate::logging::OutputMode;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Validate a config directory, print a report, exit 1 when it is invalid.
pub fn check(path: PathBuf, mode: OutputMode) -> anyhow::Result<()> {
    match load_config(&path) {
        Ok(cfg) => {
            for line in summary(&cfg) {
                println!("✔ {line}");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", render_config_error(&err, mode));
            std::process::exit(1);
        }
    }
}

pub fn summary(cfg: &RuntimeConfig) -> Vec<String> {
    let delayed = cfg.routes.iter().filter(|r| r.delay_ms.is_some()).count();

    vec![
        "Config loaded successfully".to_string(),
        format!("{} mock routes", cfg.routes.len()),
        format!("{delayed} with simulated latency"),
        format!("listening on {}", cfg.server.listen),
        match &cfg.server.upstream {
            Some(upstream) => format!("forwarding to {upstream}"),
            None => "forwarding to each request's own host".to_string(),
        },
    ]
}

pub fn render_config_error(err: &ConfigError, mode: OutputMode) -> String {
    match (err, mode) {
        (ConfigError::Validation { issues }, OutputMode::Pretty) => render_pretty(issues),
        (ConfigError::Validation { issues }, OutputMode::Plain) => issues
            .iter()
            .map(|i| format!("{}: error: {}", i.origin, i.message))
            .collect::<Vec<_>>()
            .join("\n"),
        (other, _) => other.to_string(),
    }
}

fn render_pretty(issues: &[ValidationIssue]) -> String {
    let mut out = format!("configuration validation failed ({} errors)\n", issues.len());

    let mut by_file: BTreeMap<_, Vec<&ValidationIssue>> = BTreeMap::new();
    for issue in issues {
        by_file.entry(&issue.origin.file).or_default().push(issue);
    }

    for (file, issues) in by_file {
        out.push_str(&format!("\n{}\n", file.display()));
        for issue in issues {
            let at = match issue.origin.index {
                Some(i) => format!("{}[{}]", issue.origin.section, i),
                None => issue.origin.section.clone(),
            };
            out.push_str(&format!(
                "  {} {}: {}\n",
                "error".red().bold(),
                at.dimmed(),
                issue.message
            ));
        }
    }

    out
}
