//! Text and JSON output of command results.

use fcompat::Report;
use fcompat::domain::Severity;
use serde_json::json;
use std::collections::BTreeSet;
use std::fmt::Write;

pub(crate) fn report_text(report: &Report) -> String {
    let mut out = String::new();
    for finding in &report.findings {
        let label = match finding.severity() {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        let _ = writeln!(out, "{label}[{}]: {}", finding.kind.code(), finding.message());
    }

    if report.is_unchecked() {
        out.push_str("No feature catalog available, nothing was checked.\n");
    } else {
        let _ = writeln!(
            out,
            "{} error(s), {} warning(s) against the {} catalog of {}",
            report.count(Severity::Error),
            report.count(Severity::Warning),
            report.source,
            report.identity,
        );
    }
    out
}

pub(crate) fn report_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub(crate) fn platforms_text(feature: &str, platforms: &BTreeSet<String>) -> String {
    if platforms.is_empty() {
        return format!("{feature}: no platforms\n");
    }
    let mut out = String::new();
    for platform in platforms {
        out.push_str(platform);
        out.push('\n');
    }
    out
}

pub(crate) fn platforms_json(
    feature: &str,
    platforms: &BTreeSet<String>,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&json!({ "feature": feature, "platforms": platforms }))
}
