use owo_colors::{OwoColorize, Stream, Style};
use serde::Serialize;

use crate::types::{AttemptRecord, Outcome};

fn style_failure() -> Style {
    Style::new().red()
}

/// Instance name as printed ahead of each attempt.
pub fn progress_name(name: &str) -> String {
    name.if_supports_color(Stream::Stdout, |s| s.dimmed())
        .to_string()
}

/// One-word-ish classification printed after each attempt.
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Success(d) => {
            let runtime = format!("{:.3}s", d.as_secs_f64());
            runtime
                .if_supports_color(Stream::Stdout, |s| s.green())
                .to_string()
        }
        Outcome::Timeout => "timeout"
            .if_supports_color(Stream::Stdout, |s| s.yellow())
            .to_string(),
        Outcome::AbnormalExit(Some(code)) => {
            let msg = format!("failed (exit {code})");
            msg.if_supports_color(Stream::Stdout, |s| s.style(style_failure()))
                .to_string()
        }
        Outcome::AbnormalExit(None) => "failed (killed by signal)"
            .if_supports_color(Stream::Stdout, |s| s.style(style_failure()))
            .to_string(),
        Outcome::StartError(err) => {
            let msg = format!("failed to start: {err}");
            msg.if_supports_color(Stream::Stdout, |s| s.style(style_failure()))
                .to_string()
        }
    }
}

/// End-of-run summary line. Counts only ever land on stdout — the results
/// file stays durations-only.
pub fn format_summary(records: &[AttemptRecord]) -> String {
    let solved = records.iter().filter(|r| r.outcome.is_success()).count();
    let timeouts = records
        .iter()
        .filter(|r| r.outcome == Outcome::Timeout)
        .count();
    let failures = records.len() - solved - timeouts;

    format!(
        "Solved {solved}/{} instances ({timeouts} timeouts, {failures} failures)",
        records.len()
    )
}

/// JSON report of every attempt.
#[derive(Serialize)]
struct JsonAttempt<'a> {
    file: &'a str,
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exit_code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

pub fn format_json(records: &[AttemptRecord]) -> String {
    let attempts: Vec<JsonAttempt> = records
        .iter()
        .map(|record| {
            let (outcome, seconds, exit_code, error) = match &record.outcome {
                Outcome::Success(d) => ("success", Some(d.as_secs_f64()), None, None),
                Outcome::Timeout => ("timeout", None, None, None),
                Outcome::AbnormalExit(code) => ("abnormal_exit", None, *code, None),
                Outcome::StartError(err) => ("start_error", None, None, Some(err.as_str())),
            };
            JsonAttempt {
                file: &record.file_name,
                outcome,
                seconds,
                exit_code,
                error,
            }
        })
        .collect();

    serde_json::to_string_pretty(&attempts).unwrap_or_else(|_| "[]".to_string())
}
