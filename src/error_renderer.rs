//! Error rendering using ariadne
//!
//! Renders an [`EvalError`] against the expression it came from, with the
//! offending span underlined when the error has one.

use crate::EvalError;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::io::Write;

const SOURCE_ID: &str = "<expr>";

/// Render an error against its source to stderr.
pub fn render_error(source: &str, error: &EvalError) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer.
pub fn render_error_to(
    source: &str,
    error: &EvalError,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String without color codes (useful for tests).
pub fn render_error_to_string(source: &str, error: &EvalError) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &EvalError,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let span = error.span().unwrap_or(0..source.len());

    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, span.clone()))
        .with_message(error.to_string())
        .with_config(ariadne::Config::default().with_color(use_color));

    if error.span().is_some() {
        report = report.with_label(
            Label::new((SOURCE_ID, span))
                .with_message(error.to_string())
                .with_color(Color::Red),
        );
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(source)), &mut *writer)
}
