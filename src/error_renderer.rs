//! Error rendering using ariadne
//!
//! Compile errors are shown with the formula and a caret under the token
//! that failed to resolve.

use crate::Error;
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use rpnf::{Engine, render_error};
///
/// let engine = Engine::default();
/// let source = "1 2 frobnicate";
/// if let Err(e) = engine.try_compile::<f64>(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(source: &str, error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for tests, logs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Compile(err) => {
            let mut colors = ColorGenerator::new();
            colors.next(); // Skip the first color.

            let span = err.span().0.clone();
            let report = Report::build(ReportKind::Error, ("<formula>", span.clone()))
                .with_message(err.to_string())
                .with_config(ariadne::Config::default().with_color(use_color))
                .with_label(
                    Label::new(("<formula>", span))
                        .with_message(err.label())
                        .with_color(colors.next()),
                )
                .with_help("tokens are numeric literals or operation mnemonics such as `add`, `dup` or `sqrt`");

            // Reborrow to avoid moving the writer
            report
                .finish()
                .write(("<formula>", Source::from(source)), &mut *writer)
        }
        Error::Config(err) => writeln!(writer, "Configuration error: {}", err),
    }
}
