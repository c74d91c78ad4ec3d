//! HTML session summary.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use lexidrill_core::model::OutcomeStatus;
use lexidrill_core::report::SessionReport;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Generate an HTML summary page from a session report.
pub fn generate_html(report: &SessionReport) -> String {
    let summary = &report.summary;
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>lexidrill — {} to {}</title>\n",
        html_escape(&report.languages.native),
        html_escape(&report.languages.target)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1 class=\"final-score\">{}</h1>\n",
        html_escape(&report.headline())
    ));
    html.push_str(&format!(
        "<p class=\"meta\">Word list: <strong>{}</strong> | mode {} | {}</p>\n",
        html_escape(&report.source),
        report.mode,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Breakdown
    html.push_str("<section class=\"breakdown\">\n<ul>\n");
    html.push_str(&format!("<li>Correct: {}</li>\n", summary.correct_count));
    html.push_str(&format!("<li>Incorrect: {}</li>\n", summary.incorrect_count));
    html.push_str(&format!("<li>Skipped: {}</li>\n", summary.skipped_count));
    if summary.not_reached_count > 0 {
        html.push_str(&format!(
            "<li>Not reached: {}</li>\n",
            summary.not_reached_count
        ));
    }
    html.push_str(&format!(
        "<li>Attempted accuracy: {}%</li>\n",
        summary.attempted_accuracy
    ));
    html.push_str(&format!(
        "<li>Total questions: {}</li>\n",
        summary.total_questions
    ));
    html.push_str("</ul>\n</section>\n");

    // Misses only; a perfect run gets no table.
    let rows: String = report
        .misses()
        .map(|d| {
            let class = match d.status {
                OutcomeStatus::Skipped => "skipped",
                _ => "wrong",
            };
            format!(
                "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                class,
                d.sequence_number,
                html_escape(&d.direction.label(&report.languages)),
                html_escape(&d.prompt),
                html_escape(&d.selected_answer),
                html_escape(&d.correct_answer),
            )
        })
        .collect();

    if !rows.is_empty() {
        html.push_str("<section class=\"misses\">\n");
        html.push_str("<table>\n");
        html.push_str("<thead><tr><th>#</th><th>Mode</th><th>Question</th><th>Your answer</th><th>Correct answer</th></tr></thead>\n");
        html.push_str("<tbody>\n");
        html.push_str(&rows);
        html.push_str("</tbody></table>\n");
        html.push_str("</section>\n");
    }

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML summary to a file.
pub fn write_html_report(report: &SessionReport, path: &Path) -> Result<()> {
    let html = generate_html(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --wrong: #fde2e2; --skipped: #fef3c7; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --wrong: #7f1d1d; --skipped: #78350f; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { margin-top: 1rem; }
.meta { color: #6b7280; }
ul { line-height: 1.6; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.wrong { background: var(--wrong); }
.skipped { background: var(--skipped); }
"#;
