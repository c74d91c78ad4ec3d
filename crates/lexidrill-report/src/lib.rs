//! lexidrill-report: Rendered session summaries.

pub mod html;

pub use html::{generate_html, write_html_report};
