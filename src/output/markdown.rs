//! Markdown report generation
//!
//! This module writes a human-readable markdown version of a report, for
//! keeping alongside the database.

use crate::output::OutputResult;
use crate::pipeline::Report;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report to `output_path`
///
/// # Arguments
///
/// * `report` - The report to render
/// * `source` - What the report describes (page URL or database path)
/// * `output_path` - Path where the markdown file should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote markdown report
/// * `Err(OutputError)` - Failed to write report
pub fn write_markdown_report(
    report: &Report,
    source: &str,
    output_path: &Path,
) -> OutputResult<()> {
    let markdown = format_markdown_report(report, source);

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a report as markdown
pub fn format_markdown_report(report: &Report, source: &str) -> String {
    let mut md = String::new();

    md.push_str("# Page Statistics\n\n");
    md.push_str(&format!("- **Source**: {}\n", source));
    md.push_str(&format!("- **Links**: {}\n", report.link_count));
    md.push_str(&format!("- **Images**: {}\n\n", report.image_count));

    md.push_str("## Most Used Words\n\n");
    if report.top_words.is_empty() {
        md.push_str("_No words found._\n\n");
    } else {
        md.push_str("| Rank | Word |\n");
        md.push_str("|------|------|\n");
        for (i, word) in report.top_words.iter().enumerate() {
            md.push_str(&format!("| {} | {} |\n", i + 1, escape_cell(word)));
        }
        md.push('\n');
    }

    md.push_str("## Most Used Tags\n\n");
    if report.top_tags.is_empty() {
        md.push_str("_No tags found._\n");
    } else {
        md.push_str("| Rank | Tag |\n");
        md.push_str("|------|-----|\n");
        for (i, tag) in report.top_tags.iter().enumerate() {
            md.push_str(&format!("| {} | `<{}>` |\n", i + 1, tag));
        }
    }

    md
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
