//! Plain-text report rendering
//!
//! Words are listed as-is, element names wrapped in angle brackets.

use crate::pipeline::Report;
use std::fmt::Write;

/// Formats a report for the terminal
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{} most used words:", report.top_words.len());
    for (i, word) in report.top_words.iter().enumerate() {
        let _ = writeln!(out, "\t{}. {}", i + 1, word);
    }
    out.push('\n');

    let _ = writeln!(out, "{} most used HTML-tags:", report.top_tags.len());
    for (i, tag) in report.top_tags.iter().enumerate() {
        let _ = writeln!(out, "\t{}. <{}>", i + 1, tag);
    }
    out.push('\n');

    let _ = writeln!(out, "Links on page: {}", report.link_count);
    let _ = writeln!(out, "Images on page: {}", report.image_count);

    out
}

/// Prints a report to stdout
pub fn print_report(report: &Report) {
    print!("{}", format_report(report));
}
