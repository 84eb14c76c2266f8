//! Report rendering — turn [`Buckets`] into the text pasted into test sources.

use std::fmt::Write;

use super::grouping::{Buckets, Category};

/// The xUnit attribute line for one resource file.
///
/// The name is embedded verbatim; a `"` in it yields a broken line.
pub fn inline_data(name: &str) -> String {
    format!("[InlineData(\"{name}\")]")
}

/// Render all three sections in [`Category::ALL`] order.
///
/// Each section is a blank line, the heading, a blank line, then the
/// entries one per line. An empty bucket still gets its heading.
pub fn render(buckets: &Buckets) -> String {
    let mut out = String::new();
    for category in Category::ALL {
        let lines: Vec<String> = buckets
            .get(category)
            .iter()
            .map(|name| inline_data(name))
            .collect();
        // Writing into a String cannot fail.
        let _ = write!(out, "\n{}\n\n{}\n", category.heading(), lines.join("\n"));
    }
    out
}
