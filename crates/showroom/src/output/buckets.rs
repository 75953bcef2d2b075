//! Price bucket output formatting.

use owo_colors::OwoColorize;
use serde::Serialize;

/// A price bucket with the number of items it would list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketCount {
    pub id: String,
    pub label: String,
    pub count: usize,
    /// True if this bucket is the one currently selected by `--price`.
    pub selected: bool,
}

/// JSON output structure for the buckets command.
#[derive(Serialize)]
struct BucketsOutput<'a> {
    buckets: &'a [BucketCount],
    total: usize,
}

/// Formats bucket counts as JSON.
pub fn format_buckets_json(buckets: &[BucketCount], total: usize) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&BucketsOutput { buckets, total })
}

/// Formats bucket counts as a table.
pub fn format_buckets_table(buckets: &[BucketCount], use_colors: bool) -> String {
    if buckets.is_empty() {
        return "This catalog has no price buckets.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<16} {:<16} {:>6}", "ID", "Label", "Count");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for bucket in buckets {
        let marker = if bucket.selected { " *" } else { "" };
        let line = format!(
            "{:<16} {:<16} {:>6}{}",
            bucket.id, bucket.label, bucket.count, marker
        );
        if use_colors && bucket.selected {
            output.push_str(&line.bold().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output
}
