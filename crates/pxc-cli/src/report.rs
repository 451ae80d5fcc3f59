//! Rendering of a [`SnapshotComparison`] as the line-oriented report.
//!
//! Every line of report text is fixed; `colored` only accents it. Warnings
//! about count and length mismatches are part of the report and go to
//! stdout, not the log.

use colored::Colorize;

use pxc_diff::{ByteDiff, EntryComparison, SnapshotComparison};

/// Print the full comparison report to stdout.
pub fn print_report(cmp: &SnapshotComparison, left_label: &str, right_label: &str) {
    println!(
        "Found {} PixelConfig entries in {}",
        cmp.left_count, left_label
    );
    println!(
        "Found {} PixelConfig entries in {}",
        cmp.right_count, right_label
    );

    if cmp.count_mismatch() {
        println!(
            "{}",
            "Warning: Different number of PixelConfig entries found!".yellow()
        );
    }

    for entry in &cmp.entries {
        print_entry(entry, left_label, right_label);
    }

    if cmp.compared() == 0 {
        println!("No PixelConfig entries found in one or both files.");
    }
}

fn print_entry(entry: &EntryComparison, left_label: &str, right_label: &str) {
    // Entry headers are 1-based; the structured result is 0-based.
    println!();
    println!(
        "{}",
        format!("=== Comparing PixelConfig entry {} ===", entry.index + 1).bold()
    );
    println!("Decoded {} bytes from {}", entry.left_len, left_label);
    println!("Decoded {} bytes from {}", entry.right_len, right_label);

    if entry.length_mismatch() {
        println!("{}", "Warning: Different byte lengths!".yellow());
    }

    if entry.is_identical() {
        println!("No differences found in this PixelConfig entry.");
        return;
    }

    println!();
    println!("Differences found:");
    for diff in &entry.diffs {
        println!("{}", byte_diff_line(diff));
    }
}

/// Format one differing byte: zero-padded offset, two-digit lower hex
/// values, ascending comma-separated bit list.
fn byte_diff_line(diff: &ByteDiff) -> String {
    let bits = diff
        .bits
        .iter()
        .map(|bit| bit.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "  Byte {:04}: 0x{:02x} vs 0x{:02x} (bits {} differ)",
        diff.index, diff.left, diff.right, bits
    )
}
