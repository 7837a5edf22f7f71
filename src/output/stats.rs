//! Statistics summaries.

use console::style;

use crate::fs::LibraryCounts;
use crate::sync::{GlobalStats, TargetStats};

/// Print the per-target summary line after a collection finishes.
pub fn print_target_stats(stats: &TargetStats) {
    println!(
        "{} {}: {} downloaded, {} already local, {} excluded, {} failed",
        style("DONE").green().bold(),
        stats.target,
        stats.downloaded,
        stats.already_local,
        stats.excluded,
        stats.failed_items
    );
}

/// Print the end-of-run summary.
pub fn print_global_stats(stats: &GlobalStats) {
    println!();
    println!("{}", style("Sync summary:").bold());
    println!("  Downloaded:    {}", stats.downloaded);
    println!("  Already local: {}", stats.already_local);
    println!("  Excluded:      {}", stats.excluded);
    println!("  Failed items:  {}", stats.failed_items);
    println!(
        "  Targets:       {} completed, {} failed",
        stats.targets_completed, stats.targets_failed
    );
}

/// Print the library counts for the `count` subcommand.
pub fn print_library_counts(counts: &LibraryCounts) {
    println!("{}", style("Local library:").bold());
    println!("  Authors: {}", counts.authors);
    println!("  Illusts: {}", counts.illusts);
    println!("  Images:  {}", counts.images);
    if counts.partial > 0 {
        println!(
            "  {} {} partial download(s) left by an interrupted run",
            style("WARN").yellow().bold(),
            counts.partial
        );
    }
}
