//! Sync statistics tracking.

/// Per-target sync counters.
#[derive(Debug, Default)]
pub struct TargetStats {
    /// Human-readable target label, e.g. `bookmarks/public`.
    pub target: String,

    pub downloaded: u64,
    pub already_local: u64,
    pub excluded: u64,
    pub failed_items: u64,
}

impl TargetStats {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            ..Default::default()
        }
    }

    /// Total items the listing produced for this target.
    pub fn total_listed(&self) -> u64 {
        self.downloaded + self.already_local + self.excluded + self.failed_items
    }
}

/// Aggregated statistics across all targets of one run.
#[derive(Debug, Default)]
pub struct GlobalStats {
    pub downloaded: u64,
    pub already_local: u64,
    pub excluded: u64,
    pub failed_items: u64,
    pub targets_completed: u64,
    pub targets_failed: u64,
    /// Message of the first collection-level failure, kept so the final
    /// report can name the cause (e.g. an expired session) instead of a
    /// bare failure count.
    pub first_error: Option<String>,
}

impl GlobalStats {
    /// Fold a completed target's counters into the totals.
    pub fn add_target(&mut self, stats: &TargetStats) {
        self.downloaded += stats.downloaded;
        self.already_local += stats.already_local;
        self.excluded += stats.excluded;
        self.failed_items += stats.failed_items;
        self.targets_completed += 1;
    }

    /// Record a target whose listing failed. Its partial counters still
    /// count; items written before the failure are on disk and valid.
    pub fn add_failed_target(&mut self, stats: &TargetStats, error: &str) {
        self.downloaded += stats.downloaded;
        self.already_local += stats.already_local;
        self.excluded += stats.excluded;
        self.failed_items += stats.failed_items;
        self.targets_failed += 1;
        if self.first_error.is_none() {
            self.first_error = Some(format!("{}: {}", stats.target, error));
        }
    }
}
