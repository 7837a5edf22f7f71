//! Console output utilities.

pub mod console;
pub mod stats;

pub use console::{print_error, print_info, print_success, print_warning};
pub use stats::{print_global_stats, print_library_counts, print_target_stats};
