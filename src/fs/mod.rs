//! Filesystem layout, naming, and write helpers.

pub mod layout;
pub mod naming;
pub mod prune;
pub mod scan;
pub mod write;

pub use layout::{illust_dir, image_filename, is_local, sidecar_path};
pub use naming::sanitize_path_component;
pub use prune::{find_artifacts, remove_artifact, LocalArtifact};
pub use scan::{scan_library, LibraryCounts};
pub use write::{stream_to_file, write_atomic};
