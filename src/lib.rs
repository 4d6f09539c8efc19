//! Husk - An archive tree viewer that reads headers only

pub mod archive;
pub mod envelope;
pub mod output;
pub mod tree;

pub use archive::{ArchiveFormat, EntryRecord, read_entries, scan_archive};
pub use envelope::Envelope;
pub use output::print_envelope;
pub use tree::TreeNode;
