//! Archive entry tree building and encoding
//!
//! This module materializes a flat stream of archive entry records into a
//! single-rooted tree and serializes it to deterministic JSON:
//!
//! - `TreeNode::insert`: walks/extends the tree for one (path, size, is_dir)
//!   record; purely additive, never fails
//! - The `Serialize` impl in `encode`: emits the `name`/`type`/`size`
//!   (/`children`) object shape with children in ascending name order

mod encode;
mod node;

// Re-export public types
pub use node::TreeNode;
