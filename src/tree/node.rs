//! TreeNode - the tree data model and path insertion

use std::collections::BTreeMap;

/// Name of the synthetic root node every archive tree hangs off of.
pub const ROOT_NAME: &str = "root";

/// One node in the materialized archive tree.
///
/// Each parent exclusively owns its children through the `BTreeMap`, which
/// also fixes child iteration to ascending byte-wise name order. That
/// ordering is part of the output contract, not an implementation detail:
/// encoding the same set of records must produce the same document
/// regardless of the order the archive listed them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    size: u64,
    is_dir: bool,
    children: BTreeMap<String, TreeNode>,
}

impl TreeNode {
    /// Create the synthetic root: a directory named "root" with no children.
    pub fn root() -> Self {
        Self::new(ROOT_NAME.to_string(), true, 0)
    }

    fn new(name: String, is_dir: bool, size: u64) -> Self {
        Self {
            name,
            size,
            is_dir,
            children: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Byte size as reported in output. Directories always report 0, even
    /// when the originating record carried a size.
    pub fn size(&self) -> u64 {
        if self.is_dir { 0 } else { self.size }
    }

    /// Children in ascending name order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    /// Insert one archive entry record, creating any missing intermediate
    /// nodes along the way.
    ///
    /// The path is split on `/` with empty segments discarded, so leading,
    /// trailing, and repeated slashes all normalize away; a path with no
    /// segments left ("" or "/") is a no-op. Intermediate segments are
    /// created as directories; the final segment takes the caller's size
    /// and directory flag. Nodes that already exist are reused as-is:
    /// the first record to create a node fixes its type and size
    /// permanently, and later conflicting records are absorbed silently.
    pub fn insert(&mut self, path: &str, size: u64, is_dir: bool) {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return;
        }

        let last = segments.len() - 1;
        let mut current = self;
        for (index, segment) in segments.iter().enumerate() {
            let is_last = index == last;
            current = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| {
                    TreeNode::new(
                        (*segment).to_string(),
                        !is_last || is_dir,
                        if is_last { size } else { 0 },
                    )
                });
        }
    }
}
