//! JSON encoding for tree nodes
//!
//! Hand-written `Serialize` impl rather than a derive: the output contract
//! fixes the field order (`name`, `type`, `size`, then `children`), maps
//! the directory flag to a `"directory"`/`"file"` string, and omits
//! `children` entirely for files.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::node::TreeNode;

impl Serialize for TreeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        map.serialize_entry("type", if self.is_dir() { "directory" } else { "file" })?;
        map.serialize_entry("size", &self.size())?;
        if self.is_dir() {
            let children: Vec<&TreeNode> = self.children().collect();
            map.serialize_entry("children", &children)?;
        }
        map.end()
    }
}
