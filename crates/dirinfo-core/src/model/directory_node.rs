//! A directory and everything beneath it.
use super::file_entry::FileEntry;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// One directory: its name, its direct files, and its direct subdirectories.
///
/// Both lists keep filesystem enumeration order; they are not sorted.
/// `name` is `None` only for trees read from JSON that carried no name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryNode {
    #[serde(default, alias = "Name")]
    pub name: Option<CompactString>,
    #[serde(default, alias = "Files", deserialize_with = "super::null_as_default")]
    pub files: Vec<FileEntry>,
    #[serde(
        default,
        alias = "NestedDirectories",
        deserialize_with = "super::null_as_default"
    )]
    pub nested_directories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Create an empty directory node with the given name.
    pub fn new(name: impl Into<CompactString>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Display name, or `""` when the node has none.
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Total number of files in this subtree.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .nested_directories
                .iter()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }

    /// Total number of directories in this subtree, excluding `self`.
    pub fn directory_count(&self) -> usize {
        self.nested_directories
            .iter()
            .map(|dir| 1 + dir.directory_count())
            .sum()
    }

    /// Visit every node, this one first, then nested directories depth-first.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DirectoryNode)) {
        visit(self);
        for dir in &self.nested_directories {
            dir.walk(visit);
        }
    }
}
