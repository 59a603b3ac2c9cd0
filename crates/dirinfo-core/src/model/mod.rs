//! Data model for a directory inventory.
//!
//! A tree is a plain owned hierarchy: every `DirectoryNode` owns its files
//! and nested directories outright, so there are no indices or back-links.
pub mod directory_node;
pub mod file_entry;

pub use directory_node::DirectoryNode;
pub use file_entry::FileEntry;

use serde::{Deserialize, Deserializer};

/// Read an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
