//! Distinct file extensions across a whole tree.
use crate::model::DirectoryNode;
use compact_str::CompactString;
use std::collections::BTreeSet;

/// Every non-empty extension found at any depth, deduplicated.
///
/// Comparison is exact and case-sensitive (`.txt` and `.TXT` are distinct).
/// The set is ordered so frontends print it deterministically.
pub fn unique_file_extensions(node: &DirectoryNode) -> BTreeSet<CompactString> {
    let mut extensions = BTreeSet::new();
    node.walk(&mut |dir| {
        extensions.extend(
            dir.files
                .iter()
                .filter(|file| file.has_extension())
                .map(|file| file.extension.clone()),
        );
    });
    extensions
}
