//! Serial directory walk that builds a [`DirectoryNode`] tree.
//!
//! `jwalk` yields entries depth-first with each directory's contents
//! immediately after the directory itself. The walker keeps a stack of
//! open directories, one per depth level: an entry at depth `d` belongs to
//! the node at `stack[d - 1]`, so anything deeper is finished and gets
//! folded into its parent before the entry is recorded.
use crate::error::{Error, Result};
use crate::model::{DirectoryNode, FileEntry};
use jwalk::{Parallelism, WalkDir};
use std::path::Path;

/// Inventory `path` and every directory beneath it.
pub fn load_directory(path: impl AsRef<Path>) -> Result<DirectoryNode> {
    let root_path = path.as_ref();
    if !root_path.is_dir() {
        return Err(Error::DirectoryNotFound {
            path: root_path.to_path_buf(),
        });
    }

    let walker = WalkDir::new(root_path)
        .skip_hidden(false)
        .follow_links(false)
        .sort(false)
        .parallelism(Parallelism::Serial);

    let mut stack = vec![DirectoryNode::new(root_display_name(root_path))];

    for entry_result in walker {
        let mut entry = entry_result.map_err(|source| Error::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root_path.to_path_buf()),
            source,
        })?;

        if let Some(source) = entry.read_children_error.take() {
            return Err(Error::Walk {
                path: entry.path(),
                source,
            });
        }

        // The root itself was pushed above.
        if entry.depth == 0 {
            continue;
        }

        close_deeper_than(&mut stack, entry.depth);

        let file_name = entry.file_name().to_string_lossy();
        if entry.file_type().is_dir() {
            stack.push(DirectoryNode::new(file_name.as_ref()));
        } else if let Some(parent) = stack.last_mut() {
            parent.files.push(FileEntry::from_file_name(&file_name));
        }
    }

    close_deeper_than(&mut stack, 1);
    stack.pop().ok_or_else(|| Error::DirectoryNotFound {
        path: root_path.to_path_buf(),
    })
}

/// Pop finished directories until `stack.len() == depth`, attaching each
/// to the directory below it. The root is never popped.
fn close_deeper_than(stack: &mut Vec<DirectoryNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        let Some(done) = stack.pop() else { break };
        if let Some(parent) = stack.last_mut() {
            parent.nested_directories.push(done);
        }
    }
}

/// Final path segment of the scan root.
///
/// Paths without one (`/`, `C:\`, `.`) fall back to the path text with
/// trailing separators removed.
fn root_display_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        name.to_string_lossy().to_string()
    } else {
        let s = path.to_string_lossy();
        let trimmed = s.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            s.to_string()
        } else {
            trimmed.to_string()
        }
    }
}
