//! JSON persistence for directory trees.
//!
//! The document shape is `{ "name", "files": [{ "name", "extension" }],
//! "nestedDirectories": [...] }`, pretty-printed on write.
use crate::error::{Error, Result};
use crate::model::DirectoryNode;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte-order mark some Windows editors put in front of UTF-8 text.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `node` to `output_path` as indented JSON, replacing any existing file.
///
/// Fails with [`Error::DirectoryNotFound`] when the destination's parent
/// directory is missing. A destination that is itself a directory surfaces
/// as [`Error::Io`].
pub fn serialize_to_json(node: &DirectoryNode, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(Error::DirectoryNotFound {
                path: parent.to_path_buf(),
            });
        }
    }

    let io_err = |source| Error::Io {
        path: output_path.to_path_buf(),
        source,
    };

    let file = File::create(output_path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, node).map_err(|e| io_err(e.into()))?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Read a tree previously written by [`serialize_to_json`].
///
/// Missing `files` / `nestedDirectories` read as empty and a missing `name`
/// as `None`. A document that is malformed, of the wrong shape, or just
/// `null` fails with [`Error::DeserializationFailed`].
pub fn deserialize_from_json(json_path: impl AsRef<Path>) -> Result<DirectoryNode> {
    let json_path = json_path.as_ref();
    if !json_path.is_file() {
        return Err(Error::FileNotFound {
            path: json_path.to_path_buf(),
        });
    }

    let contents = fs::read(json_path).map_err(|source| Error::Io {
        path: json_path.to_path_buf(),
        source,
    })?;
    let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(&contents[..]);

    let parsed: Option<DirectoryNode> =
        serde_json::from_slice(contents).map_err(|source| Error::DeserializationFailed {
            path: json_path.to_path_buf(),
            source: Some(source),
        })?;

    parsed.ok_or_else(|| Error::DeserializationFailed {
        path: json_path.to_path_buf(),
        source: None,
    })
}
