//! A single file recorded in a directory node.
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One regular file, split into base name and extension.
///
/// `extension` keeps its leading `.` (`".txt"`) and is empty for files
/// without one. `name` may be empty too, e.g. for `.gitignore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    #[serde(default, alias = "Name", deserialize_with = "super::null_as_default")]
    pub name: CompactString,
    #[serde(default, alias = "Extension", deserialize_with = "super::null_as_default")]
    pub extension: CompactString,
}

impl FileEntry {
    pub fn new(name: impl Into<CompactString>, extension: impl Into<CompactString>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// Split a file name at its last `.`.
    ///
    /// A trailing dot carries no extension and is dropped from the name
    /// (`"notes."` becomes `"notes"` + `""`).
    pub fn from_file_name(file_name: &str) -> Self {
        match file_name.rfind('.') {
            Some(dot) if dot + 1 == file_name.len() => Self::new(&file_name[..dot], ""),
            Some(dot) => Self::new(&file_name[..dot], &file_name[dot..]),
            None => Self::new(file_name, ""),
        }
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.extension)
    }
}
