//! Classification of user-supplied paths.
use std::path::Path;

/// What a path given at the prompt refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// An existing directory, to be walked.
    Directory,
    /// An existing file ending in `.json`, to be read back.
    JsonFile,
    /// Anything else.
    Unsupported,
}

impl InputKind {
    pub fn classify(path: &Path) -> Self {
        if path.is_dir() {
            Self::Directory
        } else if path.is_file() && has_json_extension(path) {
            Self::JsonFile
        } else {
            Self::Unsupported
        }
    }
}

/// `true` if the path ends in `.json`, ignoring case.
pub fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Case-insensitive yes check for y/n prompts.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
