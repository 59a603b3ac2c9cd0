//! dirinfo core: directory inventory, JSON persistence, and extension queries.
//!
//! This crate holds the tree model and the four processor operations with
//! no terminal I/O and no logging. Frontends (the interactive CLI) live in
//! separate crates.
//!
//! # Modules
//!
//! - [`model`]: owned directory tree (`DirectoryNode` / `FileEntry`).
//! - [`processor`]: load from disk, save/load JSON, collect extensions.
//! - [`error`]: the error taxonomy shared by every operation.
pub mod error;
pub mod model;
pub mod processor;

pub use error::{Error, Result};
pub use model::{DirectoryNode, FileEntry};
pub use processor::{
    deserialize_from_json, load_directory, serialize_to_json, unique_file_extensions,
};
