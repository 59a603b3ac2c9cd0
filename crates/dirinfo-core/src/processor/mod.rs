//! Directory processor: the four operations frontends call.
//!
//! - [`load_directory`] builds a tree from a real directory.
//! - [`serialize_to_json`] / [`deserialize_from_json`] persist and restore it.
//! - [`unique_file_extensions`] answers which extensions occur anywhere in it.
//!
//! Every operation is a single blocking call. Failures are returned to the
//! caller untouched, and no partial tree is ever handed back.
pub mod extensions;
pub mod json;
pub mod walk;

pub use extensions::unique_file_extensions;
pub use json::{deserialize_from_json, serialize_to_json};
pub use walk::load_directory;
