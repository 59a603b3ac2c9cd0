//! dirinfo CLI: the interactive prompt loop around `dirinfo-core`.
//!
//! All terminal I/O lives here. The loop is generic over its input and
//! output streams so whole sessions can be scripted in tests.
pub mod app;
pub mod input;

pub use app::{App, SaveOptions};
pub use input::InputKind;
