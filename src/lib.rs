//! Cross-platform helpers for opening and revealing filesystem paths.
//!
//! Three operations, uniform across Windows, macOS and Linux:
//! - open a path with the OS default handler
//! - open a path with a named application
//! - reveal (select) a path in the platform file manager
//!
//! Every call validates that the path exists, builds one external
//! invocation from a per-platform table, and hands it to a launcher
//! that spawns the process detached.

pub mod error;
pub mod launcher;
pub mod opener;
pub mod platform;
pub mod validate;

pub use error::{OpenerError, OpenerResult};
pub use launcher::{LaunchOutcome, LaunchRequest, Launcher, SystemLauncher};
pub use opener::{open, open_with, reveal, Opener};
pub use platform::{Operation, PlatformTarget};
