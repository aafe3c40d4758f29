//! Path validation - the existence gate run before any dispatch.

use crate::error::{OpenerError, OpenerResult};
use std::path::Path;

/// Confirm that `path` refers to an existing file or directory.
///
/// Relative paths resolve against the process working directory. The
/// empty path is treated as not found. Readability is not checked here;
/// the OS launch step reports permission problems.
pub fn ensure_exists(path: &Path) -> OpenerResult<()> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(OpenerError::NotFound(path.display().to_string()));
    }
    Ok(())
}
