//! Platform selection and the per-platform command table.
//!
//! Dispatch is a single exhaustive match over a closed platform enum,
//! so adding a platform is a localized change. Every row produces a
//! discrete argument vector; paths are never interpolated into a shell
//! string.

use crate::error::{OpenerError, OpenerResult};
use crate::launcher::LaunchRequest;
use std::path::Path;

/// The operating system an invocation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformTarget {
    Windows,
    MacOS,
    Linux,
    Unsupported,
}

impl PlatformTarget {
    /// Resolve the platform of the running environment.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            PlatformTarget::Windows
        } else if cfg!(target_os = "macos") {
            PlatformTarget::MacOS
        } else if cfg!(target_os = "linux") {
            PlatformTarget::Linux
        } else {
            PlatformTarget::Unsupported
        }
    }
}

/// What to do with a validated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Open with the OS default handler.
    OpenDefault,
    /// Open with a named application.
    OpenWith(String),
    /// Select the entry in the platform file manager.
    Reveal,
}

/// Build the external invocation for `operation` on `path`.
///
/// `path` must already have passed validation. Linux has no universal
/// "select in file manager" primitive, so `Reveal` opens the containing
/// directory there.
pub fn launch_request(
    platform: PlatformTarget,
    operation: &Operation,
    path: &Path,
) -> OpenerResult<LaunchRequest> {
    let path_arg = path.display().to_string();

    let request = match (platform, operation) {
        (PlatformTarget::Windows, Operation::OpenDefault) => {
            // `start` is a cmd builtin; the empty token is its window title.
            LaunchRequest::new("cmd", vec!["/C".into(), "start".into(), String::new(), path_arg])
        }
        (PlatformTarget::Windows, Operation::OpenWith(app)) => LaunchRequest::new(
            "cmd",
            vec![
                "/C".into(),
                "start".into(),
                String::new(),
                app.clone(),
                path_arg,
            ],
        ),
        (PlatformTarget::Windows, Operation::Reveal) => {
            LaunchRequest::new("explorer", vec!["/select,".into(), path_arg])
        }
        (PlatformTarget::MacOS, Operation::OpenDefault) => {
            LaunchRequest::new("open", vec![path_arg])
        }
        (PlatformTarget::MacOS, Operation::OpenWith(app)) => {
            LaunchRequest::new("open", vec!["-a".into(), app.clone(), path_arg])
        }
        (PlatformTarget::MacOS, Operation::Reveal) => {
            LaunchRequest::new("open", vec!["-R".into(), path_arg])
        }
        (PlatformTarget::Linux, Operation::OpenDefault) => {
            LaunchRequest::new("xdg-open", vec![path_arg])
        }
        (PlatformTarget::Linux, Operation::OpenWith(app)) => {
            LaunchRequest::new(app.as_str(), vec![path_arg])
        }
        (PlatformTarget::Linux, Operation::Reveal) => {
            LaunchRequest::new("xdg-open", vec![reveal_target(path).display().to_string()])
        }
        (PlatformTarget::Unsupported, _) => {
            return Err(OpenerError::UnsupportedPlatform(
                std::env::consts::OS.to_string(),
            ));
        }
    };

    Ok(request)
}

/// Containing directory of `path`, or `path` itself when there is no
/// usable parent (filesystem root, bare relative names).
fn reveal_target(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => path,
    }
}
