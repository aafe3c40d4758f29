//! Launch capability - the seam between command construction and the OS.
//!
//! Tests substitute their own `Launcher` to capture argument vectors
//! without spawning anything.

use crate::error::{OpenerError, OpenerResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A fully constructed external invocation: program plus discrete
/// argument tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchRequest {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

/// Outcome of a successful launch. Success means process creation
/// succeeded, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchOutcome {
    pub pid: Option<u32>,
}

/// Something that can turn a `LaunchRequest` into a running process.
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self, request: LaunchRequest) -> OpenerResult<LaunchOutcome>;
}

/// Production launcher: spawns the request detached via the OS.
///
/// The child's stdio is dropped and its handle is never awaited, so the
/// launched application outlives the call.
pub struct SystemLauncher;

#[async_trait]
impl Launcher for SystemLauncher {
    async fn launch(&self, request: LaunchRequest) -> OpenerResult<LaunchOutcome> {
        debug!("Spawning {} with args {:?}", request.program, request.args);

        let child = Command::new(&request.program)
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OpenerError::Launch(request.program.clone(), e))?;

        Ok(LaunchOutcome { pid: child.id() })
    }
}
