//! The three public operations and the pipeline behind them:
//! validate -> build launch request -> launch.

use crate::error::{OpenerError, OpenerResult};
use crate::launcher::{Launcher, SystemLauncher};
use crate::platform::{launch_request, Operation, PlatformTarget};
use crate::validate;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Opens and reveals filesystem paths through an injected [`Launcher`].
///
/// Each call is one-shot and stateless; concurrent calls are
/// independent.
pub struct Opener {
    platform: PlatformTarget,
    launcher: Arc<dyn Launcher>,
}

impl Opener {
    /// Opener for the running platform, spawning real OS processes.
    pub fn new() -> Self {
        Self::for_platform(PlatformTarget::current(), Arc::new(SystemLauncher))
    }

    /// Opener for the running platform with an injected launcher.
    pub fn with_launcher(launcher: Arc<dyn Launcher>) -> Self {
        Self::for_platform(PlatformTarget::current(), launcher)
    }

    /// Fully injected opener. Lets embedders and tests exercise a
    /// foreign platform's command table.
    pub fn for_platform(platform: PlatformTarget, launcher: Arc<dyn Launcher>) -> Self {
        Self { platform, launcher }
    }

    /// Open `path` with the OS default handler.
    pub async fn open(&self, path: &str) -> OpenerResult<()> {
        self.dispatch(Operation::OpenDefault, path).await
    }

    /// Open `path` with the named application.
    pub async fn open_with(&self, path: &str, app: &str) -> OpenerResult<()> {
        self.dispatch(Operation::OpenWith(app.to_string()), path).await
    }

    /// Reveal `path` in the platform file manager.
    pub async fn reveal(&self, path: &str) -> OpenerResult<()> {
        self.dispatch(Operation::Reveal, path).await
    }

    async fn dispatch(&self, operation: Operation, path: &str) -> OpenerResult<()> {
        let path = Path::new(path);

        // Validation always runs first; no process is spawned for a
        // path that does not exist.
        validate::ensure_exists(path)?;

        if let Operation::OpenWith(app) = &operation {
            if app.trim().is_empty() {
                return Err(OpenerError::InvalidArgument(
                    "app cannot be empty".to_string(),
                ));
            }
        }

        let request = launch_request(self.platform, &operation, path)?;
        debug!(
            "Dispatching {:?} as {} {:?}",
            operation, request.program, request.args
        );

        match self.launcher.launch(request).await {
            Ok(_) => Ok(()),
            Err(e) => {
                warn!("Launch failed: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for Opener {
    fn default() -> Self {
        Self::new()
    }
}

/// Open `path` with the OS default handler.
pub async fn open(path: &str) -> OpenerResult<()> {
    Opener::new().open(path).await
}

/// Open `path` with the named application.
pub async fn open_with(path: &str, app: &str) -> OpenerResult<()> {
    Opener::new().open_with(path, app).await
}

/// Reveal `path` in the platform file manager.
pub async fn reveal(path: &str) -> OpenerResult<()> {
    Opener::new().reveal(path).await
}
