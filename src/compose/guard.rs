// Scoped teardown of a compose project

use super::exec::ExecOutput;
use super::local::LocalDockerCompose;
use crate::errors::Result;
use tracing::warn;

/// Runs `down` for its project when dropped, unless [`finish`](Self::finish)
/// already did.
///
/// Create the guard before `up` so the project is removed even when bringing
/// it up fails or the caller panics.
#[must_use = "the project is torn down as soon as the guard is dropped"]
pub struct TeardownGuard<'a> {
    compose: &'a LocalDockerCompose,
    armed: bool,
}

impl<'a> TeardownGuard<'a> {
    pub(crate) fn new(compose: &'a LocalDockerCompose) -> Self {
        Self {
            compose,
            armed: true,
        }
    }

    /// Tear down now and report the outcome instead of logging it
    pub fn finish(mut self) -> Result<ExecOutput> {
        self.armed = false;
        self.compose.down()
    }
}

impl Drop for TeardownGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(e) = self.compose.down() {
            warn!(project = %self.compose.identifier(), error = %e, "teardown failed");
        }
    }
}
