// Library interface for local-compose
// Drives docker-compose projects for tests and exposes the pieces used by the lc binary

pub mod cli;
pub mod compose;
pub mod config;
pub mod errors;
pub mod identifier;
pub mod inspect;
pub mod logging;

pub use compose::{ComposeBinary, ExecOutput, LocalDockerCompose, TeardownGuard};
pub use errors::{ComposeError, Result};
