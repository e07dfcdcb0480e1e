// Compose invocation builder
// Assembles compose files, project name, sub-command and env overrides into
// one external process call

use super::binary::ComposeBinary;
use super::exec::{self, ExecOutput};
use super::guard::TeardownGuard;
use crate::errors::{ComposeError, Result};
use crate::identifier;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Sub-command used to stop and remove everything in the project
pub const DOWN_COMMAND: [&str; 2] = ["down", "--remove-orphans"];

/// A compose project driven through the local compose binary
#[derive(Debug, Clone)]
pub struct LocalDockerCompose {
    binary: ComposeBinary,
    compose_files: Vec<PathBuf>,
    identifier: String,
    command: Vec<String>,
    env: BTreeMap<String, String>,
}

impl LocalDockerCompose {
    /// Create a compose project from one or more compose files.
    ///
    /// Later files override earlier ones. The identifier is passed to the
    /// binary as-is; callers should lower-case it (see [`identifier::sanitize`]).
    pub fn new<I, P>(compose_files: I, identifier: impl Into<String>) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let compose_files: Vec<PathBuf> = compose_files.into_iter().map(Into::into).collect();
        if compose_files.is_empty() {
            return Err(ComposeError::NoComposeFiles);
        }

        let identifier = identifier.into();
        if identifier.is_empty() {
            return Err(ComposeError::EmptyIdentifier);
        }

        Ok(Self {
            binary: ComposeBinary::default(),
            compose_files,
            identifier,
            command: Vec::new(),
            env: BTreeMap::new(),
        })
    }

    pub fn with_binary(mut self, binary: ComposeBinary) -> Self {
        self.binary = binary;
        self
    }

    /// Replace the sub-command, e.g. `["up", "-d"]`
    pub fn with_command<I, S>(mut self, command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command = command.into_iter().map(Into::into).collect();
        self
    }

    /// Merge environment overrides; later values win on key collision
    pub fn with_env<I, K, V>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(env.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn binary(&self) -> &ComposeBinary {
        &self.binary
    }

    pub fn compose_files(&self) -> &[PathBuf] {
        &self.compose_files
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Full argument vector for the configured sub-command
    pub fn args(&self) -> Vec<String> {
        self.args_for(&self.command)
    }

    fn args_for(&self, command: &[String]) -> Vec<String> {
        let mut args = self.binary.leading_args();

        for file in &self.compose_files {
            args.push("-f".to_string());
            args.push(file.to_string_lossy().to_string());
        }

        args.push("-p".to_string());
        args.push(self.identifier.clone());
        args.extend(command.iter().cloned());

        args
    }

    /// Rendered command line, for display
    pub fn command_line(&self) -> String {
        exec::render_command_line(self.binary.program(), &self.args())
    }

    /// Run the configured sub-command and wait for it to finish
    pub fn invoke(&self) -> Result<ExecOutput> {
        info!(project = %self.identifier, command = ?self.command, "invoking compose");
        self.run(&self.command)
    }

    /// Stop and remove all containers, networks and orphans of this project
    pub fn down(&self) -> Result<ExecOutput> {
        info!(project = %self.identifier, "tearing down compose project");
        let command: Vec<String> = DOWN_COMMAND.iter().map(|s| s.to_string()).collect();
        self.run(&command)
    }

    fn run(&self, command: &[String]) -> Result<ExecOutput> {
        exec::run_combined(self.binary.program(), &self.args_for(command), &self.env)
    }

    /// Guard that runs [`down`](Self::down) when dropped
    pub fn teardown_guard(&self) -> TeardownGuard<'_> {
        TeardownGuard::new(self)
    }

    /// Container name of the given service replica in this project
    pub fn container_name(&self, service: &str, replica: u32) -> String {
        identifier::container_name(
            &self.identifier,
            service,
            replica,
            self.binary.container_separator(),
        )
    }
}
