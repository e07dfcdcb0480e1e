//! Synchronous process execution with combined output capture.
//!
//! stdout and stderr of the child are pointed at the same anonymous temporary
//! file, so the captured bytes keep the order in which the process wrote them.

use crate::errors::{ComposeError, Result};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{Read, Seek, SeekFrom};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Output of a process that exited successfully
#[derive(Debug, Clone)]
pub struct ExecOutput {
    /// Rendered command line, for diagnostics
    pub command: String,
    /// Interleaved stdout and stderr
    pub output: Vec<u8>,
}

impl ExecOutput {
    pub fn output_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.output)
    }
}

/// Render a program and its arguments as a single display string.
/// Arguments containing whitespace or quotes are single-quoted.
pub fn render_command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(arg: &str) -> Cow<'_, str> {
    if !arg.is_empty() && !arg.chars().any(|c| c.is_whitespace() || c == '\'' || c == '"') {
        return Cow::Borrowed(arg);
    }
    Cow::Owned(format!("'{}'", arg.replace('\'', r"'\''")))
}

/// Run `program` with `args` to completion.
///
/// The child inherits this process's environment with `env` layered on top.
/// Spawn failures map to [`ComposeError::Spawn`], unsuccessful exits to
/// [`ComposeError::Exit`] carrying the captured output.
pub fn run_combined(
    program: &str,
    args: &[String],
    env: &BTreeMap<String, String>,
) -> Result<ExecOutput> {
    let command = render_command_line(program, args);

    let sink = tempfile::tempfile()?;
    let stderr_sink = sink.try_clone()?;
    let mut reader = sink.try_clone()?;

    debug!(command = %command, overrides = env.len(), "running");

    let status = Command::new(program)
        .args(args)
        .envs(env)
        .stdin(Stdio::null())
        .stdout(Stdio::from(sink))
        .stderr(Stdio::from(stderr_sink))
        .status()
        .map_err(|source| {
            warn!(command = %command, error = %source, "failed to spawn");
            ComposeError::Spawn {
                command: command.clone(),
                source,
            }
        })?;

    let mut output = Vec::new();
    reader.seek(SeekFrom::Start(0))?;
    reader.read_to_end(&mut output)?;

    if !status.success() {
        warn!(command = %command, code = ?status.code(), "command failed");
        return Err(ComposeError::Exit {
            command,
            code: status.code(),
            output: String::from_utf8_lossy(&output).into_owned(),
        });
    }

    debug!(command = %command, bytes = output.len(), "finished");
    Ok(ExecOutput { command, output })
}
