use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("At least one compose file is required")]
    NoComposeFiles,

    #[error("Project identifier must not be empty")]
    EmptyIdentifier,

    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' {}\n{output}", describe_exit(.code))]
    Exit {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl ComposeError {
    /// The command line that was attempted, if this error came from a process
    pub fn command(&self) -> Option<&str> {
        match self {
            ComposeError::Spawn { command, .. } | ComposeError::Exit { command, .. } => {
                Some(command)
            }
            _ => None,
        }
    }

    /// Combined stdout/stderr of a process that exited unsuccessfully
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            ComposeError::Exit { output, .. } => Some(output),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposeError>;
