// Which compose executable to run, and how it names containers

use crate::errors::{ComposeError, Result};
use std::fmt;
use std::process::Command;
use std::str::FromStr;

/// Docker Compose command variant
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ComposeBinary {
    /// Legacy docker-compose (with hyphen)
    #[default]
    Hyphenated,
    /// Modern docker compose (no hyphen, subcommand of docker)
    Subcommand,
    /// Any other program, with arguments placed before the compose flags
    Custom { program: String, args: Vec<String> },
}

impl ComposeBinary {
    /// Detect which docker-compose variant is available
    pub fn detect() -> Self {
        // Try modern "docker compose" first
        let modern = Command::new("docker")
            .arg("compose")
            .arg("version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);

        if modern {
            tracing::debug!("using docker compose plugin");
            return ComposeBinary::Subcommand;
        }

        // Fall back to legacy "docker-compose"
        tracing::debug!("docker compose plugin unavailable, falling back to docker-compose");
        ComposeBinary::Hyphenated
    }

    pub fn program(&self) -> &str {
        match self {
            ComposeBinary::Hyphenated => "docker-compose",
            ComposeBinary::Subcommand => "docker",
            ComposeBinary::Custom { program, .. } => program,
        }
    }

    pub fn leading_args(&self) -> Vec<String> {
        match self {
            ComposeBinary::Hyphenated => Vec::new(),
            ComposeBinary::Subcommand => vec!["compose".to_string()],
            ComposeBinary::Custom { args, .. } => args.clone(),
        }
    }

    /// Separator between project, service and replica in container names.
    /// Compose v1 uses underscores, v2 uses hyphens.
    pub fn container_separator(&self) -> char {
        match self {
            ComposeBinary::Hyphenated => '_',
            _ => '-',
        }
    }
}

impl FromStr for ComposeBinary {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            ComposeError::ConfigError("Compose executable must not be empty".to_string())
        })?;
        let args: Vec<String> = parts.collect();

        if program == "docker-compose" && args.is_empty() {
            return Ok(ComposeBinary::Hyphenated);
        }
        if program == "docker" && args.len() == 1 && args[0] == "compose" {
            return Ok(ComposeBinary::Subcommand);
        }

        Ok(ComposeBinary::Custom { program, args })
    }
}

impl fmt::Display for ComposeBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())?;
        for arg in self.leading_args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_variants() {
        assert_eq!(
            "docker-compose".parse::<ComposeBinary>().unwrap(),
            ComposeBinary::Hyphenated
        );
        assert_eq!(
            "docker  compose".parse::<ComposeBinary>().unwrap(),
            ComposeBinary::Subcommand
        );
    }

    #[test]
    fn test_parse_custom() {
        let binary: ComposeBinary = "podman-compose --podman-path /usr/bin/podman"
            .parse()
            .unwrap();
        assert_eq!(binary.program(), "podman-compose");
        assert_eq!(binary.leading_args(), vec!["--podman-path", "/usr/bin/podman"]);
        assert_eq!(binary.container_separator(), '-');
    }

    #[test]
    fn test_parse_empty_is_config_error() {
        let err = "   ".parse::<ComposeBinary>().unwrap_err();
        assert!(matches!(err, ComposeError::ConfigError(_)));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for binary in [ComposeBinary::Hyphenated, ComposeBinary::Subcommand] {
            assert_eq!(binary.to_string().parse::<ComposeBinary>().unwrap(), binary);
        }
    }

    #[test]
    fn test_separators() {
        assert_eq!(ComposeBinary::Hyphenated.container_separator(), '_');
        assert_eq!(ComposeBinary::Subcommand.container_separator(), '-');
    }

    #[test]
    fn test_detect_does_not_crash() {
        // Result depends on whether docker is installed
        let _binary = ComposeBinary::detect();
    }
}
