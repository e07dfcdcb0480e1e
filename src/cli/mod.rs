// Subcommands of the lc binary

pub mod down;
pub mod env_cmd;
pub mod print;
pub mod run;
pub mod up;

use crate::compose::{ComposeBinary, LocalDockerCompose};
use crate::config::Config;
use crate::errors::Result;
use crate::identifier;
use clap::Args;
use std::path::{Path, PathBuf};

/// Options shared by every subcommand that talks to a compose project
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Compose file; repeat to layer overrides (later files win)
    #[arg(short = 'f', long = "file", global = true)]
    pub files: Vec<PathBuf>,

    /// Project identifier; generated when neither flag nor config sets one
    #[arg(short = 'p', long = "project", global = true)]
    pub project: Option<String>,

    /// Environment override passed to the compose binary
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_key_val, global = true)]
    pub env: Vec<(String, String)>,

    /// Compose executable, e.g. "docker-compose" or "docker compose"
    #[arg(long, global = true)]
    pub executable: Option<String>,
}

/// Parse a `KEY=VALUE` pair; the value may itself contain `=`
pub fn parse_key_val(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

/// Build the compose project from flags, falling back to .local-compose.yml in `dir`
pub fn build_compose(args: &ProjectArgs, dir: &Path) -> Result<LocalDockerCompose> {
    let config = Config::load(dir)?;

    let files: Vec<PathBuf> = if args.files.is_empty() {
        config.compose_files.iter().map(|f| dir.join(f)).collect()
    } else {
        args.files.clone()
    };

    let project = match args.project.clone().or_else(|| config.project.clone()) {
        Some(project) => project,
        None => {
            let generated = identifier::generate();
            tracing::info!(project = %generated, "no project given, generated one");
            generated
        }
    };

    let binary = match &args.executable {
        Some(executable) => executable.parse::<ComposeBinary>()?,
        None => config.binary()?,
    };

    Ok(LocalDockerCompose::new(files, project)?
        .with_binary(binary)
        .with_env(config.env)
        .with_env(args.env.iter().cloned()))
}
