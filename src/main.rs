use anyhow::Context;
use clap::{Parser, Subcommand};
use local_compose::cli::{self, ProjectArgs};
use local_compose::logging;

#[derive(Parser)]
#[command(name = "lc")]
#[command(about = "Bring docker-compose test environments up and down", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    project: ProjectArgs,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start all services in the background (up -d)
    Up,
    /// Stop and remove the project's containers
    Down,
    /// Run an arbitrary compose subcommand
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },
    /// Print the environment of a running service container
    Env {
        service: String,
        #[arg(long, default_value_t = 1)]
        replica: u32,
    },
    /// Print the command line that would be run
    Print {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    match cli.command {
        Commands::Up => cli::up::run(&cli.project, &cwd)?,
        Commands::Down => cli::down::run(&cli.project, &cwd)?,
        Commands::Run { command } => cli::run::run(&cli.project, &cwd, command)?,
        Commands::Env { service, replica } => {
            cli::env_cmd::run(&cli.project, &cwd, &service, replica)?
        }
        Commands::Print { command } => cli::print::run(&cli.project, &cwd, command)?,
    }

    Ok(())
}
