use super::{build_compose, ProjectArgs};
use crate::errors::Result;
use colored::Colorize;
use std::path::Path;

/// Start all services of the project in the background
pub fn run(args: &ProjectArgs, dir: &Path) -> Result<()> {
    let compose = build_compose(args, dir)?.with_command(["up", "-d"]);

    println!("Starting project '{}'...", compose.identifier());
    let output = compose.invoke()?;
    print!("{}", output.output_lossy());
    println!("{} Project '{}' is up", "✓".green(), compose.identifier());

    Ok(())
}
