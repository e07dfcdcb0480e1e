use super::{build_compose, ProjectArgs};
use crate::errors::Result;
use colored::Colorize;
use std::path::Path;

/// Stop and remove all containers of the project
pub fn run(args: &ProjectArgs, dir: &Path) -> Result<()> {
    let compose = build_compose(args, dir)?;

    println!("Tearing down project '{}'...", compose.identifier());
    let output = compose.down()?;
    print!("{}", output.output_lossy());
    println!("{} Project '{}' removed", "✓".green(), compose.identifier());

    Ok(())
}
