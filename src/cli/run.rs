use super::{build_compose, ProjectArgs};
use crate::errors::Result;
use std::path::Path;

/// Run an arbitrary compose subcommand against the project
pub fn run(args: &ProjectArgs, dir: &Path, command: Vec<String>) -> Result<()> {
    let compose = build_compose(args, dir)?.with_command(command);
    let output = compose.invoke()?;
    print!("{}", output.output_lossy());
    Ok(())
}
