use super::{build_compose, ProjectArgs};
use crate::errors::Result;
use std::path::Path;

/// Print the command line that would be run, without running it
pub fn run(args: &ProjectArgs, dir: &Path, command: Vec<String>) -> Result<()> {
    let compose = build_compose(args, dir)?.with_command(command);
    println!("{}", compose.command_line());
    for (key, value) in compose.env() {
        println!("  {}={}", key, value);
    }
    Ok(())
}
