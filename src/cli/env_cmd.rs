use super::{build_compose, ProjectArgs};
use crate::errors::Result;
use crate::inspect;
use std::path::Path;

/// Print the environment of a running service container
pub fn run(args: &ProjectArgs, dir: &Path, service: &str, replica: u32) -> Result<()> {
    let compose = build_compose(args, dir)?;
    let container = compose.container_name(service, replica);

    let env = inspect::container_env(&container)?;
    for (key, value) in env.vars() {
        println!("{}={}", key, value);
    }

    Ok(())
}
