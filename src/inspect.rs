//! Container introspection.
//!
//! Reads the environment of a running container with `docker exec <name> env`
//! so tests can assert on what compose actually passed through.

use crate::compose::exec;
use crate::errors::Result;
use std::collections::BTreeMap;

/// Environment of a running container
#[derive(Debug, Clone, Default)]
pub struct ContainerEnv {
    raw: String,
    vars: BTreeMap<String, String>,
}

impl ContainerEnv {
    /// Parse `env` output: one `KEY=VALUE` per line, split on the first `=`
    pub fn parse(raw: &str) -> Self {
        let vars = raw
            .lines()
            .filter_map(|line| line.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self {
            raw: raw.to_string(),
            vars,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// True if the container has exactly `key=value`
    pub fn contains_pair(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Fetch the environment of a running container
pub fn container_env(container: &str) -> Result<ContainerEnv> {
    let args = vec!["exec".to_string(), container.to_string(), "env".to_string()];
    let output = exec::run_combined("docker", &args, &BTreeMap::new())?;
    Ok(ContainerEnv::parse(&output.output_lossy()))
}
