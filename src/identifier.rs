// Project identifier helpers
// Compose project names must be lowercase alphanumeric with hyphens only

use uuid::Uuid;

/// Generate a fresh, lower-cased project identifier
pub fn generate() -> String {
    Uuid::new_v4().to_string().to_lowercase()
}

/// Sanitize an arbitrary name into a valid compose project name
pub fn sanitize(name: &str) -> String {
    // Sanitize name for Docker Compose project name requirements:
    // - Lowercase only
    // - Alphanumeric and hyphens
    // - Cannot start/end with hyphen
    let sanitized = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>();

    // Remove leading/trailing hyphens and collapse multiple hyphens
    sanitized
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Name of the container compose creates for `service` within `project`
pub fn container_name(project: &str, service: &str, replica: u32, separator: char) -> String {
    format!("{project}{separator}{service}{separator}{replica}")
}
