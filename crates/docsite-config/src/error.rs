//! Error types for descriptor validation and loading.

use std::path::PathBuf;

/// A constraint on the site descriptor that does not hold.
///
/// Every variant names the offending field so the consuming generator can
/// abort startup with a message that points at the source definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Required field is absent or blank.
    #[error("{field} is required and cannot be empty")]
    MissingField {
        /// Field name as written in the external config (e.g. `title`).
        field: &'static str,
    },

    /// Sidebar route is empty or does not start with `/`.
    #[error("themeConfig.sidebar[{index}]: invalid route {route:?} (routes must start with '/')")]
    InvalidRoute {
        /// The rejected route.
        route: String,
        /// Position of the route in the sidebar.
        index: usize,
    },

    /// Sidebar route appears more than once.
    #[error(
        "themeConfig.sidebar[{duplicate}]: duplicate route {route:?} (first listed at index {first})"
    )]
    DuplicateRoute {
        /// The repeated route.
        route: String,
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        duplicate: usize,
    },

    /// Repository slug is not of the form `owner/name`.
    #[error("repo: malformed repository slug {slug:?} (expected owner/name)")]
    MalformedRepositorySlug {
        /// The rejected slug.
        slug: String,
    },
}

/// Error loading a descriptor from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Descriptor file not found.
    #[error("Site descriptor not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Descriptor failed validation.
    #[error("Invalid site descriptor: {0}")]
    Validation(#[from] ValidationError),
    /// A `${VAR}` reference without default names an unset variable.
    #[error("{field}: environment variable ${{{var}}} is not set")]
    EnvVar {
        /// Descriptor field holding the reference (e.g. `repo`).
        field: &'static str,
        /// Name of the unset variable.
        var: String,
    },
}
