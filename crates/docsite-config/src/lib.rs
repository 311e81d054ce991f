//! Site descriptor for docsite documentation sites.
//!
//! Holds the metadata and navigation order handed to the external site
//! generator: title, description, source repository, edit-link toggle and
//! the ordered sidebar.
//!
//! A [`SiteDescriptor`] only exists in validated form. It is built from
//! [`SiteFields`] directly, or from one or more partial [`SiteLayer`]s read
//! from `docsite.toml` files and merged in priority order.
//!
//! # Example
//!
//! ```
//! use docsite_config::{SiteDescriptor, SiteFields};
//!
//! let site = SiteDescriptor::build(SiteFields {
//!     title: "sqlbunny".to_owned(),
//!     description: "Go codegen ORM".to_owned(),
//!     repository_slug: "kernelpayments/sqlbunny".to_owned(),
//!     edit_links_enabled: true,
//!     sidebar: vec!["/".to_owned(), "/getting-started".to_owned()],
//! })
//! .unwrap();
//!
//! let config = site.to_external_config();
//! assert_eq!(config.repo, "kernelpayments/sqlbunny");
//! assert_eq!(config.theme_config.sidebar, ["/", "/getting-started"]);
//! ```

mod descriptor;
mod error;
mod expand;
mod external;
mod layer;

use std::path::{Path, PathBuf};

pub use descriptor::{SiteDescriptor, SiteFields};
pub use error::{ConfigError, ValidationError};
pub use external::{ExternalConfig, ThemeConfig};
pub use layer::{SiteLayer, ThemeLayer};

/// Descriptor filename to search for.
pub const CONFIG_FILENAME: &str = "docsite.toml";

/// Load, merge and validate site descriptor files.
///
/// `paths` are in priority order, highest first. With no paths,
/// `docsite.toml` is searched for in the current directory and its parents.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if a file is missing or discovery finds
/// nothing, and `ConfigError::Validation` if the merged descriptor is
/// incomplete or invalid.
pub fn load(paths: &[PathBuf]) -> Result<SiteDescriptor, ConfigError> {
    if paths.is_empty() {
        let cwd = std::env::current_dir()?;
        let discovered =
            discover(&cwd).ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))?;
        tracing::debug!(path = %discovered.display(), "Discovered site descriptor");
        return load_layers(&[discovered]);
    }
    load_layers(paths)
}

/// Search for [`CONFIG_FILENAME`] in `start` and its parents.
#[must_use]
pub fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

fn load_layers(paths: &[PathBuf]) -> Result<SiteDescriptor, ConfigError> {
    let layers = paths
        .iter()
        .map(|path| SiteLayer::from_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let site = SiteLayer::merge_all(layers)?.build()?;
    tracing::info!(
        title = site.title(),
        routes = site.sidebar().len(),
        layers = paths.len(),
        "Site descriptor ready"
    );
    Ok(site)
}
