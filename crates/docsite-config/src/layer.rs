//! Partial descriptors read from `docsite.toml` files.
//!
//! A doc section may register only its own pages, so every field of a
//! [`SiteLayer`] is optional. Layers are merged in priority order and the
//! result is built into a [`SiteDescriptor`], which is where validation
//! happens.
//!
//! ## File format
//!
//! ```toml
//! title = "sqlbunny"
//! description = "Go codegen ORM"
//! repo = "kernelpayments/sqlbunny"
//! edit_links = true
//!
//! [theme]
//! sidebar = ["/", "/getting-started", "/models"]
//! ```
//!
//! `title`, `description` and `repo` support `${VAR}` and
//! `${VAR:-default}` expansion. Sidebar routes are taken literally.

use std::path::Path;

use serde::Deserialize;

use crate::descriptor::{SiteDescriptor, SiteFields, dedup_routes, validate_routes};
use crate::error::{ConfigError, ValidationError};
use crate::expand::expand_env;

/// Partial site descriptor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteLayer {
    /// Site title.
    pub title: Option<String>,
    /// Site subtitle.
    pub description: Option<String>,
    /// Source repository as `owner/name`.
    pub repo: Option<String>,
    /// Whether per-page edit links are rendered.
    pub edit_links: Option<bool>,
    /// Theme section.
    #[serde(default)]
    pub theme: ThemeLayer,
}

/// `[theme]` section of a layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeLayer {
    /// Sidebar routes contributed by this layer.
    pub sidebar: Option<Vec<String>>,
}

impl SiteLayer {
    /// Parse a layer from TOML and expand environment references.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown keys,
    /// `ConfigError::EnvVar` when a referenced variable is unset, and
    /// `ConfigError::Validation` when the layer's own sidebar has an invalid
    /// or repeated route.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut layer: Self = toml::from_str(content)?;
        layer.expand_env_vars()?;
        if let Some(sidebar) = &layer.theme.sidebar {
            validate_routes(sidebar)?;
        }
        Ok(layer)
    }

    /// Read and parse a layer file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, plus the
    /// errors of [`SiteLayer::from_toml_str`].
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let layer = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            routes = layer.theme.sidebar.as_ref().map_or(0, Vec::len),
            "Loaded site layer"
        );
        Ok(layer)
    }

    /// Merge with a lower-priority layer.
    ///
    /// Fields set on `self` win. Each sidebar is checked on its own first, so
    /// a route repeated within one layer is an error. Routes shared between
    /// the two layers are kept once, at their position in `self`, and the
    /// routes only `lower` lists follow.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRoute` or
    /// `ValidationError::DuplicateRoute` for either layer's sidebar.
    pub fn merge(self, lower: SiteLayer) -> Result<SiteLayer, ValidationError> {
        let sidebar = match (self.theme.sidebar, lower.theme.sidebar) {
            (Some(high), Some(low)) => {
                validate_routes(&high)?;
                validate_routes(&low)?;
                Some(dedup_routes(high.into_iter().chain(low)))
            }
            (high, low) => high.or(low),
        };

        Ok(SiteLayer {
            title: self.title.or(lower.title),
            description: self.description.or(lower.description),
            repo: self.repo.or(lower.repo),
            edit_links: self.edit_links.or(lower.edit_links),
            theme: ThemeLayer { sidebar },
        })
    }

    /// Fold layers given highest priority first.
    ///
    /// # Errors
    ///
    /// Returns the first sidebar error found by [`SiteLayer::merge`].
    pub fn merge_all<I>(layers: I) -> Result<SiteLayer, ValidationError>
    where
        I: IntoIterator<Item = SiteLayer>,
    {
        let mut layers = layers.into_iter();
        let Some(highest) = layers.next() else {
            return Ok(SiteLayer::default());
        };
        layers.try_fold(highest, SiteLayer::merge)
    }

    /// Require every mandatory field.
    ///
    /// An unset `edit_links` means edit links are off.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` for the first absent field.
    pub fn into_fields(self) -> Result<SiteFields, ValidationError> {
        let missing = |field| ValidationError::MissingField { field };
        Ok(SiteFields {
            title: self.title.ok_or_else(|| missing("title"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            repository_slug: self.repo.ok_or_else(|| missing("repo"))?,
            edit_links_enabled: self.edit_links.unwrap_or(false),
            sidebar: self
                .theme
                .sidebar
                .ok_or_else(|| missing("themeConfig.sidebar"))?,
        })
    }

    /// Complete and validate this layer.
    ///
    /// # Errors
    ///
    /// Returns the first missing field or constraint violation.
    pub fn build(self) -> Result<SiteDescriptor, ValidationError> {
        SiteDescriptor::build(self.into_fields()?)
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (value, field) in [
            (&mut self.title, "title"),
            (&mut self.description, "description"),
            (&mut self.repo, "repo"),
        ] {
            if let Some(raw) = value.as_deref() {
                *value = Some(expand_env(raw, field)?);
            }
        }
        Ok(())
    }
}
