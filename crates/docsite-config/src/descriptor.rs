//! The validated site descriptor.
//!
//! [`SiteDescriptor::build`] is the only way to obtain a descriptor, so every
//! value in circulation satisfies the sidebar and repository invariants.

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::external::{ExternalConfig, ThemeConfig};

/// Two path segments, each made of the characters hosting services accept.
static REPOSITORY_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+/[A-Za-z0-9._-]+$").unwrap());

/// Base URL for links generated from the repository slug.
const REPOSITORY_HOST: &str = "https://github.com";

/// Route conventionally listed first in the sidebar.
const ROOT_ROUTE: &str = "/";

/// Input record for [`SiteDescriptor::build`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteFields {
    /// Site title.
    pub title: String,
    /// Site subtitle.
    pub description: String,
    /// Source repository as `owner/name`.
    pub repository_slug: String,
    /// Whether per-page edit links are rendered.
    pub edit_links_enabled: bool,
    /// Ordered sidebar routes.
    pub sidebar: Vec<String>,
}

/// Site metadata and navigation order, validated at construction.
///
/// Immutable: fields are only reachable through accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteDescriptor {
    title: String,
    description: String,
    repository_slug: String,
    edit_links_enabled: bool,
    sidebar: Vec<String>,
}

impl SiteDescriptor {
    /// Validate `fields` and freeze them into a descriptor.
    ///
    /// Checks run in field order (title, description, repository slug,
    /// sidebar) and the first violation is returned.
    pub fn build(fields: SiteFields) -> Result<Self, ValidationError> {
        require_non_empty(&fields.title, "title")?;
        require_non_empty(&fields.description, "description")?;
        validate_repository_slug(&fields.repository_slug)?;
        validate_sidebar(&fields.sidebar)?;

        if let Some(first) = fields.sidebar.first()
            && first != ROOT_ROUTE
        {
            tracing::warn!(first = %first, "Sidebar does not start with the site root");
        }

        Ok(Self {
            title: fields.title,
            description: fields.description,
            repository_slug: fields.repository_slug,
            edit_links_enabled: fields.edit_links_enabled,
            sidebar: fields.sidebar,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Repository as `owner/name`.
    #[must_use]
    pub fn repository_slug(&self) -> &str {
        &self.repository_slug
    }

    #[must_use]
    pub fn edit_links_enabled(&self) -> bool {
        self.edit_links_enabled
    }

    /// Sidebar routes in menu order.
    #[must_use]
    pub fn sidebar(&self) -> &[String] {
        &self.sidebar
    }

    /// Whether the sidebar opens with the site root, as generators expect.
    #[must_use]
    pub fn starts_at_root(&self) -> bool {
        self.sidebar.first().is_some_and(|route| route == ROOT_ROUTE)
    }

    /// External link to the source repository.
    #[must_use]
    pub fn repository_url(&self) -> String {
        format!("{REPOSITORY_HOST}/{}", self.repository_slug)
    }

    /// Plain key/value form handed to the site generator.
    #[must_use]
    pub fn to_external_config(&self) -> ExternalConfig {
        ExternalConfig {
            title: self.title.clone(),
            description: self.description.clone(),
            repo: self.repository_slug.clone(),
            edit_links: self.edit_links_enabled,
            theme_config: ThemeConfig {
                sidebar: self.sidebar.clone(),
            },
        }
    }

    /// Merge with a lower-priority descriptor.
    ///
    /// Metadata comes from `self`. The sidebar is `self`'s routes followed by
    /// the routes only `lower` lists, each kept at its first position.
    #[must_use]
    pub fn merge(&self, lower: &SiteDescriptor) -> SiteDescriptor {
        let sidebar = dedup_routes(self.sidebar.iter().chain(&lower.sidebar).cloned());
        tracing::debug!(
            higher = self.sidebar.len(),
            lower = lower.sidebar.len(),
            merged = sidebar.len(),
            "Merged sidebars"
        );

        SiteDescriptor {
            sidebar,
            ..self.clone()
        }
    }

    /// Fold descriptors given highest priority first.
    ///
    /// Returns `None` when `descriptors` is empty.
    pub fn merge_all<I>(descriptors: I) -> Option<SiteDescriptor>
    where
        I: IntoIterator<Item = SiteDescriptor>,
    {
        descriptors
            .into_iter()
            .reduce(|higher, lower| higher.merge(&lower))
    }
}

/// Drop repeated routes, keeping each at its first position.
pub(crate) fn dedup_routes(routes: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|route| seen.insert(route.clone()))
        .collect()
}

fn require_non_empty(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(())
}

fn validate_repository_slug(slug: &str) -> Result<(), ValidationError> {
    require_non_empty(slug, "repo")?;
    if !REPOSITORY_SLUG_RE.is_match(slug) {
        return Err(ValidationError::MalformedRepositorySlug {
            slug: slug.to_owned(),
        });
    }
    Ok(())
}

fn validate_sidebar(sidebar: &[String]) -> Result<(), ValidationError> {
    if sidebar.is_empty() {
        return Err(ValidationError::MissingField {
            field: "themeConfig.sidebar",
        });
    }

    validate_routes(sidebar)
}

/// Reject routes that are empty, lack the leading `/`, or repeat.
///
/// An empty list passes; requiring a sidebar is up to the caller.
pub(crate) fn validate_routes(routes: &[String]) -> Result<(), ValidationError> {
    let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(routes.len());
    for (index, route) in routes.iter().enumerate() {
        if !route.starts_with('/') {
            return Err(ValidationError::InvalidRoute {
                route: route.clone(),
                index,
            });
        }
        if let Some(&first) = first_seen.get(route.as_str()) {
            return Err(ValidationError::DuplicateRoute {
                route: route.clone(),
                first,
                duplicate: index,
            });
        }
        first_seen.insert(route.as_str(), index);
    }

    Ok(())
}
