//! `docsite check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsite_config::SiteDescriptor;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Descriptor files, highest priority first (default: auto-discover docsite.toml).
    configs: Vec<PathBuf>,

    /// List every sidebar route.
    #[arg(long)]
    routes: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if a descriptor cannot be loaded or is invalid.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let site = docsite_config::load(&self.configs)?;

        output.highlight(site.title());
        for line in summary(&site, self.routes) {
            output.info(&line);
        }
        if let Some(warning) = root_warning(&site) {
            output.warning(&warning);
        }
        output.success("Site descriptor is valid");

        Ok(())
    }
}

/// Human-readable description of a validated descriptor.
fn summary(site: &SiteDescriptor, with_routes: bool) -> Vec<String> {
    let edit_links = if site.edit_links_enabled() {
        "enabled"
    } else {
        "disabled"
    };

    let mut lines = vec![
        format!("Description: {}", site.description()),
        format!("Repository: {}", site.repository_url()),
        format!("Edit links: {edit_links}"),
        format!("Sidebar: {} routes", site.sidebar().len()),
    ];
    if with_routes {
        lines.extend(site.sidebar().iter().map(|route| format!("  {route}")));
    }
    lines
}

/// Warning for a sidebar that does not open with the site root.
fn root_warning(site: &SiteDescriptor) -> Option<String> {
    if site.starts_at_root() {
        return None;
    }
    site.sidebar()
        .first()
        .map(|first| format!("Warning: sidebar starts with {first} instead of the site root /"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_config::SiteFields;
    use pretty_assertions::assert_eq;

    fn site_with(edit_links_enabled: bool, sidebar: &[&str]) -> SiteDescriptor {
        SiteDescriptor::build(SiteFields {
            title: "sqlbunny".to_owned(),
            description: "Go codegen ORM".to_owned(),
            repository_slug: "kernelpayments/sqlbunny".to_owned(),
            edit_links_enabled,
            sidebar: sidebar.iter().map(|&r| r.to_owned()).collect(),
        })
        .unwrap()
    }

    fn site(edit_links_enabled: bool) -> SiteDescriptor {
        site_with(edit_links_enabled, &["/", "/models"])
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            summary(&site(true), false),
            vec![
                "Description: Go codegen ORM",
                "Repository: https://github.com/kernelpayments/sqlbunny",
                "Edit links: enabled",
                "Sidebar: 2 routes",
            ]
        );
    }

    #[test]
    fn test_summary_lists_routes() {
        let lines = summary(&site(false), true);

        assert!(lines.contains(&"Edit links: disabled".to_owned()));
        assert_eq!(&lines[lines.len() - 2..], ["  /", "  /models"]);
    }

    #[test]
    fn test_root_warning_when_sidebar_skips_root() {
        let warning = root_warning(&site_with(true, &["/x", "/"])).unwrap();
        assert!(warning.contains("/x"), "got {warning}");
    }

    #[test]
    fn test_no_root_warning_for_root_first() {
        assert!(root_warning(&site(true)).is_none());
    }
}
