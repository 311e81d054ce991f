//! Configuration shape read by the site generator.

use serde::{Deserialize, Serialize};

/// Site options as the generator names them.
///
/// Produced by [`SiteDescriptor::to_external_config`](crate::SiteDescriptor::to_external_config).
/// Field order matches the generator's conventional config file layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalConfig {
    /// Site header and page `<title>`.
    pub title: String,
    /// Meta description and subtitle.
    pub description: String,
    /// Source repository link target (`owner/name`).
    pub repo: String,
    /// Per-page edit affordance.
    pub edit_links: bool,
    /// Theme options.
    pub theme_config: ThemeConfig,
}

/// Presentational and navigational options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Left-navigation routes in menu order.
    pub sidebar: Vec<String>,
}

impl ExternalConfig {
    /// Render as a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Render as a CommonJS module (`module.exports = {...};`).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_module(&self) -> Result<String, serde_json::Error> {
        let body = serde_json::to_string_pretty(self)?;
        Ok(format!("module.exports = {body};\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ExternalConfig {
        ExternalConfig {
            title: "sqlbunny".to_owned(),
            description: "Go codegen ORM".to_owned(),
            repo: "kernelpayments/sqlbunny".to_owned(),
            edit_links: true,
            theme_config: ThemeConfig {
                sidebar: vec!["/".to_owned(), "/getting-started".to_owned()],
            },
        }
    }

    #[test]
    fn test_to_json_uses_generator_keys() {
        let json = sample().to_json().unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "sqlbunny",
                "description": "Go codegen ORM",
                "repo": "kernelpayments/sqlbunny",
                "editLinks": true,
                "themeConfig": {
                    "sidebar": ["/", "/getting-started"]
                }
            })
        );
    }

    #[test]
    fn test_to_module_wraps_json() {
        let module = sample().to_module().unwrap();

        assert!(module.starts_with("module.exports = {"));
        assert!(module.ends_with("};\n"));
        assert!(module.contains("\"editLinks\": true"));
        assert!(module.contains("\"themeConfig\""));
    }

    #[test]
    fn test_parse_generator_json() {
        let json = r#"{
            "title": "sqlbunny",
            "description": "Go codegen ORM",
            "repo": "kernelpayments/sqlbunny",
            "editLinks": true,
            "themeConfig": { "sidebar": ["/", "/getting-started"] }
        }"#;

        let config: ExternalConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config, sample());
    }
}
