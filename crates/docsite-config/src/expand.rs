//! `${VAR}` expansion for descriptor strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::ConfigError;

/// A braced reference, with or without a `:-default`.
static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Only braced references are expanded; bare `$VAR` is left as written. The
/// first unset variable without a default fails the whole value, reported
/// against `field`.
pub(crate) fn expand_env(value: &str, field: &'static str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut copied_to = 0;

    for reference in REFERENCE_RE.find_iter(value) {
        expanded.push_str(&value[copied_to..reference.start()]);
        let resolved = shellexpand::env_with_context(reference.as_str(), |name: &str| {
            std::env::var(name).map(Some).map_err(|_| ())
        })
        .map_err(|err| ConfigError::EnvVar {
            field,
            var: err.var_name,
        })?;
        expanded.push_str(&resolved);
        copied_to = reference.end();
    }
    expanded.push_str(&value[copied_to..]);

    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_passes_through() {
        assert_eq!(
            expand_env("Go codegen ORM", "description").unwrap(),
            "Go codegen ORM"
        );
    }

    #[test]
    fn test_bare_dollar_is_literal() {
        assert_eq!(expand_env("costs $5", "description").unwrap(), "costs $5");
    }

    #[test]
    fn test_bare_dollar_beside_reference_is_literal() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_HOST", "docs.example.com");
            std::env::remove_var("path");
        }
        let result = expand_env("https://${DOCSITE_TEST_HOST}/$path", "description").unwrap();
        assert_eq!(result, "https://docs.example.com/$path");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_HOST");
        }
    }

    #[test]
    fn test_expands_set_variable() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("DOCSITE_TEST_OWNER", "kernelpayments");
        }
        let result = expand_env("${DOCSITE_TEST_OWNER}/sqlbunny", "repo").unwrap();
        assert_eq!(result, "kernelpayments/sqlbunny");
        unsafe {
            std::env::remove_var("DOCSITE_TEST_OWNER");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_TEST_UNSET_TITLE");
        }
        let result = expand_env("${DOCSITE_TEST_UNSET_TITLE:-sqlbunny}", "title").unwrap();
        assert_eq!(result, "sqlbunny");
    }

    #[test]
    fn test_unset_variable_reported_with_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("DOCSITE_TEST_MISSING");
        }
        let err = expand_env("https://${DOCSITE_TEST_MISSING}", "repo").unwrap_err();

        match &err {
            ConfigError::EnvVar { field, var } => {
                assert_eq!(*field, "repo");
                assert_eq!(var, "DOCSITE_TEST_MISSING");
            }
            other => panic!("Expected ConfigError::EnvVar, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "repo: environment variable ${DOCSITE_TEST_MISSING} is not set"
        );
    }
}
