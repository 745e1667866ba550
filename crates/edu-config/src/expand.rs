//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// `${VAR}` errors when VAR is unset; `${VAR:-default}` falls back to the
/// default. Bare `$VAR` is left as is.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var)
            .map(Some)
            .map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that could not be read.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_expand_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("EDU_EXPAND_SIMPLE", "sk-123");
        }
        assert_eq!(
            expand_env("${EDU_EXPAND_SIMPLE}", "genai.api_key").unwrap(),
            "sk-123"
        );
        unsafe {
            std::env::remove_var("EDU_EXPAND_SIMPLE");
        }
    }

    #[test]
    fn test_expand_empty_default() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("EDU_EXPAND_UNSET");
        }
        assert_eq!(expand_env("${EDU_EXPAND_UNSET:-}", "genai.api_key").unwrap(), "");
        assert_eq!(
            expand_env("${EDU_EXPAND_UNSET:-fallback}", "genai.model").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_expand_missing_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("EDU_EXPAND_MISSING");
        }
        let err = expand_env("${EDU_EXPAND_MISSING}", "genai.api_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert_eq!(
            err.to_string(),
            "Environment variable error in genai.api_key: ${EDU_EXPAND_MISSING} not set"
        );
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("plain-key", "f").unwrap(), "plain-key");
        assert_eq!(expand_env("$HOME", "f").unwrap(), "$HOME");
    }
}
