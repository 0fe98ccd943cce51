//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key in error messages. Strings without `${` are
/// returned as-is, so a bare `$` never triggers expansion.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of an environment variable that is not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_store_path_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("CCC_TEST_DATA_DIR", "/srv/ccc");
        }
        let result = expand_env("${CCC_TEST_DATA_DIR}/ccc.json", "store.path").unwrap();
        assert_eq!(result, "/srv/ccc/ccc.json");
        unsafe {
            std::env::remove_var("CCC_TEST_DATA_DIR");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("CCC_TEST_UNSET_PREFIX");
        }
        let result = expand_env("${CCC_TEST_UNSET_PREFIX:-/p}", "routes.page_prefix").unwrap();
        assert_eq!(result, "/p");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("CCC_TEST_MISSING");
        }
        let err = expand_env("${CCC_TEST_MISSING}", "store.path").unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("CCC_TEST_MISSING"));
        assert!(err.to_string().contains("store.path"));
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand_env("data/ccc.json", "store.path").unwrap(), "data/ccc.json");
        assert_eq!(expand_env("$HOME/ccc.json", "store.path").unwrap(), "$HOME/ccc.json");
    }
}
