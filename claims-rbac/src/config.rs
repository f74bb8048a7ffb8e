//! Logging configuration for the decision layer.
//!
//! Only affects how outcomes are logged; the rules themselves are compiled
//! in and cannot be configured. Loaded from environment variables or
//! embedded in a host service's config file via serde.

use serde::{Deserialize, Serialize};

use crate::error::{RbacError, RbacResult};

/// Environment variable toggling info-level logging of denials.
pub const ENV_LOG_DENIALS: &str = "CLAIMS_RBAC_LOG_DENIALS";

/// Environment variable toggling info-level logging of grants.
pub const ENV_LOG_GRANTS: &str = "CLAIMS_RBAC_LOG_GRANTS";

/// Decision logging configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RbacConfig {
    /// Log denied decisions at info level instead of debug.
    pub log_denials: bool,

    /// Log granted decisions at info level instead of debug.
    pub log_grants: bool,
}

impl RbacConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLAIMS_RBAC_LOG_DENIALS`: `true`/`1` or `false`/`0` (default: false)
    /// - `CLAIMS_RBAC_LOG_GRANTS`: `true`/`1` or `false`/`0` (default: false)
    ///
    /// Values are case-insensitive; anything else falls back to the default.
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            log_denials: std::env::var(ENV_LOG_DENIALS)
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(default.log_denials),
            log_grants: std::env::var(ENV_LOG_GRANTS)
                .ok()
                .and_then(|s| parse_flag(&s))
                .unwrap_or(default.log_grants),
        }
    }

    /// Load configuration from environment variables, rejecting malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::Config`] if a variable is set but is not a boolean flag.
    pub fn try_from_env() -> RbacResult<Self> {
        Ok(Self {
            log_denials: flag_from_env(ENV_LOG_DENIALS)?.unwrap_or(false),
            log_grants: flag_from_env(ENV_LOG_GRANTS)?.unwrap_or(false),
        })
    }

    /// Parse configuration from a JSON document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`RbacError::Config`] if the document is not valid.
    pub fn from_json(json: &str) -> RbacResult<Self> {
        serde_json::from_str(json).map_err(|e| RbacError::Config {
            key: "rbac".to_string(),
            message: e.to_string(),
        })
    }
}

fn flag_from_env(key: &str) -> RbacResult<Option<bool>> {
    match std::env::var(key) {
        Ok(value) => parse_flag(&value).map(Some).ok_or_else(|| RbacError::Config {
            key: key.to_string(),
            message: format!("expected a boolean flag, got {value:?}"),
        }),
        Err(_) => Ok(None),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RbacConfig::default();
        assert!(!config.log_denials);
        assert!(!config.log_grants);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" 1 "), Some(true));
        assert_eq!(parse_flag("FALSE"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("yes"), None);
        assert_eq!(parse_flag("off"), None);
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RbacConfig::from_json(r#"{"log_denials": true}"#).unwrap();
        assert!(config.log_denials);
        assert!(!config.log_grants);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = RbacConfig::from_json(r#"{"log_denials": "loud"}"#).unwrap_err();
        assert!(matches!(err, RbacError::Config { .. }));
        assert!(err.is_server_error());
    }
}
