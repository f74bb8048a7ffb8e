//! Environment loading for `RbacConfig`.
//!
//! Environment variables are process-wide, so every case lives in one test
//! function and runs in order.

use claims_rbac::config::{ENV_LOG_DENIALS, ENV_LOG_GRANTS};
use claims_rbac::{AccessControl, RbacConfig, RbacError};

fn clear() {
    std::env::remove_var(ENV_LOG_DENIALS);
    std::env::remove_var(ENV_LOG_GRANTS);
}

#[test]
fn test_config_from_env() {
    clear();
    assert_eq!(RbacConfig::from_env(), RbacConfig::default());
    assert_eq!(RbacConfig::try_from_env(), Ok(RbacConfig::default()));

    std::env::set_var(ENV_LOG_DENIALS, "TRUE");
    std::env::set_var(ENV_LOG_GRANTS, "0");
    let expected = RbacConfig {
        log_denials: true,
        log_grants: false,
    };
    assert_eq!(RbacConfig::from_env(), expected);
    assert_eq!(RbacConfig::try_from_env(), Ok(expected));
    assert_eq!(AccessControl::from_env().config(), &expected);

    std::env::set_var(ENV_LOG_DENIALS, "1");
    std::env::set_var(ENV_LOG_GRANTS, "true");
    let config = RbacConfig::from_env();
    assert!(config.log_denials);
    assert!(config.log_grants);

    // Malformed: lenient loader falls back, strict loader reports the key.
    std::env::set_var(ENV_LOG_DENIALS, "loud");
    std::env::set_var(ENV_LOG_GRANTS, "1");
    let config = RbacConfig::from_env();
    assert!(!config.log_denials);
    assert!(config.log_grants);

    match RbacConfig::try_from_env() {
        Err(RbacError::Config { key, message }) => {
            assert_eq!(key, ENV_LOG_DENIALS);
            assert!(message.contains("loud"), "{message}");
        }
        other => panic!("expected config error, got {other:?}"),
    }

    std::env::set_var(ENV_LOG_DENIALS, "yes");
    assert!(RbacConfig::try_from_env().is_err());
    assert!(!RbacConfig::from_env().log_denials);

    clear();
}
