//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// In-memory capture for log assertions
    Test,
}

static INIT_ONCE: Once = Once::new();

/// `RUST_LOG` if set and valid, else `default`
///
/// `noop` covers every target of the kernel (`noop_core::...`) and of the
/// binary (`noop::...`).
fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Initialize the logging facility
///
/// Call once at application startup. Later calls are ignored. `RUST_LOG`
/// overrides the profile's default filter.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: In-memory capture; `init_test_capture()` returns the handle
///
/// # Example
///
/// ```
/// use noop_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("noop=debug"))
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter("noop=info"))
                .with_writer(std::io::stderr)
                .init();
        }
        Profile::Test => {
            super::test_capture::init_test_capture();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_op_start;
    use crate::logging_facility::test_capture::init_test_capture;

    #[test]
    fn test_profile_equality() {
        assert_eq!(Profile::Development, Profile::Development);
        assert_ne!(Profile::Development, Profile::Production);
    }

    #[test]
    fn test_test_profile_installs_capture() {
        init(Profile::Test);
        let capture = init_test_capture();

        log_op_start!("init_test_profile_unique");

        capture.assert_event_exists("init_test_profile_unique", "start");
    }
}
