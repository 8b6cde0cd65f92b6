//! Config - Process-wide interaction defaults.
//!
//! Sessions resolve their configuration once, at creation, by merging
//! explicit options over these defaults. Later changes to the defaults do not
//! reach existing sessions.
//!
//! # API
//!
//! - `get_config` - Current defaults
//! - `configure(f)` - Update defaults in place
//! - `reset_config` - Restore built-in defaults (for testing)
//!
//! The defaults are shared by every thread in the process.

use std::sync::LazyLock;
use std::time::Duration;

use parking_lot::RwLock;

/// Type tags of the host components interactions recognise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostComponentNames {
    pub text_input: String,
}

impl Default for HostComponentNames {
    fn default() -> Self {
        Self {
            text_input: "TextInput".to_string(),
        }
    }
}

/// Resolved interaction configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Delay between simulated events. `None` disables the delay; a disabled
    /// or zero delay still yields once per step.
    pub delay: Option<Duration>,
    pub host_component_names: HostComponentNames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: Some(Duration::ZERO),
            host_component_names: HostComponentNames::default(),
        }
    }
}

static DEFAULT_CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Serializes unit tests that change the process-wide defaults.
#[cfg(test)]
pub(crate) static TEST_CONFIG_LOCK: parking_lot::Mutex<()> = parking_lot::Mutex::new(());

/// Current process-wide defaults.
pub fn get_config() -> Config {
    DEFAULT_CONFIG.read().clone()
}

/// Update the process-wide defaults.
pub fn configure(f: impl FnOnce(&mut Config)) {
    f(&mut DEFAULT_CONFIG.write());
}

/// Restore the built-in defaults.
pub fn reset_config() {
    *DEFAULT_CONFIG.write() = Config::default();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        let config = get_config();
        assert_eq!(config.delay, Some(Duration::ZERO));
        assert_eq!(config.host_component_names.text_input, "TextInput");
    }

    #[test]
    fn test_configure_and_reset() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        configure(|config| {
            config.delay = Some(Duration::from_millis(10));
            config.host_component_names.text_input = "RCTTextInput".to_string();
        });

        let config = get_config();
        assert_eq!(config.delay, Some(Duration::from_millis(10)));
        assert_eq!(config.host_component_names.text_input, "RCTTextInput");

        reset_config();
        assert_eq!(get_config(), Config::default());
    }

    #[test]
    fn test_defaults_are_shared_across_threads() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        configure(|config| config.delay = Some(Duration::from_millis(42)));

        let seen = std::thread::spawn(|| get_config().delay).join().unwrap();
        assert_eq!(seen, Some(Duration::from_millis(42)));

        std::thread::spawn(reset_config).join().unwrap();
        assert_eq!(get_config(), Config::default());
    }
}
