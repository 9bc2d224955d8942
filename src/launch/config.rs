use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Folder created under the private storage root for the wallet's data.
pub const DEFAULT_DATA_DIR_NAME: &str = ".bitcoindx";
/// Environment key the Qt platform abstraction reads to pick its backend.
pub const DEFAULT_PLATFORM_KEY: &str = "QT_QPA_PLATFORM";
/// Value selecting the touch/mobile backend.
pub const DEFAULT_PLATFORM_VALUE: &str = "android";

/// Fragment compiled into the library by packaging.
const PACKAGED_TOML: &str = include_str!("../../launch.toml");

/// Fixed names the launch hook works with.
///
/// The Android entry runs with [`LaunchConfig::packaged`], read from the `launch.toml`
/// compiled into the library. Any field the fragment leaves out keeps its default.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub data_dir_name: String,
    pub platform_key: String,
    pub platform_value: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            data_dir_name: DEFAULT_DATA_DIR_NAME.to_string(),
            platform_key: DEFAULT_PLATFORM_KEY.to_string(),
            platform_value: DEFAULT_PLATFORM_VALUE.to_string(),
        }
    }
}

impl LaunchConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse launch configuration TOML")
    }

    /// Configuration compiled in from `launch.toml`, or the defaults if it does not parse.
    pub fn packaged() -> Self {
        Self::from_toml_or_default(PACKAGED_TOML)
    }

    fn from_toml_or_default(raw: &str) -> Self {
        Self::from_toml_str(raw).unwrap_or_else(|err| {
            warn!(error = %format!("{err:#}"), "Using default launch configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_qt_android_backend() {
        let config = LaunchConfig::default();
        assert_eq!(config.data_dir_name, ".bitcoindx");
        assert_eq!(config.platform_key, "QT_QPA_PLATFORM");
        assert_eq!(config.platform_value, "android");
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = LaunchConfig::from_toml_str("data_dir_name = \".bitcoindx-testnet\"\n")
            .expect("fragment should parse");

        assert_eq!(config.data_dir_name, ".bitcoindx-testnet");
        assert_eq!(config.platform_key, DEFAULT_PLATFORM_KEY);
        assert_eq!(config.platform_value, DEFAULT_PLATFORM_VALUE);
    }

    #[test]
    fn empty_toml_is_default() {
        let config = LaunchConfig::from_toml_str("").expect("empty input should parse");
        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn packaged_fragment_selects_qt_android_backend() {
        assert_eq!(LaunchConfig::packaged(), LaunchConfig::default());
    }

    #[test]
    fn unparseable_fragment_falls_back_to_defaults() {
        let config = LaunchConfig::from_toml_or_default("platform_value = [");
        assert_eq!(config, LaunchConfig::default());
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = LaunchConfig::from_toml_str("data_dir_name = 42")
            .expect_err("wrong type should be rejected");
        assert!(err.to_string().contains("launch configuration"));
    }
}
