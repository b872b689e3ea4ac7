//! High-level configuration API

use crate::error::{Error, Result};
use renga_core::ContinuationMode;

/// Immutable-after-construction parser settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) auto_chomp: bool,
    pub(crate) multiline: ContinuationMode,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Whether trailing line terminators are stripped before assembly
    pub fn auto_chomp(&self) -> bool {
        self.auto_chomp
    }

    /// Active continuation policy
    pub fn multiline(&self) -> ContinuationMode {
        self.multiline
    }

    /// Look up a setting by its recognized name
    ///
    /// Recognized names are `auto_chomp` and `multiline_type`; anything
    /// else yields `None`.
    pub fn setting(&self, name: &str) -> Option<SettingValue> {
        match Setting::from_name(name)? {
            Setting::AutoChomp => Some(SettingValue::Bool(self.auto_chomp)),
            Setting::Multiline => Some(SettingValue::Mode(self.multiline)),
        }
    }
}

/// Recognized option names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Terminator stripping (`auto_chomp`)
    AutoChomp,
    /// Continuation policy (`multiline_type`)
    Multiline,
}

impl Setting {
    /// Map an option name to its setting
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "auto_chomp" => Some(Setting::AutoChomp),
            "multiline_type" => Some(Setting::Multiline),
            _ => None,
        }
    }

    /// The option name for this setting
    pub fn name(&self) -> &'static str {
        match self {
            Setting::AutoChomp => "auto_chomp",
            Setting::Multiline => "multiline_type",
        }
    }
}

/// Value of a recognized setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingValue {
    /// Boolean-valued setting
    Bool(bool),
    /// Continuation-mode setting
    Mode(ContinuationMode),
}

/// Configuration builder
///
/// Validation happens at `build` (and eagerly in `multiline_code`); a
/// failed build produces no configuration and therefore no parser.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Strip trailing line terminators before assembly
    pub fn auto_chomp(mut self, on: bool) -> Self {
        self.config.auto_chomp = on;
        self
    }

    /// Set the continuation policy
    pub fn multiline(mut self, mode: ContinuationMode) -> Self {
        self.config.multiline = mode;
        self
    }

    /// Set the continuation policy from its string code
    ///
    /// Accepts `none`, `join_next`, and `join_last`; anything else fails
    /// immediately with a configuration error.
    pub fn multiline_code(mut self, code: &str) -> Result<Self> {
        match ContinuationMode::from_code(code) {
            Some(mode) => {
                self.config.multiline = mode;
                Ok(self)
            }
            None => Err(Error::Config(format!("unknown multiline_type '{code}'"))),
        }
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        Ok(self.config)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Wire shape: the two recognized option names, nothing else.
    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigRepr {
        #[serde(default)]
        auto_chomp: bool,
        #[serde(default = "default_multiline_code")]
        multiline_type: String,
    }

    fn default_multiline_code() -> String {
        ContinuationMode::None.code().to_string()
    }

    impl Serialize for Config {
        fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
            ConfigRepr {
                auto_chomp: self.auto_chomp,
                multiline_type: self.multiline.code().to_string(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Config {
        fn deserialize<D: Deserializer<'de>>(
            deserializer: D,
        ) -> std::result::Result<Self, D::Error> {
            let repr = ConfigRepr::deserialize(deserializer)?;
            let multiline = ContinuationMode::from_code(&repr.multiline_type).ok_or_else(|| {
                D::Error::custom(format!("unknown multiline_type '{}'", repr.multiline_type))
            })?;
            Ok(Config {
                auto_chomp: repr.auto_chomp,
                multiline,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.auto_chomp());
        assert_eq!(config.multiline(), ContinuationMode::None);
    }

    #[test]
    fn test_setting_lookup() {
        let config = Config::builder()
            .auto_chomp(true)
            .multiline(ContinuationMode::JoinLast)
            .build()
            .unwrap();

        assert_eq!(config.setting("auto_chomp"), Some(SettingValue::Bool(true)));
        assert_eq!(
            config.setting("multiline_type"),
            Some(SettingValue::Mode(ContinuationMode::JoinLast))
        );
        assert_eq!(config.setting("line_ending"), None);
    }

    #[test]
    fn test_unknown_mode_code_rejected() {
        let result = Config::builder().multiline_code("join_both");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_setting_names_round_trip() {
        for setting in [Setting::AutoChomp, Setting::Multiline] {
            assert_eq!(Setting::from_name(setting.name()), Some(setting));
        }
    }
}
