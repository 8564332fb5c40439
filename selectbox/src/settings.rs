//! Per-instance selectbox configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Resolved configuration of one selectbox.
///
/// Built once at attach time by merging caller overrides onto the defaults,
/// then only read.
///
/// # Example
///
/// ```
/// use selectbox::Settings;
///
/// let settings = Settings::default()
///     .with_option_class("choice")
///     .with_animation(false);
/// assert_eq!(settings.select_class, "jSelectbox");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Class on the mirror root.
    ///
    /// Default: `jSelectbox`
    pub select_class: String,

    /// Class on the current-selection display.
    ///
    /// Default: `selected`
    pub selection_class: String,

    /// Class on every mirror option.
    ///
    /// Default: `jOption`
    pub option_class: String,

    /// Class on the option list.
    ///
    /// Default: `optionContainer`
    pub option_container_class: String,

    /// Whether opening cascades the options into place.
    ///
    /// Default: true
    pub animation: bool,

    /// Length of the open cascade.
    ///
    /// Default: 50 ms
    pub animation_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            select_class: "jSelectbox".to_string(),
            selection_class: "selected".to_string(),
            option_class: "jOption".to_string(),
            option_container_class: "optionContainer".to_string(),
            animation: true,
            animation_duration: Duration::from_millis(50),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_select_class(mut self, class: impl Into<String>) -> Self {
        self.select_class = class.into();
        self
    }

    pub fn with_selection_class(mut self, class: impl Into<String>) -> Self {
        self.selection_class = class.into();
        self
    }

    pub fn with_option_class(mut self, class: impl Into<String>) -> Self {
        self.option_class = class.into();
        self
    }

    pub fn with_option_container_class(mut self, class: impl Into<String>) -> Self {
        self.option_container_class = class.into();
        self
    }

    pub fn with_animation(mut self, enabled: bool) -> Self {
        self.animation = enabled;
        self
    }

    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Apply overrides key by key; keys the caller left out keep their value.
    pub fn merge(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(class) = overrides.select_class {
            self.select_class = class;
        }
        if let Some(class) = overrides.selection_class {
            self.selection_class = class;
        }
        if let Some(class) = overrides.option_class {
            self.option_class = class;
        }
        if let Some(class) = overrides.option_container_class {
            self.option_container_class = class;
        }
        if let Some(enabled) = overrides.animation {
            self.animation = enabled;
        }
        if let Some(ms) = overrides.animation_duration {
            self.animation_duration = Duration::from_millis(ms);
        }
        self
    }

    /// Defaults merged with a JSON options object, e.g.
    /// `{"selectClass": "fancy", "animation": false}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::default().merge(SettingsOverrides::from_json(json)?))
    }
}

/// Caller-supplied settings; every key is optional.
///
/// Keys follow the options-object spelling (`selectClass`,
/// `oContainerClass`, `animationDuration` in milliseconds, ...). Unknown keys
/// are rejected so a typo doesn't silently fall back to a default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsOverrides {
    pub select_class: Option<String>,
    pub selection_class: Option<String>,
    pub option_class: Option<String>,
    #[serde(rename = "oContainerClass")]
    pub option_container_class: Option<String>,
    pub animation: Option<bool>,
    pub animation_duration: Option<u64>,
}

impl SettingsOverrides {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
