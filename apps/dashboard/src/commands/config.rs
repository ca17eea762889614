//! # Config Commands
//!
//! Store configuration and the display language.
//!
//! ## Language Switch
//! ```text
//! set_language("hindi")
//!   ├── parse code ───────────── unknown ──► VALIDATION_ERROR, nothing changes
//!   ├── SettingsState.language = Hindi       (takes effect at once)
//!   ├── write settings.toml ──── failure ──► logged, switch stands
//!   └── "Language Updated" notification, in the new language
//! ```

use kirana_core::i18n::{self, Language};
use kirana_core::Notification;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigError, ConfigState, SettingsState};

/// An entry in the language picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub display_name: String,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        LanguageInfo {
            code: language.code(),
            name: language.name(),
            native_name: language.native_name(),
            display_name: language.display_name(),
        }
    }
}

/// Gets the current configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

pub fn get_language(settings: &SettingsState) -> LanguageInfo {
    LanguageInfo::from(settings.language())
}

/// Every selectable language, in menu order.
pub fn list_languages() -> Vec<LanguageInfo> {
    Language::ALL.into_iter().map(LanguageInfo::from).collect()
}

/// Switches the display language and persists it.
///
/// ## Errors
/// - `VALIDATION_ERROR` for an unknown code
pub fn set_language(settings: &SettingsState, code: &str) -> Result<Notification, ApiError> {
    debug!(code = %code, "set_language command");
    let language: Language = code.parse().map_err(ConfigError::from)?;

    if let Err(e) = settings.set_language(language) {
        warn!(error = %e, "Language switched but not saved");
    }
    info!(language = %language, "Display language changed");

    let display_name = language.display_name();
    Ok(Notification::new(
        i18n::translate(language, "languageUpdated"),
        i18n::translate_with(
            language,
            "languageChangedTo",
            &[("language", display_name.as_str())],
        ),
    ))
}

/// A UI string in the current language.
pub fn translate(settings: &SettingsState, key: &str) -> String {
    i18n::translate(settings.language(), key).to_string()
}
