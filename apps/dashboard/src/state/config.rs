//! # Configuration State
//!
//! Store details, money formatting, tax and timer settings, plus the one
//! value that survives a restart: the UI language.
//!
//! ## Load Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ConfigState::default()          built-in values                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KIRANA_* environment            store name, tax rate, timer periods    │
//! │                                                                         │
//! │  Settings::load(path)            settings.toml { language = "hindi" }  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  KIRANA_LANGUAGE                 wins over the file                     │
//! │                                                                         │
//! │  Settings path: --settings > KIRANA_SETTINGS_PATH > platform config dir │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use kirana_core::i18n::{Language, UnknownLanguage};
use kirana_core::{Money, TaxRate, TaxRounding, LOW_STOCK_THRESHOLD, MAX_SCAN_ATTEMPTS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Settings file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load settings: {0}")]
    LoadFailed(String),

    #[error("Failed to save settings: {0}")]
    SaveFailed(String),

    #[error("No settings path available")]
    NoPath,

    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::LoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::SaveFailed(err.to_string())
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Application configuration. Read-only after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
    pub gstin: String,

    /// Currency code (e.g., "INR")
    pub currency_code: String,
    /// Currency symbol (e.g., "₹")
    pub currency_symbol: String,
    /// Decimal places for the currency
    pub currency_decimals: u8,

    /// Bill tax rate in basis points (500 = 5%)
    pub tax_rate_bps: u32,
    pub tax_rounding: TaxRounding,

    /// Quantity below which a product counts as low stock
    pub low_stock_threshold: i64,

    /// Scan frame period in milliseconds
    pub scan_interval_ms: u64,
    pub max_scan_attempts: u32,

    /// Delay before the chat assistant answers, in milliseconds
    pub chat_reply_delay_ms: u64,

    /// Keep checked-out bills in the bill repository
    pub record_bills: bool,

    /// Staff id stamped on new bills
    pub cashier_id: String,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "MyStore".to_string(),
            store_address: "123 Main Street, City".to_string(),
            store_phone: "+91 9876543210".to_string(),
            gstin: "22AAAAA0000A1Z5".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            tax_rate_bps: kirana_core::DEFAULT_TAX_RATE_BPS,
            tax_rounding: TaxRounding::WholeUnits,
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            scan_interval_ms: 200,
            max_scan_attempts: MAX_SCAN_ATTEMPTS,
            chat_reply_delay_ms: 1000,
            record_bills: false,
            cashier_id: "U001".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KIRANA_STORE_NAME`: Override store name
    /// - `KIRANA_TAX_RATE`: Override tax rate in percent (e.g., "5")
    /// - `KIRANA_SCAN_INTERVAL_MS`: Override the scan frame period
    /// - `KIRANA_CHAT_DELAY_MS`: Override the chat reply delay
    /// - `KIRANA_RECORD_BILLS`: "true" keeps checked-out bills
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies overrides from a variable lookup.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(store_name) = var("KIRANA_STORE_NAME") {
            self.store_name = store_name;
        }

        if let Some(rate) = var("KIRANA_TAX_RATE") {
            match rate.trim().parse::<f64>() {
                Ok(pct) if (0.0..=100.0).contains(&pct) => {
                    self.tax_rate_bps = TaxRate::from_percentage(pct).bps();
                }
                _ => warn!(rate = %rate, "Ignoring invalid KIRANA_TAX_RATE"),
            }
        }

        if let Some(ms) = var("KIRANA_SCAN_INTERVAL_MS").and_then(|v| v.parse::<u64>().ok()) {
            if ms > 0 {
                self.scan_interval_ms = ms;
            }
        }

        if let Some(ms) = var("KIRANA_CHAT_DELAY_MS").and_then(|v| v.parse::<u64>().ok()) {
            self.chat_reply_delay_ms = ms;
        }

        if let Some(flag) = var("KIRANA_RECORD_BILLS") {
            self.record_bills = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_millis(self.scan_interval_ms)
    }

    pub fn chat_reply_delay(&self) -> Duration {
        Duration::from_millis(self.chat_reply_delay_ms)
    }

    /// Formats a paise amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "₹12.34");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = paise / divisor;
        let frac = (paise % divisor).abs();

        format!(
            "{}{}{}",
            if paise < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    pub fn format_money(&self, amount: Money) -> String {
        self.format_currency(amount.paise())
    }
}

// =============================================================================
// Persisted Settings
// =============================================================================

/// What is written to `settings.toml`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub language: Language,
}

/// On-disk shape. The language stays a string so an unknown code can be
/// ignored instead of failing the whole file.
#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    #[serde(default)]
    language: Option<String>,
}

impl Settings {
    /// Loads settings from a file.
    ///
    /// A missing file yields the defaults; an unknown language code is
    /// ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(?path, "Settings file not found, using defaults");
            return Ok(Settings::default());
        }

        info!(?path, "Loading settings");
        let contents = std::fs::read_to_string(path)?;
        let raw: RawSettings = toml::from_str(&contents)?;

        let mut settings = Settings::default();
        if let Some(code) = raw.language {
            match code.parse::<Language>() {
                Ok(language) => settings.language = language,
                Err(e) => warn!(error = %e, "Ignoring stored language"),
            }
        }
        Ok(settings)
    }

    /// Loads settings or returns defaults if load fails.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                warn!("Failed to load settings: {}. Using defaults.", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Saves settings to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|e| ConfigError::SaveFailed(e.to_string()))?;

        info!(?path, language = %self.language, "Settings saved");
        Ok(())
    }

    /// `--settings` argument, then `KIRANA_SETTINGS_PATH`, then the platform
    /// config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| std::env::var("KIRANA_SETTINGS_PATH").ok().map(PathBuf::from))
            .or_else(Self::default_path)
    }

    fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "kirana", "pos")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
    }
}

/// Managed settings with write-through persistence.
#[derive(Debug)]
pub struct SettingsState {
    settings: Mutex<Settings>,
    path: Option<PathBuf>,
}

impl SettingsState {
    pub fn new(settings: Settings, path: Option<PathBuf>) -> Self {
        SettingsState {
            settings: Mutex::new(settings),
            path,
        }
    }

    /// Loads the settings file and applies `KIRANA_LANGUAGE`.
    pub fn load(path: Option<PathBuf>) -> Self {
        let mut settings = Settings::load_or_default(path.as_deref());
        if let Ok(code) = std::env::var("KIRANA_LANGUAGE") {
            match code.parse::<Language>() {
                Ok(language) => settings.language = language,
                Err(e) => warn!(error = %e, "Ignoring KIRANA_LANGUAGE"),
            }
        }
        Self::new(settings, path)
    }

    pub fn language(&self) -> Language {
        self.settings
            .lock()
            .expect("settings mutex poisoned")
            .language
    }

    /// Switches the UI language and writes the settings file.
    ///
    /// The in-memory language changes even when the file cannot be written;
    /// the write failure is returned so the caller can report it.
    pub fn set_language(&self, language: Language) -> Result<(), ConfigError> {
        let snapshot = {
            let mut settings = self.settings.lock().expect("settings mutex poisoned");
            settings.language = language;
            *settings
        };

        match &self.path {
            Some(path) => snapshot.save(path),
            None => Err(ConfigError::NoPath),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(2000), "₹20.00");
        assert_eq!(config.format_currency(1), "₹0.01");
        assert_eq!(config.format_currency(-1234), "-₹12.34");
        assert_eq!(config.format_money(Money::from_rupees(95)), "₹95.00");
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.store_name, "MyStore");
        assert_eq!(config.tax_rate().bps(), 500);
        assert_eq!(config.scan_interval(), Duration::from_millis(200));
        assert_eq!(config.chat_reply_delay(), Duration::from_secs(1));
        assert!(!config.record_bills);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("KIRANA_STORE_NAME", "Sharma General Store"),
            ("KIRANA_TAX_RATE", "12"),
            ("KIRANA_SCAN_INTERVAL_MS", "50"),
            ("KIRANA_RECORD_BILLS", "true"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Sharma General Store");
        assert_eq!(config.tax_rate_bps, 1200);
        assert_eq!(config.scan_interval_ms, 50);
        assert!(config.record_bills);
    }

    #[test]
    fn test_invalid_tax_override_is_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(|k| (k == "KIRANA_TAX_RATE").then(|| "abc".to_string()));
        assert_eq!(config.tax_rate_bps, 500);
    }

    #[test]
    fn test_settings_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.toml");

        let state = SettingsState::new(Settings::default(), Some(path.clone()));
        state.set_language(Language::Hindi).unwrap();
        assert_eq!(state.language(), Language::Hindi);

        let reloaded = Settings::load(&path).unwrap();
        assert_eq!(reloaded.language, Language::Hindi);
    }

    #[test]
    fn test_missing_or_bad_settings_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert_eq!(Settings::load(&missing).unwrap(), Settings::default());

        let unknown = dir.path().join("unknown.toml");
        std::fs::write(&unknown, "language = \"klingon\"\n").unwrap();
        assert_eq!(Settings::load(&unknown).unwrap().language, Language::English);

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "language = [").unwrap();
        assert!(Settings::load(&broken).is_err());
        assert_eq!(Settings::load_or_default(Some(&broken)), Settings::default());
    }

    #[test]
    fn test_set_language_without_path_still_switches() {
        let state = SettingsState::new(Settings::default(), None);
        assert!(matches!(state.set_language(Language::Tamil), Err(ConfigError::NoPath)));
        assert_eq!(state.language(), Language::Tamil);
    }
}
