//! Page configuration: selector options, layout breakpoint, and card footer.
//!
//! Defaults are compiled in. A page may override any subset of them with a
//! JSON block embedded in `index.html`:
//!
//! ```html
//! <script type="application/json" id="cotizen-config">
//!   { "currencies": ["GTQ", "USD"], "default_currency": "GTQ" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "cotizen-config";
pub const DEFAULT_BRAND: &str = "CotiZen";
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_NARROW_VIEWPORT_PX: f64 = 800.0;
pub const DEFAULT_QUOTE_VALIDITY_DAYS: u32 = 30;
pub const DEFAULT_SECTORS: &[&str] = &["Tecnolog\u{ed}a", "Retail", "Manufactura", "Salud", "Educaci\u{f3}n", "Servicios"];
pub const DEFAULT_CURRENCIES: &[&str] = &["USD", "GTQ", "EUR", "MXN"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config lists no sectors")]
    NoSectors,
    #[error("config lists no currencies")]
    NoCurrencies,
    #[error("default currency {0} is not among the configured currencies")]
    UnknownDefaultCurrency(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand: String,
    pub sectors: Vec<String>,
    pub currencies: Vec<String>,
    pub default_currency: String,
    pub narrow_viewport_px: f64,
    /// `None` (JSON `null`) drops the validity disclaimer from the card footer.
    pub quote_validity_days: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_owned(),
            sectors: DEFAULT_SECTORS.iter().map(|s| (*s).to_owned()).collect(),
            currencies: DEFAULT_CURRENCIES.iter().map(|c| (*c).to_owned()).collect(),
            default_currency: DEFAULT_CURRENCY.to_owned(),
            narrow_viewport_px: DEFAULT_NARROW_VIEWPORT_PX,
            quote_validity_days: Some(DEFAULT_QUOTE_VALIDITY_DAYS),
        }
    }
}

impl AppConfig {
    /// Parse and validate a JSON override; missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed, either option list
    /// is empty, or the default currency is not one of the listed currencies.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sectors.is_empty() {
            return Err(ConfigError::NoSectors);
        }
        if self.currencies.is_empty() {
            return Err(ConfigError::NoCurrencies);
        }
        if !self.currencies.contains(&self.default_currency) {
            return Err(ConfigError::UnknownDefaultCurrency(self.default_currency.clone()));
        }
        Ok(())
    }

    /// Load the page's embedded override, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = embedded_config() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("loaded page config: {} sectors, {} currencies", config.sectors.len(), config.currencies.len());
                config
            }
            Err(e) => {
                log::warn!("invalid page config, using defaults: {e}");
                Self::default()
            }
        }
    }
}

fn embedded_config() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
