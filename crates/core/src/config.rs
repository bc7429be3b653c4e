//! Configuration for the projector.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::currency::CurrencyStyle;
use crate::error::Error;
use crate::result::Result;
use crate::tier::TierList;

/// Where the contact button leads unless configured otherwise.
pub const DEFAULT_CONTACT_URL: &str =
    "https://www.opentable.co.uk/restaurant-solutions/products/reservation-management/#form";

/// Configuration for the projector widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectorConfig {
    /// Tier multipliers, in display order.
    #[serde(default = "default_tiers")]
    pub tiers: Vec<u32>,

    /// Months in the annual projection.
    #[serde(default = "default_months_per_year")]
    pub months_per_year: u32,

    /// Delay between starting a slot transition and committing its text.
    #[serde(default = "default_commit_delay_ms")]
    pub commit_delay_ms: u64,

    /// Element id of the average spend input.
    #[serde(default = "default_input_id")]
    pub input_id: String,

    /// Address opened by the contact button.
    #[serde(default = "default_contact_url")]
    pub contact_url: String,

    #[serde(default)]
    pub currency: CurrencyStyle,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            months_per_year: default_months_per_year(),
            commit_delay_ms: default_commit_delay_ms(),
            input_id: default_input_id(),
            contact_url: default_contact_url(),
            currency: CurrencyStyle::default(),
        }
    }
}

fn default_tiers() -> Vec<u32> {
    vec![100, 200, 300]
}

const fn default_months_per_year() -> u32 {
    12
}

const fn default_commit_delay_ms() -> u64 {
    150
}

fn default_input_id() -> String {
    "averageSpend".to_string()
}

fn default_contact_url() -> String {
    DEFAULT_CONTACT_URL.to_string()
}

impl ProjectorConfig {
    /// Parse a configuration from TOML text and validate it.
    ///
    /// Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::ConfigParseFailed` for malformed TOML and
    /// `Error::InvalidConfig` if validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::config_parse_failed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::invalid_config(e.to_string()))
    }

    /// Check the configuration for values the projector cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.tier_list()?;

        if self.months_per_year == 0 {
            return Err(Error::invalid_config("months_per_year must be positive"));
        }

        if self.input_id.trim().is_empty() {
            return Err(Error::invalid_config("input_id must not be empty"));
        }

        self.contact_url()?;

        Ok(())
    }

    /// Parsed contact address.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the address is not an absolute
    /// http(s) URL.
    pub fn contact_url(&self) -> Result<Url> {
        let url = Url::parse(&self.contact_url).map_err(|e| {
            Error::invalid_config(format!("contact_url '{}': {e}", self.contact_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_config(format!(
                "contact_url must be http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(url)
    }

    /// Validated tier list.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the tiers are empty, zero or repeated.
    pub fn tier_list(&self) -> Result<TierList> {
        TierList::new(&self.tiers)
    }

    #[must_use]
    pub const fn commit_delay(&self) -> Duration {
        Duration::from_millis(self.commit_delay_ms)
    }

    /// Set the tier multipliers.
    #[must_use]
    pub fn with_tiers(mut self, tiers: impl Into<Vec<u32>>) -> Self {
        self.tiers = tiers.into();
        self
    }

    /// Set the commit delay.
    #[must_use]
    pub fn with_commit_delay(mut self, delay: Duration) -> Self {
        self.commit_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the contact address.
    #[must_use]
    pub fn with_contact_url(mut self, url: impl Into<String>) -> Self {
        self.contact_url = url.into();
        self
    }

    /// Set the input element id.
    #[must_use]
    pub fn with_input_id(mut self, id: impl Into<String>) -> Self {
        self.input_id = id.into();
        self
    }
}
