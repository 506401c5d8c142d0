pub mod sink;

use crate::domain::model::AvailabilityQuery;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// Read the availability state embedded in the rendered booking page.
    Page,
    /// Query the month-summary JSON endpoint, one request per month.
    Api,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "shift-scout")]
#[command(about = "Checks a restaurant booking platform for open reservation shifts")]
pub struct CheckConfig {
    #[arg(long, env = "SCOUT_RESTAURANT_ID", default_value = "362852")]
    pub restaurant_id: String,

    #[arg(long, env = "SCOUT_PAX", default_value_t = 2)]
    pub pax: u32,

    #[arg(long, env = "SCOUT_MONTHS", default_value_t = 3)]
    pub months: u32,

    #[arg(long, value_enum, env = "SCOUT_SOURCE", default_value = "api")]
    pub source: SourceKind,

    #[arg(long, env = "SCOUT_PAGE_URL", default_value = "https://bookings.zenchef.com")]
    pub page_url: String,

    #[arg(
        long,
        env = "SCOUT_API_URL",
        default_value = "https://bookings.zenchef.com/api/v1"
    )]
    pub api_url: String,

    #[arg(long, env = "SCOUT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    #[arg(long, env = "SCOUT_DEBUG", help = "Verbose logging plus a debug payload in the output")]
    pub debug: bool,
}

impl CheckConfig {
    pub fn query(&self) -> AvailabilityQuery {
        AvailabilityQuery {
            restaurant_id: self.restaurant_id.clone(),
            pax: self.pax,
            months: self.months,
        }
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("restaurant_id", &self.restaurant_id)?;
        validate_range("pax", self.pax, 1, 100)?;
        validate_range("months", self.months, 1, 12)?;
        validate_range("timeout_secs", self.timeout_secs, 1, 300)?;
        validate_url("page_url", &self.page_url)?;
        validate_url("api_url", &self.api_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CheckConfig {
        CheckConfig::parse_from(["shift-scout"])
    }

    #[test]
    fn test_defaults() {
        let config = base_config();
        assert_eq!(config.restaurant_id, "362852");
        assert_eq!(config.pax, 2);
        assert_eq!(config.months, 3);
        assert_eq!(config.source, SourceKind::Api);
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let mut config = base_config();
        config.pax = 0;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.months = 13;
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.api_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_kind_from_args() {
        let config = CheckConfig::parse_from(["shift-scout", "--source", "page", "--pax", "4"]);
        assert_eq!(config.source, SourceKind::Page);
        assert_eq!(config.pax, 4);
    }
}
