use std::ops::Range;
use std::path::PathBuf;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://www.oscars.org/oscars/ceremonies";
pub const DEFAULT_OUTPUT: &str = "academy_awards.json";
pub const FIRST_CEREMONY: i64 = 1929;
/// Exclusive.
pub const END_YEAR: i64 = 2023;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub start_year: i32,
    pub end_year: i32,
    pub output: PathBuf,
}

impl Settings {
    /// Defaults, overridden by `OSCARS_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(Environment::with_prefix("OSCARS"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("start_year", FIRST_CEREMONY)?
            .set_default("end_year", END_YEAR)?
            .set_default("output", DEFAULT_OUTPUT)
    }

    /// Reject a year range that runs backwards. An empty range is allowed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_year > self.end_year {
            return Err(ConfigError::Message(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }
        Ok(())
    }

    /// Half-open range of ceremony years to scrape.
    pub fn years(&self) -> Range<i32> {
        self.start_year..self.end_year
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_ceremony() {
        let s: Settings = Settings::builder()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.base_url, DEFAULT_BASE_URL);
        assert_eq!(s.years(), 1929..2023);
        assert_eq!(s.years().len(), 94);
        assert_eq!(s.output, PathBuf::from("academy_awards.json"));
    }

    fn with_years(start_year: i32, end_year: i32) -> Settings {
        Settings {
            base_url: DEFAULT_BASE_URL.into(),
            start_year,
            end_year,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }

    #[test]
    fn backwards_range_rejected() {
        let err = with_years(2000, 1999).validate().unwrap_err();
        assert_eq!(err.to_string(), "start year 2000 is after end year 1999");
    }

    #[test]
    fn empty_and_forward_ranges_accepted() {
        assert!(with_years(1950, 1950).validate().is_ok());
        assert!(with_years(1929, 2023).validate().is_ok());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let s: Settings = Settings::builder()
            .unwrap()
            .set_override("start_year", 1990_i64)
            .unwrap()
            .set_override("end_year", "1992")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(s.years(), 1990..1992);
    }
}
