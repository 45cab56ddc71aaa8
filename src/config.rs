//! Scanner configuration and odds-provider parameter definitions.
//!
//! All runtime knobs live in one explicit [`Config`] built from environment
//! variables, with enumerated types for the provider's region, market, and
//! format parameters.

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

/// The Odds API base URL
pub const ODDS_API_BASE: &str = "https://api.the-odds-api.com";

/// HTTP request timeout for the odds provider (seconds)
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default total stake per event when STAKE is unset
pub const DEFAULT_STAKE: f64 = 100.0;

/// Default path for the arbitrage report file
pub const DEFAULT_REPORT_PATH: &str = "arbitrage.json";

/// A configuration value outside its enumerated set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} {:?} (expected {})",
            self.field, self.value, self.expected
        )
    }
}

impl std::error::Error for InvalidValue {}

/// Bookmaker region the provider should quote from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Uk,
    Us,
    Eu,
    Au,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Uk => write!(f, "uk"),
            Region::Us => write!(f, "us"),
            Region::Eu => write!(f, "eu"),
            Region::Au => write!(f, "au"),
        }
    }
}

impl FromStr for Region {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uk" => Ok(Region::Uk),
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "au" => Ok(Region::Au),
            _ => Err(InvalidValue {
                field: "region",
                value: s.to_string(),
                expected: "uk | us | eu | au",
            }),
        }
    }
}

/// Market kind to request per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketKey {
    /// Head-to-head / moneyline
    H2h,
    /// Point spread
    Spreads,
    /// Totals / over-under
    Totals,
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketKey::H2h => write!(f, "h2h"),
            MarketKey::Spreads => write!(f, "spreads"),
            MarketKey::Totals => write!(f, "totals"),
        }
    }
}

impl FromStr for MarketKey {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h2h" => Ok(MarketKey::H2h),
            "spreads" => Ok(MarketKey::Spreads),
            "totals" => Ok(MarketKey::Totals),
            _ => Err(InvalidValue {
                field: "market",
                value: s.to_string(),
                expected: "h2h | spreads | totals",
            }),
        }
    }
}

/// Odds quotation format. The arbitrage arithmetic assumes decimal prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OddsFormat {
    Decimal,
    American,
}

impl fmt::Display for OddsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddsFormat::Decimal => write!(f, "decimal"),
            OddsFormat::American => write!(f, "american"),
        }
    }
}

impl FromStr for OddsFormat {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(OddsFormat::Decimal),
            "american" => Ok(OddsFormat::American),
            _ => Err(InvalidValue {
                field: "odds format",
                value: s.to_string(),
                expected: "decimal | american",
            }),
        }
    }
}

/// Timestamp format in provider responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Iso,
    Unix,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Iso => write!(f, "iso"),
            DateFormat::Unix => write!(f, "unix"),
        }
    }
}

impl FromStr for DateFormat {
    type Err = InvalidValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(DateFormat::Iso),
            "unix" => Ok(DateFormat::Unix),
            _ => Err(InvalidValue {
                field: "date format",
                value: s.to_string(),
                expected: "iso | unix",
            }),
        }
    }
}

/// Comma-join values for the provider's multi-valued query parameters.
pub fn join_values<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_list<T: FromStr>(raw: &str) -> Result<Vec<T>, T::Err> {
    raw.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim().parse())
        .collect()
}

/// Scanner configuration, passed explicitly into the fetch and scan stages.
#[derive(Debug, Clone)]
pub struct Config {
    /// The Odds API key
    pub api_key: String,

    /// Sport key from the provider's /sports endpoint, or "upcoming" for the
    /// next events across all sports
    pub sport: String,

    /// Bookmaker regions to quote from
    pub regions: Vec<Region>,

    /// Market kinds to request
    pub markets: Vec<MarketKey>,

    /// Odds quotation format
    pub odds_format: OddsFormat,

    /// Timestamp format in provider responses
    pub date_format: DateFormat,

    /// Total stake per event used for the betting strategy
    pub stake: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ODDS_API_KEY").context("ODDS_API_KEY not set")?;

        let sport = std::env::var("SPORT").unwrap_or_else(|_| "upcoming".to_string());

        let regions = match std::env::var("REGIONS") {
            Ok(raw) => parse_list(&raw)?,
            Err(_) => vec![Region::Eu],
        };

        let markets = match std::env::var("MARKETS") {
            Ok(raw) => parse_list(&raw)?,
            Err(_) => vec![MarketKey::H2h],
        };

        let odds_format = match std::env::var("ODDS_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => OddsFormat::Decimal,
        };

        let date_format = match std::env::var("DATE_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => DateFormat::Iso,
        };

        let stake = std::env::var("STAKE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_STAKE);

        Ok(Self {
            api_key,
            sport,
            regions,
            markets,
            odds_format,
            date_format,
            stake,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_roundtrip() {
        for raw in ["uk", "us", "eu", "au"] {
            let region: Region = raw.parse().expect("valid region");
            assert_eq!(region.to_string(), raw);
        }
    }

    #[test]
    fn test_region_rejects_unknown() {
        let err = "mars".parse::<Region>().unwrap_err();
        assert_eq!(err.field, "region");
        assert_eq!(err.value, "mars");
    }

    #[test]
    fn test_market_key_roundtrip() {
        for raw in ["h2h", "spreads", "totals"] {
            let market: MarketKey = raw.parse().expect("valid market");
            assert_eq!(market.to_string(), raw);
        }
        assert!("parlay".parse::<MarketKey>().is_err());
    }

    #[test]
    fn test_formats_parse_case_insensitive() {
        assert_eq!("DECIMAL".parse::<OddsFormat>(), Ok(OddsFormat::Decimal));
        assert_eq!("American".parse::<OddsFormat>(), Ok(OddsFormat::American));
        assert_eq!("ISO".parse::<DateFormat>(), Ok(DateFormat::Iso));
        assert!("julian".parse::<DateFormat>().is_err());
    }

    #[test]
    fn test_join_values_comma_delimits() {
        assert_eq!(join_values(&[Region::Uk, Region::Eu, Region::Au]), "uk,eu,au");
        assert_eq!(join_values(&[MarketKey::H2h]), "h2h");
        assert_eq!(join_values::<Region>(&[]), "");
    }

    #[test]
    fn test_parse_list_trims_and_skips_empty() {
        let regions: Vec<Region> = parse_list("uk, eu,,au").expect("valid list");
        assert_eq!(regions, vec![Region::Uk, Region::Eu, Region::Au]);

        let err = parse_list::<Region>("uk,atlantis").unwrap_err();
        assert_eq!(err.value, "atlantis");
    }
}
