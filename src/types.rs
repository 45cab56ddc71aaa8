//! Core type definitions for the arbitrage scanner.
//!
//! This module provides the provider-side input model, the per-event
//! best-price summary, and the arbitrage result emitted in the report.

use chrono::{DateTime, TimeZone, Utc};
use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

// === Provider Input Model ===

/// A single sports event with per-bookmaker odds, as returned by the
/// provider's /v4/sports/{sport}/odds endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sport_key: Option<String>,
    pub sport_title: String,
    /// Start time; iso or unix depending on the requested date format
    #[serde(default, deserialize_with = "de_flexible_time")]
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: String,
    pub away_team: String,
    pub bookmakers: Vec<BookmakerOdds>,
}

impl Event {
    /// Display name used throughout logs and the report.
    pub fn display_name(&self) -> String {
        format!("({}) {} - {}", self.sport_title, self.home_team, self.away_team)
    }
}

/// One bookmaker's quotes for an event. Only the first market is consulted.
#[derive(Debug, Clone, Deserialize)]
pub struct BookmakerOdds {
    #[serde(default)]
    pub key: Option<String>,
    pub title: String,
    #[serde(default, deserialize_with = "de_flexible_time")]
    pub last_update: Option<DateTime<Utc>>,
    pub markets: Vec<MarketOdds>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarketOdds {
    #[serde(default)]
    pub key: Option<String>,
    pub outcomes: Vec<OutcomeOdds>,
}

/// A quoted price for one outcome. Decimal format: payout multiple per unit
/// staked, so any real quote is > 1.
#[derive(Debug, Clone, Deserialize)]
pub struct OutcomeOdds {
    pub name: String,
    pub price: f64,
}

/// Accept both iso strings and unix-seconds numbers; anything else is
/// treated as absent rather than failing the whole payload.
fn de_flexible_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        serde_json::Value::Number(n) => n
            .as_i64()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        _ => None,
    }))
}

// === Best-Price Summary ===

/// Best quote for a single outcome across all bookmakers.
///
/// `price: None` is the explicit no-quote sentinel: the outcome never
/// contributes to the reciprocal sum or the stake split.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutcomeQuote {
    /// Bookmakers offering the best price (ties included, no duplicates)
    pub bookies: Vec<String>,
    /// Highest price seen for this outcome, if any bookmaker quoted it
    pub price: Option<f64>,
}

/// Per-event reduction of raw multi-bookmaker odds: for every outcome, the
/// single best price and the set of bookmakers offering it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSummary {
    /// Display name: "(sport) home - away"
    pub name: String,
    /// Outcome names in order, taken from the first bookmaker's first market
    pub outcomes: Vec<String>,
    /// Best quote per outcome name
    pub quotes: FxHashMap<String, OutcomeQuote>,
}

impl PriceSummary {
    pub fn quote(&self, outcome: &str) -> Option<&OutcomeQuote> {
        self.quotes.get(outcome)
    }

    /// Best price for an outcome, if any bookmaker quoted it.
    pub fn best_price(&self, outcome: &str) -> Option<f64> {
        self.quotes.get(outcome).and_then(|q| q.price)
    }
}

// === Arbitrage Result ===

/// Verdict for one event, extending its price summary. The strategy fields
/// are populated only when the arbitrage flag is true.
#[derive(Debug, Clone, PartialEq)]
pub struct ArbitrageResult {
    pub summary: PriceSummary,
    /// True iff the reciprocal best prices sum to strictly less than 1
    pub arbitrage: bool,
    /// Negative vigorish: 1 - sum of implied probabilities
    pub nvig: Option<f64>,
    /// Guaranteed profit for the configured stake
    pub profit: Option<f64>,
    /// Stake per priced outcome, in outcome order
    pub strat: Option<Vec<f64>>,
}

impl Serialize for ArbitrageResult {
    /// Emits the report record shape: one entry per outcome name, then
    /// `name`, `arbitrage`, and - under arbitrage - `nvig`, `profit`,
    /// `strat`, preserving outcome order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut len = self.summary.outcomes.len() + 2;
        if self.arbitrage {
            len += 3;
        }
        let mut map = serializer.serialize_map(Some(len))?;
        for outcome in &self.summary.outcomes {
            if let Some(quote) = self.summary.quotes.get(outcome) {
                map.serialize_entry(outcome, quote)?;
            }
        }
        map.serialize_entry("name", &self.summary.name)?;
        map.serialize_entry("arbitrage", &self.arbitrage)?;
        if self.arbitrage {
            map.serialize_entry("nvig", &self.nvig)?;
            map.serialize_entry("profit", &self.profit)?;
            map.serialize_entry("strat", &self.strat)?;
        }
        map.end()
    }
}

/// Round to 2 decimal places (money and stake amounts).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// =============================================================================
// TESTS
// =============================================================================
