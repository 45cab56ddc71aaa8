//! Best-price reduction: collapse raw multi-bookmaker odds into the single
//! best price per outcome, with the set of bookmakers offering it.
//!
//! Processing is bookmaker-major with two passes per bookmaker: one pass
//! claims strict improvements, a second records ties against the running
//! best. Ties set by a bookmaker's own improvement pass are honored without
//! duplication, and ties against earlier bookmakers persist because the
//! running best carries across bookmakers. Do not refactor into an
//! outcome-major sweep; it changes which bookmakers are recorded as tying
//! contributors when one bookmaker introduces duplicate best prices.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::types::{Event, OutcomeQuote, PriceSummary};

/// The one per-event fatal condition: no usable outcome set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// The event listed no bookmakers at all
    NoBookmakers,
    /// The first bookmaker, which defines the outcome set, has no priced market
    EmptyFirstMarket { bookmaker: String },
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::NoBookmakers => write!(f, "event has no bookmakers"),
            ReduceError::EmptyFirstMarket { bookmaker } => {
                write!(f, "first bookmaker {:?} has no priced outcomes", bookmaker)
            }
        }
    }
}

impl std::error::Error for ReduceError {}

/// Reduce one event to its best-price summary.
///
/// The outcome set is taken from the first bookmaker's first market; other
/// bookmakers may list fewer outcomes (trailing outcomes missing) and are
/// consulted only for the outcomes they actually quote.
pub fn reduce(event: &Event) -> Result<PriceSummary, ReduceError> {
    let first = event.bookmakers.first().ok_or(ReduceError::NoBookmakers)?;
    let outcomes: Vec<String> = first
        .markets
        .first()
        .map(|market| market.outcomes.iter().map(|o| o.name.clone()).collect())
        .unwrap_or_default();
    if outcomes.is_empty() {
        return Err(ReduceError::EmptyFirstMarket {
            bookmaker: first.title.clone(),
        });
    }

    let name = event.display_name();
    debug!(
        "[REDUCE] {} | {} outcomes, {} bookmakers",
        name,
        outcomes.len(),
        event.bookmakers.len()
    );

    let mut quotes: FxHashMap<String, OutcomeQuote> = outcomes
        .iter()
        .map(|outcome| (outcome.clone(), OutcomeQuote::default()))
        .collect();

    for bookmaker in &event.bookmakers {
        // A bookmaker with no markets contributes nothing.
        let Some(market) = bookmaker.markets.first() else {
            continue;
        };

        // Pass 1: strict improvements claim the outcome outright.
        for offer in market.outcomes.iter().take(outcomes.len()) {
            // Outcome names this event doesn't track are skipped, like a
            // missing index.
            let Some(quote) = quotes.get_mut(&offer.name) else {
                continue;
            };
            if quote.price.map_or(true, |best| offer.price > best) {
                quote.price = Some(offer.price);
                quote.bookies = vec![bookmaker.title.clone()];
            }
        }

        // Pass 2: exact ties join the set, including a best this bookmaker
        // just established.
        for offer in market.outcomes.iter().take(outcomes.len()) {
            let Some(quote) = quotes.get_mut(&offer.name) else {
                continue;
            };
            if quote.price == Some(offer.price)
                && !quote.bookies.iter().any(|b| b == &bookmaker.title)
            {
                quote.bookies.push(bookmaker.title.clone());
            }
        }
    }

    Ok(PriceSummary {
        name,
        outcomes,
        quotes,
    })
}
