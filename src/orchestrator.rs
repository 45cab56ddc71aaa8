//! Scan pipeline: reduce each event to best prices, evaluate for arbitrage,
//! and keep only the qualifying events.

use tracing::{info, warn};

use crate::evaluator::evaluate;
use crate::reducer::reduce;
use crate::types::{ArbitrageResult, Event};

/// Run the reduce + evaluate pipeline over a batch of events.
///
/// Returns `Some` with the qualifying results in input order, or `None`
/// when the batch was checked and nothing qualified. The `None` is the
/// caller-visible "checked, found nothing" indicator; a failure to check
/// at all surfaces earlier, as a fetch error.
///
/// Events that cannot be reduced (no bookmakers, empty first market) are
/// logged and skipped; one malformed event never aborts the batch.
pub fn find_arbitrage(events: &[Event], stake: f64) -> Option<Vec<ArbitrageResult>> {
    let mut found = Vec::new();

    for event in events {
        let summary = match reduce(event) {
            Ok(summary) => summary,
            Err(e) => {
                warn!("[SCAN] Skipping {}: {}", event.display_name(), e);
                continue;
            }
        };

        let result = evaluate(summary, stake);
        if result.arbitrage {
            info!(
                "[SCAN] 💰 Arbitrage: {} | nvig {:.4}",
                result.summary.name,
                result.nvig.unwrap_or(0.0)
            );
            found.push(result);
        }
    }

    info!(
        "[SCAN] Scanned {} events, {} arbitrage opportunities",
        events.len(),
        found.len()
    );

    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookmakerOdds, MarketOdds, OutcomeOdds};

    fn bookmaker(title: &str, prices: &[(&str, f64)]) -> BookmakerOdds {
        BookmakerOdds {
            key: None,
            title: title.to_string(),
            last_update: None,
            markets: vec![MarketOdds {
                key: Some("h2h".to_string()),
                outcomes: prices
                    .iter()
                    .map(|(name, price)| OutcomeOdds {
                        name: name.to_string(),
                        price: *price,
                    })
                    .collect(),
            }],
        }
    }

    fn event(home: &str, away: &str, bookmakers: Vec<BookmakerOdds>) -> Event {
        Event {
            id: None,
            sport_key: None,
            sport_title: "Soccer".to_string(),
            commence_time: None,
            home_team: home.to_string(),
            away_team: away.to_string(),
            bookmakers,
        }
    }

    fn arb_event() -> Event {
        event(
            "Alpha",
            "Beta",
            vec![
                bookmaker("A", &[("Win", 2.1), ("Lose", 2.1)]),
                bookmaker("B", &[("Win", 1.9), ("Lose", 2.3)]),
            ],
        )
    }

    fn efficient_event() -> Event {
        event(
            "Gamma",
            "Delta",
            vec![bookmaker("A", &[("Win", 1.5), ("Lose", 2.0)])],
        )
    }

    #[test]
    fn test_empty_batch_is_none_found() {
        assert_eq!(find_arbitrage(&[], 100.0), None);
    }

    #[test]
    fn test_no_qualifying_event_is_none_not_empty_vec() {
        let result = find_arbitrage(&[efficient_event()], 100.0);
        assert_eq!(result, None);
    }

    #[test]
    fn test_only_qualifying_events_are_kept() {
        let events = vec![efficient_event(), arb_event(), efficient_event()];

        let results = find_arbitrage(&events, 100.0).expect("one arb expected");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].summary.name, "(Soccer) Alpha - Beta");
        assert!(results[0].arbitrage);
    }

    #[test]
    fn test_malformed_event_skipped_without_aborting_batch() {
        let events = vec![event("Broken", "Event", vec![]), arb_event()];

        let results = find_arbitrage(&events, 100.0).expect("arb after skip");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].summary.name, "(Soccer) Alpha - Beta");
    }

    #[test]
    fn test_scan_is_idempotent() {
        let events = vec![arb_event(), efficient_event()];
        let first = find_arbitrage(&events, 100.0);
        let second = find_arbitrage(&events, 100.0);
        assert_eq!(first, second);
    }
}
