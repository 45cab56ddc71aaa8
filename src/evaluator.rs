//! Arbitrage detection and stake allocation over a best-price summary.
//!
//! Arbitrage exists iff the reciprocal best prices across all outcomes sum
//! to strictly less than 1 (combined implied probability under 100%). The
//! stake split holds the payout constant: whichever outcome occurs, the
//! winning leg returns the same payout.

use crate::types::{round2, ArbitrageResult, PriceSummary};

/// Evaluate a price summary for arbitrage at the given total stake.
///
/// Outcomes with no quote contribute nothing to the reciprocal sum and get
/// no stake entry; they are genuinely absent from `strat`, not zero-filled.
/// Never fails: malformed or missing prices degrade to "no contribution".
pub fn evaluate(summary: PriceSummary, stake: f64) -> ArbitrageResult {
    let mut s = 0.0;
    for outcome in &summary.outcomes {
        if let Some(price) = summary.best_price(outcome) {
            s += 1.0 / price;
        }
    }

    if s >= 1.0 {
        return ArbitrageResult {
            summary,
            arbitrage: false,
            nvig: None,
            profit: None,
            strat: None,
        };
    }

    let nvig = 1.0 - s;
    let payout = round2(stake * (1.0 + nvig));
    let strat: Vec<f64> = summary
        .outcomes
        .iter()
        .filter_map(|outcome| summary.best_price(outcome))
        .map(|price| round2(payout / price))
        .collect();

    ArbitrageResult {
        summary,
        arbitrage: true,
        nvig: Some(nvig),
        profit: Some(payout - stake),
        strat: Some(strat),
    }
}
