//! Fund-level swap exposure aggregation.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use super::join::{join_swaps, JoinedSwap};
use super::summary::{
    CounterpartyExposure, ExposureSummary, FundSummary, NoSwapSummary, NotionalRatio,
    NOT_APPLICABLE,
};
use crate::error::{ExposureError, ExposureResult};
use crate::types::{CounterpartyLink, FundHolding, FundInfo, SwapDetail};

/// Summarizes the swap exposure of the fund filed under `accession_number`.
///
/// Holdings are scoped to the filing; `total_holdings` counts all of them,
/// while notional, gains and the counterparty breakdown only reflect
/// holdings in the `"SWP"` category. Missing numeric values count as zero.
///
/// # Errors
///
/// Returns [`ExposureError::FundNotFound`] if `fund_info` has no row for the
/// accession number, and [`ExposureError::Overflow`] if a sum leaves the
/// decimal range. A fund without swaps is not an error; it yields
/// [`FundSummary::NoSwaps`].
///
/// # Example
///
/// ```rust
/// use swapview_core::prelude::*;
///
/// let holdings = vec![FundHolding::swap("0001", "H1"), FundHolding::new("0001", "H2")];
/// let funds = vec![FundInfo::new("0001", "2x Long Fund", dec!(1_000))];
/// let swaps = vec![SwapDetail::new("H1").with_notional(dec!(2_000))];
///
/// let summary = summarize("0001", &holdings, &funds, &swaps, &[]).unwrap();
/// let exposure = summary.as_exposure().unwrap();
/// assert_eq!(exposure.total_holdings, 2);
/// assert_eq!(exposure.notional_exposure_ratio.percent(), Some(dec!(200)));
/// ```
pub fn summarize(
    accession_number: &str,
    holdings: &[FundHolding],
    fund_info: &[FundInfo],
    swaps: &[SwapDetail],
    counterparties: &[CounterpartyLink],
) -> ExposureResult<FundSummary> {
    let fund_holdings: Vec<&FundHolding> = holdings
        .iter()
        .filter(|h| h.belongs_to(accession_number))
        .collect();

    let info = find_fund(accession_number, fund_info)?;

    let swap_holdings: Vec<&FundHolding> = fund_holdings
        .iter()
        .copied()
        .filter(|h| h.is_swap())
        .collect();

    debug!(
        accession_number,
        holdings = fund_holdings.len(),
        swaps = swap_holdings.len(),
        "Scoped fund holdings"
    );

    if swap_holdings.is_empty() {
        return Ok(FundSummary::NoSwaps(NoSwapSummary::new(&info.series_name)));
    }

    let joined = join_swaps(&swap_holdings, swaps, counterparties);

    let mut total_notional = Decimal::ZERO;
    let mut unrealized_gains = Decimal::ZERO;
    let mut book = CounterpartyBook::default();
    let mut unmatched = 0usize;

    for row in &joined {
        if row.swap.is_none() {
            unmatched += 1;
        }
        total_notional = total_notional
            .checked_add(notional_of(row))
            .ok_or_else(|| ExposureError::overflow("total_notional_exposure"))?;
        let unrealized = row
            .swap
            .and_then(|s| s.unrealized_appreciation)
            .unwrap_or(Decimal::ZERO);
        unrealized_gains = unrealized_gains
            .checked_add(unrealized)
            .ok_or_else(|| ExposureError::overflow("unrealized_gains"))?;
        book.record(row)?;
    }

    if unmatched > 0 {
        debug!(
            accession_number,
            unmatched, "Swap holdings without contract detail"
        );
    }

    let nav = info.net_assets;
    Ok(FundSummary::Exposure(ExposureSummary {
        fund_name: info.series_name.clone(),
        total_holdings: fund_holdings.len(),
        total_notional_exposure: total_notional,
        nav,
        notional_exposure_ratio: NotionalRatio::compute(
            total_notional,
            info.usable_net_assets(),
        ),
        unrealized_gains,
        counterparties: book.into_exposures(),
    }))
}

/// Looks up the fund info row for a filing, taking the first on duplicates.
fn find_fund<'a>(accession_number: &str, fund_info: &'a [FundInfo]) -> ExposureResult<&'a FundInfo> {
    let mut matches = fund_info
        .iter()
        .filter(|info| info.accession_number == accession_number);

    let first = matches
        .next()
        .ok_or_else(|| ExposureError::fund_not_found(accession_number))?;

    let extra = matches.count();
    if extra > 0 {
        warn!(
            accession_number,
            duplicates = extra,
            "Multiple fund info rows; using the first"
        );
    }
    Ok(first)
}

fn notional_of(row: &JoinedSwap<'_>) -> Decimal {
    row.swap
        .and_then(|s| s.notional_amount)
        .unwrap_or(Decimal::ZERO)
}

/// Renders a floating leg as `"<index> (<spread> bp)"`.
///
/// Missing parts are written as `N/A`.
#[must_use]
pub fn format_rate(index: Option<&str>, spread_bp: Option<Decimal>) -> String {
    let index = index.unwrap_or(NOT_APPLICABLE);
    match spread_bp {
        Some(spread) => format!("{} ({} bp)", index, spread.normalize()),
        None => format!("{} ({} bp)", index, NOT_APPLICABLE),
    }
}

/// Ordered per-counterparty accumulator.
///
/// Keys map to slots in `entries`, so grouping is a single pass and the
/// output keeps first-seen order.
#[derive(Debug, Default)]
struct CounterpartyBook<'a> {
    slots: HashMap<&'a str, usize>,
    entries: Vec<CounterpartyExposure>,
}

impl<'a> CounterpartyBook<'a> {
    fn record(&mut self, row: &JoinedSwap<'a>) -> ExposureResult<()> {
        let notional = notional_of(row);
        match self.slots.get(row.counterparty) {
            Some(&slot) => {
                let entry = &mut self.entries[slot];
                entry.notional = entry
                    .notional
                    .checked_add(notional)
                    .ok_or_else(|| ExposureError::overflow("counterparty notional"))?;
            }
            None => {
                self.slots.insert(row.counterparty, self.entries.len());
                self.entries.push(Self::open(row, notional));
            }
        }
        Ok(())
    }

    /// Starts a group from its first row; terms are taken from this row only.
    fn open(row: &JoinedSwap<'a>, notional: Decimal) -> CounterpartyExposure {
        let termination = row
            .swap
            .and_then(|s| s.termination_date.clone())
            .unwrap_or_else(|| NOT_APPLICABLE.to_string());
        let rate = format_rate(
            row.swap.and_then(|s| s.floating_rate_index_payment.as_deref()),
            row.swap.and_then(|s| s.floating_rate_spread_payment),
        );
        CounterpartyExposure {
            name: row.counterparty.to_string(),
            notional,
            termination,
            rate,
        }
    }

    fn into_exposures(self) -> Vec<CounterpartyExposure> {
        self.entries
    }
}
