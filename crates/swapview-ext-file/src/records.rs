//! Row schemas for the filing tables.
//!
//! Headers follow the upper-case column names of the published filing
//! extracts. Columns not listed here are ignored; empty cells load as
//! absent values.

use rust_decimal::Decimal;
use serde::Deserialize;

use swapview_core::{CounterpartyLink, FundHolding, FundInfo, SwapDetail};

/// Converts a parsed float into a decimal.
///
/// NaN and infinities load as absent. A finite value outside the decimal
/// range is rejected rather than dropped.
fn to_decimal(value: Option<f64>, column: &str) -> Result<Option<Decimal>, String> {
    match value {
        Some(v) if v.is_finite() => Decimal::try_from(v)
            .map(Some)
            .map_err(|_| format!("{column} value {v} is outside the supported decimal range")),
        _ => Ok(None),
    }
}

/// Drops cells that only contain whitespace.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Holding table record.
#[derive(Debug, Deserialize)]
pub(crate) struct HoldingRecord {
    #[serde(rename = "ACCESSION_NUMBER")]
    accession_number: String,
    #[serde(rename = "HOLDING_ID")]
    holding_id: String,
    #[serde(rename = "DERIVATIVE_CAT", default)]
    derivative_category: Option<String>,
}

impl From<HoldingRecord> for FundHolding {
    fn from(record: HoldingRecord) -> Self {
        Self {
            accession_number: record.accession_number,
            holding_id: record.holding_id,
            derivative_category: non_blank(record.derivative_category),
        }
    }
}

/// Fund info table record.
#[derive(Debug, Deserialize)]
pub(crate) struct FundInfoRecord {
    #[serde(rename = "ACCESSION_NUMBER")]
    accession_number: String,
    #[serde(rename = "SERIES_NAME", default)]
    series_name: Option<String>,
    #[serde(rename = "NET_ASSETS", default)]
    net_assets: Option<f64>,
}

impl TryFrom<FundInfoRecord> for FundInfo {
    type Error = String;

    fn try_from(record: FundInfoRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            accession_number: record.accession_number,
            series_name: record.series_name.unwrap_or_default(),
            net_assets: to_decimal(record.net_assets, "NET_ASSETS")?,
        })
    }
}

/// Swap table record.
#[derive(Debug, Deserialize)]
pub(crate) struct SwapRecord {
    #[serde(rename = "HOLDING_ID")]
    holding_id: String,
    #[serde(rename = "NOTIONAL_AMOUNT", default)]
    notional_amount: Option<f64>,
    #[serde(rename = "UNREALIZED_APPRECIATION", default)]
    unrealized_appreciation: Option<f64>,
    #[serde(rename = "TERMINATION_DATE", default)]
    termination_date: Option<String>,
    #[serde(rename = "FLOATING_RATE_INDEX_PAYMENT", default)]
    floating_rate_index_payment: Option<String>,
    #[serde(rename = "FLOATING_RATE_SPREAD_PAYMENT", default)]
    floating_rate_spread_payment: Option<f64>,
}

impl TryFrom<SwapRecord> for SwapDetail {
    type Error = String;

    fn try_from(record: SwapRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            holding_id: record.holding_id,
            notional_amount: to_decimal(record.notional_amount, "NOTIONAL_AMOUNT")?,
            unrealized_appreciation: to_decimal(
                record.unrealized_appreciation,
                "UNREALIZED_APPRECIATION",
            )?,
            termination_date: non_blank(record.termination_date),
            floating_rate_index_payment: non_blank(record.floating_rate_index_payment),
            floating_rate_spread_payment: to_decimal(
                record.floating_rate_spread_payment,
                "FLOATING_RATE_SPREAD_PAYMENT",
            )?,
        })
    }
}

/// Counterparty table record.
#[derive(Debug, Deserialize)]
pub(crate) struct CounterpartyRecord {
    #[serde(rename = "HOLDING_ID")]
    holding_id: String,
    #[serde(rename = "DERIVATIVE_COUNTERPARTY_NAME", default)]
    counterparty_name: Option<String>,
}

impl From<CounterpartyRecord> for CounterpartyLink {
    fn from(record: CounterpartyRecord) -> Self {
        // Padding is kept; the aggregator trims when grouping
        match non_blank(record.counterparty_name) {
            Some(name) => Self::new(record.holding_id, name),
            None => Self::unnamed(record.holding_id),
        }
    }
}
