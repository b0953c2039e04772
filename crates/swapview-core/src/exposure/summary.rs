//! Fund exposure summary types.
//!
//! The JSON shape of these types is the report format consumed by
//! downstream tools, so field names are fixed.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ExposureResult;

/// Message returned for funds without swap holdings.
pub const NO_SWAPS_MESSAGE: &str = "No swaps found for this fund.";

/// Text written in place of a ratio that cannot be computed.
pub const NOT_APPLICABLE: &str = "N/A";

/// Result of summarizing one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FundSummary {
    /// The fund holds swaps; full aggregates are available.
    Exposure(ExposureSummary),

    /// The fund holds no swaps; only the name is reported.
    NoSwaps(NoSwapSummary),
}

impl FundSummary {
    /// Returns the fund's series name.
    #[must_use]
    pub fn fund_name(&self) -> &str {
        match self {
            Self::Exposure(summary) => &summary.fund_name,
            Self::NoSwaps(summary) => &summary.fund_name,
        }
    }

    /// Returns true if the summary carries swap aggregates.
    #[must_use]
    pub fn is_exposure(&self) -> bool {
        matches!(self, Self::Exposure(_))
    }

    /// Returns the full summary, if the fund holds swaps.
    #[must_use]
    pub fn as_exposure(&self) -> Option<&ExposureSummary> {
        match self {
            Self::Exposure(summary) => Some(summary),
            Self::NoSwaps(_) => None,
        }
    }

    /// Renders the summary as an indented JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> ExposureResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Minimal summary for a fund with no swap holdings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NoSwapSummary {
    /// Fund series name.
    pub fund_name: String,

    /// Human-readable explanation.
    pub message: String,
}

impl NoSwapSummary {
    /// Creates the summary with the standard message.
    #[must_use]
    pub fn new(fund_name: impl Into<String>) -> Self {
        Self {
            fund_name: fund_name.into(),
            message: NO_SWAPS_MESSAGE.to_string(),
        }
    }
}

/// Swap exposure aggregates for one fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Fund series name.
    pub fund_name: String,

    /// Number of holdings in the filing, across all categories.
    pub total_holdings: usize,

    /// Sum of swap notional amounts.
    pub total_notional_exposure: Decimal,

    /// Net asset value as reported (null when the filing leaves it blank).
    #[serde(rename = "NAV")]
    pub nav: Option<Decimal>,

    /// Total notional as a percentage of NAV.
    pub notional_exposure_ratio: NotionalRatio,

    /// Sum of unrealized appreciation across swaps.
    pub unrealized_gains: Decimal,

    /// Per-counterparty breakdown in first-seen order.
    pub counterparties: Vec<CounterpartyExposure>,
}

impl ExposureSummary {
    /// Returns the sum of the per-counterparty notionals.
    ///
    /// Equal to `total_notional_exposure`; `None` if the sum leaves the
    /// decimal range.
    #[must_use]
    pub fn counterparty_notional_total(&self) -> Option<Decimal> {
        self.counterparties
            .iter()
            .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.notional))
    }

    /// Returns the counterparty with the largest notional.
    ///
    /// Ties go to the counterparty seen first.
    #[must_use]
    pub fn largest_counterparty(&self) -> Option<&CounterpartyExposure> {
        self.counterparties
            .iter()
            .fold(None, |best: Option<&CounterpartyExposure>, c| match best {
                Some(b) if b.notional >= c.notional => Some(b),
                _ => Some(c),
            })
    }

    /// Returns the number of distinct counterparties.
    #[must_use]
    pub fn counterparty_count(&self) -> usize {
        self.counterparties.len()
    }
}

/// Exposure to a single counterparty.
///
/// `termination` and `rate` come from the first swap seen for the
/// counterparty; later swaps with different terms are not reflected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterpartyExposure {
    /// Trimmed counterparty name, or `"Unknown"`.
    pub name: String,

    /// Sum of notional amounts with this counterparty.
    pub notional: Decimal,

    /// Termination date of the first swap.
    pub termination: String,

    /// Floating leg of the first swap, as `"<index> (<spread> bp)"`.
    pub rate: String,
}

/// Notional exposure as a percentage of NAV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotionalRatio {
    /// Ratio in percent (150 means notional is 1.5x NAV).
    Percent(Decimal),

    /// NAV was zero or missing.
    NotApplicable,
}

impl NotionalRatio {
    /// Computes `notional / nav * 100`.
    ///
    /// Pass the fund's [`usable_net_assets`](crate::FundInfo::usable_net_assets).
    /// Missing NAV yields [`NotionalRatio::NotApplicable`], as do a zero
    /// divisor and a quotient outside the decimal range.
    #[must_use]
    pub fn compute(notional: Decimal, nav: Option<Decimal>) -> Self {
        nav.and_then(|n| notional.checked_div(n))
            .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
            .map_or(Self::NotApplicable, Self::Percent)
    }

    /// Returns the percentage, if applicable.
    #[must_use]
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::NotApplicable => None,
        }
    }

    /// Returns true for the not-applicable sentinel.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }
}

impl fmt::Display for NotionalRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(
                f,
                "{:.2}%",
                p.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            ),
            Self::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Serialize for NotionalRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Percent(p) => Serialize::serialize(p, serializer),
            Self::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for NotionalRatio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(Decimal),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(p) => Ok(Self::Percent(p)),
            Raw::Text(s) if s == NOT_APPLICABLE => Ok(Self::NotApplicable),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{NOT_APPLICABLE}\", got \"{s}\""
            ))),
        }
    }
}
