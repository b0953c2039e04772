//! Integration tests for swapview-core.
//!
//! These tests verify end-to-end summaries over a realistic filing set.

use swapview_core::prelude::*;
use swapview_core::{NoSwapSummary, NO_SWAPS_MESSAGE, UNKNOWN_COUNTERPARTY};

// =============================================================================
// TEST FIXTURES
// =============================================================================

const TSLA_2X: &str = "0001683863-24-001111";
const NVDA_2X: &str = "0001683863-24-002222";
const PLAIN: &str = "0001683863-24-003333";
const ZERO_NAV: &str = "0001683863-24-004444";

/// Builds a filing set with three leveraged funds and one plain equity fund.
fn filing_set() -> FilingData {
    FilingData::new()
        .add_fund(FundInfo::new(TSLA_2X, "2x Long TSLA Daily ETF", dec!(50_000_000)))
        .add_fund(FundInfo::new(NVDA_2X, "2x Long NVDA Daily ETF", dec!(20_000_000)))
        .add_fund(FundInfo::new(PLAIN, "Plain Equity Fund", dec!(5_000_000)))
        .add_fund(FundInfo::new(ZERO_NAV, "Seed Stage ETF", Decimal::ZERO))
        // TSLA fund: three swaps, one stock, one cash sweep
        .add_holdings(vec![
            FundHolding::swap(TSLA_2X, "T-1"),
            FundHolding::new(TSLA_2X, "T-2"),
            FundHolding::swap(TSLA_2X, "T-3"),
            FundHolding::new(TSLA_2X, "T-4").with_category("FUT"),
            FundHolding::swap(TSLA_2X, "T-5"),
        ])
        // NVDA fund: one swap whose counterparty is not reported
        .add_holdings(vec![
            FundHolding::swap(NVDA_2X, "N-1"),
            FundHolding::new(NVDA_2X, "N-2"),
        ])
        // Plain fund: no derivatives
        .add_holdings(vec![
            FundHolding::new(PLAIN, "P-1"),
            FundHolding::new(PLAIN, "P-2"),
        ])
        .add_holding(FundHolding::swap(ZERO_NAV, "Z-1"))
        .add_swaps(vec![
            SwapDetail::new("T-1")
                .with_notional(dec!(40_000_000))
                .with_unrealized(dec!(1_250_000.50))
                .with_termination("2025-03-14")
                .with_floating_leg("SOFR", dec!(75)),
            SwapDetail::new("T-3")
                .with_notional(dec!(35_000_000))
                .with_unrealized(dec!(-300_000.25))
                .with_termination("2025-06-20")
                .with_floating_leg("OBFR", dec!(90)),
            SwapDetail::new("T-5")
                .with_notional(dec!(25_000_000))
                .with_unrealized(dec!(50_000))
                .with_termination("2025-09-19")
                .with_floating_leg("SOFR", dec!(80)),
            SwapDetail::new("N-1")
                .with_notional(dec!(38_000_000))
                .with_termination("2025-12-19")
                .with_floating_leg("FEDL01", dec!(100)),
            SwapDetail::new("Z-1").with_notional(dec!(5_000)),
        ])
        .add_counterparties(vec![
            CounterpartyLink::new("T-1", "Goldman Sachs International"),
            CounterpartyLink::new("T-3", "  Barclays Bank PLC "),
            CounterpartyLink::new("T-5", "Goldman Sachs International   "),
            CounterpartyLink::new("Z-1", "Cantor Fitzgerald"),
        ])
}

// =============================================================================
// FULL SUMMARIES
// =============================================================================

#[test]
fn test_leveraged_fund_summary() {
    let data = filing_set();
    let summary = data.summarize(TSLA_2X).unwrap();
    let exposure = summary.as_exposure().expect("TSLA fund holds swaps");

    assert_eq!(exposure.fund_name, "2x Long TSLA Daily ETF");
    // All five holdings count, not only the three swaps
    assert_eq!(exposure.total_holdings, 5);
    assert_eq!(exposure.total_notional_exposure, dec!(100_000_000));
    assert_eq!(exposure.nav, Some(dec!(50_000_000)));
    assert_eq!(exposure.notional_exposure_ratio.percent(), Some(dec!(200)));
    assert_eq!(exposure.unrealized_gains, dec!(1_000_000.25));

    let names: Vec<_> = exposure.counterparties.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Goldman Sachs International", "Barclays Bank PLC"]);

    let goldman = &exposure.counterparties[0];
    assert_eq!(goldman.notional, dec!(65_000_000));
    assert_eq!(goldman.termination, "2025-03-14");
    assert_eq!(goldman.rate, "SOFR (75 bp)");

    let barclays = &exposure.counterparties[1];
    assert_eq!(barclays.notional, dec!(35_000_000));
    assert_eq!(barclays.rate, "OBFR (90 bp)");

    assert_eq!(
        exposure.counterparty_notional_total(),
        Some(exposure.total_notional_exposure)
    );
    assert_eq!(exposure.largest_counterparty().unwrap().name, goldman.name);
}

#[test]
fn test_missing_counterparty_is_unknown() {
    let data = filing_set();
    let summary = data.summarize(NVDA_2X).unwrap();
    let exposure = summary.as_exposure().unwrap();

    assert_eq!(exposure.total_holdings, 2);
    assert_eq!(exposure.counterparties.len(), 1);
    assert_eq!(exposure.counterparties[0].name, UNKNOWN_COUNTERPARTY);
    assert_eq!(exposure.counterparties[0].rate, "FEDL01 (100 bp)");
    assert_eq!(exposure.notional_exposure_ratio.percent(), Some(dec!(190)));
    assert_eq!(exposure.unrealized_gains, Decimal::ZERO);
}

#[test]
fn test_zero_nav_fund() {
    let data = filing_set();
    let summary = data.summarize(ZERO_NAV).unwrap();
    let exposure = summary.as_exposure().unwrap();

    assert_eq!(exposure.total_notional_exposure, dec!(5_000));
    assert!(exposure.notional_exposure_ratio.is_not_applicable());

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["notional_exposure_ratio"], serde_json::json!("N/A"));
}

#[test]
fn test_blank_nav_fund_with_swaps() {
    const BLANK_NAV: &str = "0001683863-24-005555";
    let data = FilingData::new()
        .add_fund(FundInfo::new(BLANK_NAV, "New Issue ETF", dec!(1)).without_net_assets())
        .add_holding(FundHolding::swap(BLANK_NAV, "B-1"))
        .add_swap(SwapDetail::new("B-1").with_notional(dec!(7_500)))
        .add_counterparty(CounterpartyLink::unnamed("B-1"));

    let summary = data.summarize(BLANK_NAV).unwrap();
    let exposure = summary.as_exposure().unwrap();
    assert_eq!(exposure.nav, None);
    assert!(exposure.notional_exposure_ratio.is_not_applicable());
    assert_eq!(exposure.counterparties[0].name, UNKNOWN_COUNTERPARTY);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["NAV"], serde_json::Value::Null);
    assert_eq!(json["notional_exposure_ratio"], serde_json::json!("N/A"));
    assert_eq!(json["total_notional_exposure"], 7_500.0);
}

// =============================================================================
// EARLY EXIT AND ERRORS
// =============================================================================

#[test]
fn test_fund_without_swaps() {
    let data = filing_set();
    let summary = data.summarize(PLAIN).unwrap();

    assert_eq!(
        summary,
        FundSummary::NoSwaps(NoSwapSummary::new("Plain Equity Fund"))
    );

    let json = serde_json::to_value(&summary).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["fund_name"], "Plain Equity Fund");
    assert_eq!(object["message"], NO_SWAPS_MESSAGE);
}

#[test]
fn test_fund_info_without_holdings_has_no_swaps() {
    let data = filing_set().add_fund(FundInfo::new("EMPTY", "Empty Filing", dec!(1)));
    let summary = data.summarize("EMPTY").unwrap();
    assert!(!summary.is_exposure());
}

#[test]
fn test_unknown_fund_is_explicit_error() {
    let data = filing_set();
    let err = data.summarize("0000000000-00-000000").unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("0000000000-00-000000"));
}

#[test]
fn test_holdings_of_unknown_fund_still_not_found() {
    // Holdings exist but the fund info row is missing
    let data = FilingData::new().add_holding(FundHolding::swap("ORPHAN", "O-1"));
    let err = data.summarize("ORPHAN").unwrap_err();
    assert_eq!(err, ExposureError::fund_not_found("ORPHAN"));
}

// =============================================================================
// JSON EXPORT
// =============================================================================

#[test]
fn test_json_report_shape() {
    let data = filing_set();
    let summary = data.summarize(TSLA_2X).unwrap();
    let json: serde_json::Value = serde_json::from_str(&summary.to_json_pretty().unwrap()).unwrap();

    let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    for key in [
        "fund_name",
        "total_holdings",
        "total_notional_exposure",
        "NAV",
        "notional_exposure_ratio",
        "unrealized_gains",
        "counterparties",
    ] {
        assert!(keys.iter().any(|k| k == key), "missing key {key}");
    }
    assert_eq!(keys.len(), 7);

    assert_eq!(json["total_holdings"], 5);
    assert_eq!(json["NAV"], 50_000_000.0);
    assert_eq!(json["notional_exposure_ratio"], 200.0);

    let first = &json["counterparties"][0];
    assert_eq!(first["name"], "Goldman Sachs International");
    assert_eq!(first["notional"], 65_000_000.0);
    assert_eq!(first["termination"], "2025-03-14");
    assert_eq!(first["rate"], "SOFR (75 bp)");
}

#[test]
fn test_json_report_parses_back() {
    let data = filing_set();
    for fund in [TSLA_2X, PLAIN, ZERO_NAV] {
        let summary = data.summarize(fund).unwrap();
        let parsed: FundSummary = serde_json::from_str(&summary.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed.fund_name(), summary.fund_name());
        assert_eq!(parsed.is_exposure(), summary.is_exposure());
    }
}

// =============================================================================
// FUND DIRECTORY
// =============================================================================

#[test]
fn test_notional_overflow_is_an_error() {
    let half = Decimal::MAX / dec!(2);
    let data = FilingData::new()
        .add_fund(FundInfo::new("F", "Huge Fund", dec!(1)))
        .add_holdings(vec![
            FundHolding::swap("F", "S1"),
            FundHolding::swap("F", "S2"),
            FundHolding::swap("F", "S3"),
        ])
        .add_swaps(vec![
            SwapDetail::new("S1").with_notional(half),
            SwapDetail::new("S2").with_notional(half),
            SwapDetail::new("S3").with_notional(half),
        ]);

    let err = data.summarize("F").unwrap_err();
    assert_eq!(err, ExposureError::overflow("total_notional_exposure"));
}

#[test]
fn test_select_fund_by_name() {
    let data = filing_set();
    let accession = data.find_fund_by_name("2x Long NVDA Daily ETF").unwrap();
    assert_eq!(accession, NVDA_2X);

    let options = data.fund_options();
    assert_eq!(options.len(), 4);
    assert_eq!(options[0].series_name, "2x Long TSLA Daily ETF");
}

#[test]
fn test_inputs_are_not_mutated() {
    let data = filing_set();
    let before = format!("{data:?}");
    let _ = data.summarize(TSLA_2X).unwrap();
    let _ = data.summarize(PLAIN).unwrap();
    assert_eq!(before, format!("{data:?}"));
}
