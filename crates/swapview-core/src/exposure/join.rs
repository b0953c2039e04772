//! Left joins of swap holdings onto their detail tables.

use std::collections::HashMap;

use crate::types::{normalize_counterparty_name, CounterpartyLink, FundHolding, SwapDetail};

/// One swap holding joined with its contract terms and counterparty.
///
/// A holding without a swap row keeps `swap: None`. A holding without a
/// counterparty row, or with a blank name, is attributed to `"Unknown"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinedSwap<'a> {
    /// The swap holding.
    pub holding: &'a FundHolding,

    /// Matching swap detail, if any.
    pub swap: Option<&'a SwapDetail>,

    /// Normalized counterparty name.
    pub counterparty: &'a str,
}

/// Builds a multi-valued index of rows keyed by holding id.
///
/// Rows sharing a key keep their table order.
fn index_by_holding<'a, T>(
    rows: &'a [T],
    key: impl Fn(&'a T) -> &'a str,
) -> HashMap<&'a str, Vec<&'a T>> {
    let mut index: HashMap<&'a str, Vec<&'a T>> = HashMap::with_capacity(rows.len());
    for row in rows {
        index.entry(key(row)).or_default().push(row);
    }
    index
}

/// Left-joins swap holdings with swap details, then with counterparties.
///
/// Output order follows the holdings. Duplicate keys on the right multiply
/// rows, as in a relational left join.
#[must_use]
pub fn join_swaps<'a>(
    swap_holdings: &[&'a FundHolding],
    swaps: &'a [SwapDetail],
    counterparties: &'a [CounterpartyLink],
) -> Vec<JoinedSwap<'a>> {
    let swap_index = index_by_holding(swaps, |s| s.holding_id.as_str());
    let counterparty_index = index_by_holding(counterparties, |c| c.holding_id.as_str());

    let mut joined = Vec::with_capacity(swap_holdings.len());
    for &holding in swap_holdings {
        let key = holding.holding_id.as_str();

        let details: Vec<Option<&SwapDetail>> = match swap_index.get(key) {
            Some(rows) => rows.iter().copied().map(Some).collect(),
            None => vec![None],
        };
        let names: Vec<&str> = match counterparty_index.get(key) {
            Some(rows) => rows
                .iter()
                .map(|&c| normalize_counterparty_name(c.counterparty_name.as_deref()))
                .collect(),
            None => vec![normalize_counterparty_name(None)],
        };

        for &swap in &details {
            for &counterparty in &names {
                joined.push(JoinedSwap {
                    holding,
                    swap,
                    counterparty,
                });
            }
        }
    }
    joined
}
