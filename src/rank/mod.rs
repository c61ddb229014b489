// src/rank/mod.rs
use crate::aggregate::AggregationState;
use tracing::debug;

/// One region in final ranked form. Produced once the source is exhausted
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub region: String,
    pub pop_2010: f64,
    pub pop_2015: f64,
    pub change_rate: f64,
}

/// Compute every region's 2010→2015 change rate and sort highest first.
///
/// The sort uses `f64::total_cmp`, so non-finite rates get a fixed, total
/// placement: positive NaN (malformed population cell) above +∞ (region
/// missing its 2010 row) above every finite rate, with 0 (region missing
/// its 2015 row) at the bottom of the non-negative range.
pub fn rank(state: AggregationState) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = state
        .into_regions()
        .into_iter()
        .map(|(region, acc)| RankedEntry {
            region,
            pop_2010: acc.pop_2010,
            pop_2015: acc.pop_2015,
            change_rate: acc.pop_2015 / acc.pop_2010,
        })
        .collect();

    entries.sort_by(|a, b| b.change_rate.total_cmp(&a.change_rate));
    debug!(entries = entries.len(), "ranked regions");
    entries
}

/// Render one line per ranked region. Rates use the default float
/// formatting (shortest round-trip), so `1.5` prints as `1.5`, not
/// `1.5000000`.
pub fn render(entries: &[RankedEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| {
            format!(
                "{}: {}=>{} change rate:{}",
                e.region, e.pop_2010, e.pop_2015, e.change_rate
            )
        })
        .collect()
}

/// Rank and render in one call, consuming the aggregation state.
pub fn finalize(state: AggregationState) -> Vec<String> {
    render(&rank(state))
}
