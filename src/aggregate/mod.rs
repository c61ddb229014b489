// src/aggregate/mod.rs
use csv::StringRecord;
use std::collections::HashMap;
use tracing::trace;

/// The two census years the ranking compares.
const BASE_YEAR: i32 = 2010;
const TARGET_YEAR: i32 = 2015;

/// Running totals for one region. Created on the first 2010-or-2015 row
/// seen for the region, whichever year arrives first; the year that never
/// shows up leaves its field at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegionAccumulator {
    pub pop_2010: f64,
    pub pop_2015: f64,
}

/// Region name → accumulator, owned by the ingestion loop for the duration
/// of one pass and handed to the ranker once the source is exhausted.
#[derive(Debug, Default)]
pub struct AggregationState {
    regions: HashMap<String, RegionAccumulator>,
}

impl AggregationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one raw CSV row into the per-region accumulators.
    ///
    /// Only fields 0 (year), 1 (region) and 3 (population) are read; the
    /// rest of the row is an age-band breakdown this ranking does not use.
    /// Rows whose year field is not exactly 2010 or 2015 are dropped, which
    /// also disposes of the header row since its year cell fails integer
    /// parsing. Duplicate rows for the same (region, year) overwrite, never
    /// sum.
    pub fn ingest(&mut self, record: &StringRecord) {
        let year = match record
            .get(0)
            .map(str::trim)
            .and_then(|s| s.parse::<i32>().ok())
        {
            Some(y) if y == BASE_YEAR || y == TARGET_YEAR => y,
            _ => return,
        };
        let region = match record.get(1) {
            Some(r) => r.trim(),
            None => return,
        };
        // A malformed population cell is not rejected here: it becomes NaN,
        // flows into the change rate, and surfaces in the final ranking.
        let population = record
            .get(3)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .unwrap_or(f64::NAN);

        let acc = self.regions.entry(region.to_string()).or_default();
        if year == BASE_YEAR {
            acc.pop_2010 = population;
        } else {
            acc.pop_2015 = population;
        }
        trace!(region, year, population, "folded row");
    }

    /// Number of distinct regions seen so far.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, region: &str) -> Option<&RegionAccumulator> {
        self.regions.get(region)
    }

    pub fn into_regions(self) -> HashMap<String, RegionAccumulator> {
        self.regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn accumulates_both_years_for_a_region() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2010", "東京都", "x", "600"]));
        state.ingest(&row(&["2015", "東京都", "x", "630"]));

        let acc = state.get("東京都").unwrap();
        assert_eq!(acc.pop_2010, 600.0);
        assert_eq!(acc.pop_2015, 630.0);
    }

    #[test]
    fn duplicate_year_rows_are_last_write_wins() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2010", "A", "x", "100"]));
        state.ingest(&row(&["2010", "A", "x", "250"]));

        // Overwritten, not summed.
        assert_eq!(state.get("A").unwrap().pop_2010, 250.0);
    }

    #[test]
    fn target_year_can_arrive_first() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2015", "A", "x", "120"]));

        let acc = state.get("A").unwrap();
        assert_eq!(acc.pop_2010, 0.0);
        assert_eq!(acc.pop_2015, 120.0);
    }

    #[test]
    fn header_row_is_dropped() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["集計年", "都道府県名", "10〜14歳の人口", "15〜19歳の人口"]));
        assert!(state.is_empty());
    }

    #[test]
    fn other_years_leave_accumulators_untouched() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2010", "A", "x", "100"]));
        state.ingest(&row(&["2005", "A", "x", "999"]));
        state.ingest(&row(&["2020", "A", "x", "999"]));

        assert_eq!(state.len(), 1);
        assert_eq!(
            *state.get("A").unwrap(),
            RegionAccumulator {
                pop_2010: 100.0,
                pop_2015: 0.0
            }
        );
    }

    #[test]
    fn malformed_population_becomes_nan() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2010", "A", "x", "n/a"]));
        assert!(state.get("A").unwrap().pop_2010.is_nan());
    }

    #[test]
    fn short_row_without_population_field_becomes_nan() {
        let mut state = AggregationState::new();
        state.ingest(&row(&["2015", "A", "x"]));
        assert!(state.get("A").unwrap().pop_2015.is_nan());
    }
}
