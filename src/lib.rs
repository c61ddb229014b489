pub mod aggregate;
pub mod rank;
pub mod source;

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

/// Run the whole pipeline over the file at `path`: fold every row into the
/// per-region accumulators, then rank and render once the source is
/// exhausted. The aggregation state lives entirely inside this function.
pub fn run<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut state = aggregate::AggregationState::new();
    let mut rows: u64 = 0;

    for record in source::records(&path)? {
        match record {
            Ok(record) => {
                state.ingest(&record);
                rows += 1;
            }
            Err(err) => warn!("skipping unreadable row: {}", err),
        }
    }
    info!(rows, regions = state.len(), "ingest complete");

    Ok(rank::finalize(state))
}
