// src/source/mod.rs
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Open `path` and return a lazy iterator over its raw CSV records, in
/// on-disk order. The iterator is finite and cannot be restarted; callers
/// get exactly one pass.
///
/// The reader is flexible so rows keep flowing even when a line has an
/// unexpected field count, and the header row is not special-cased here:
/// filtering happens downstream on the year column, which the header fails
/// to parse.
pub fn records<P: AsRef<Path>>(
    path: P,
) -> Result<impl Iterator<Item = csv::Result<StringRecord>>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    debug!(path = %path.display(), "opened input");

    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    Ok(reader.into_records())
}
