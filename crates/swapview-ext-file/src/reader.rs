//! Generic delimited table reader.

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{LoadError, LoadResult};

/// Reads every record of a delimited file with a header row.
///
/// Each record is deserialized as `R` and converted into `T`; a failed
/// conversion is reported with the record's line. Unlike a best-effort
/// reader, a missing file is an error: callers must know the tables they
/// analyze are complete.
pub(crate) fn read_table<R, T>(path: &Path, delimiter: u8) -> LoadResult<Vec<T>>
where
    R: DeserializeOwned,
    T: TryFrom<R>,
    T::Error: fmt::Display,
{
    let file = std::fs::File::open(path).map_err(|e| LoadError::io(path, e.to_string()))?;

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::from_csv(path, e))?
        .clone();

    let mut rows = Vec::new();
    let mut raw = csv::StringRecord::new();
    while reader
        .read_record(&mut raw)
        .map_err(|e| LoadError::from_csv(path, e))?
    {
        let record: R = raw
            .deserialize(Some(&headers))
            .map_err(|e| LoadError::from_csv(path, e))?;
        let row = T::try_from(record).map_err(|e| {
            LoadError::parse(path, raw.position().map(csv::Position::line), e.to_string())
        })?;
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "Loaded table");
    Ok(rows)
}
