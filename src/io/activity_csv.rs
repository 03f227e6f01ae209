use std::io::Read;
use std::path::Path;

use crate::state::dataset::Dataset;
use crate::state::error::LoadError;
use crate::state::normalize::{self, RawTable};

/// Reads a comma-separated export with a header row.
pub fn read_raw<R: Read>(reader: R) -> Result<RawTable, csv::Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(str::to_string).collect());
    }
    Ok(RawTable::new(headers, records))
}

pub fn read_raw_file(path: &Path) -> Result<RawTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e.into(),
    })?;
    read_raw(file).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads, normalizes and restricts an export to the display columns.
pub fn load_activities(path: &Path) -> Result<Dataset, LoadError> {
    let raw = read_raw_file(path)?;
    let dataset = normalize::normalize_for_display(raw)?;
    log::info!(
        "Loaded {} activities from {}",
        dataset.row_count(),
        path.display()
    );
    Ok(dataset)
}
