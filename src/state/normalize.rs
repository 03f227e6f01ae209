//! Load-time column normalization for activity exports.
//!
//! Exports report speeds in metres per second and durations in seconds. The
//! normalizer lower-cases headers, parses the activity timestamp and appends
//! km/h and hour columns next to the raw measurements.

use chrono::NaiveDateTime;

use crate::state::dataset::{canonical_name, Column, ColumnKind, Dataset, Value};
use crate::state::error::{LoadError, SchemaError};

pub const ACTIVITY_DATE_COLUMN: &str = "activity date";
pub const ACTIVITY_DATE_FORMAT: &str = "%b %d, %Y, %I:%M:%S %p";

pub const SPEED_COLUMNS: &[&str] = &["average speed", "max speed"];
pub const DURATION_COLUMN: &str = "moving time";

pub const MS_TO_KMH: f64 = 3.6;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Columns shown by the viewer, in display order.
pub const DISPLAY_COLUMNS: &[&str] = &[
    "activity id",
    "activity date",
    "moving time/h",
    "distance",
    "max heart rate",
    "average heart rate",
    "average speed kmh",
    "max speed kmh",
    "average watts",
    "calories",
];

/// Header row plus string records, as read from a delimited file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        Self { headers, records }
    }

    fn column_cells(&self, index: usize) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.get(index).cloned().unwrap_or_default())
            .collect()
    }
}

pub fn normalize(raw: RawTable) -> Result<Dataset, LoadError> {
    let mut columns = Vec::with_capacity(raw.headers.len());
    for (index, header) in raw.headers.iter().enumerate() {
        let name = canonical_name(header);
        let cells = raw.column_cells(index);
        let column = if name == ACTIVITY_DATE_COLUMN {
            parse_timestamps(&name, cells)?
        } else {
            Column::from_cells(&name, cells)
        };
        columns.push(column);
    }

    let mut dataset = Dataset::new(columns)?;
    dataset.require_column(ACTIVITY_DATE_COLUMN)?;

    for source in SPEED_COLUMNS {
        let derived = ms_to_kmh(&dataset, source)?;
        dataset.push_column(derived)?;
    }
    if let Some(derived) = secs_to_hours(&dataset, DURATION_COLUMN) {
        dataset.push_column(derived)?;
    }

    Ok(dataset)
}

/// Normalizes and restricts the result to [`DISPLAY_COLUMNS`].
pub fn normalize_for_display(raw: RawTable) -> Result<Dataset, LoadError> {
    let dataset = normalize(raw)?;
    Ok(dataset.select(DISPLAY_COLUMNS)?)
}

fn parse_timestamps(name: &str, cells: Vec<String>) -> Result<Column, LoadError> {
    let values = cells
        .into_iter()
        .enumerate()
        .map(|(row, cell)| {
            NaiveDateTime::parse_from_str(cell.trim(), ACTIVITY_DATE_FORMAT)
                .map(Value::Timestamp)
                .map_err(|_| LoadError::Format {
                    row: row + 1,
                    column: name.to_string(),
                    value: cell,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Column::new(name, ColumnKind::Timestamp, values))
}

/// `<source> kmh`, rounded to two decimals. The source column must exist.
pub fn ms_to_kmh(dataset: &Dataset, source: &str) -> Result<Column, SchemaError> {
    let column = dataset.require_column(source)?;
    let values = convert(column, |v| round_to(v * MS_TO_KMH, 2));
    Ok(Column::new(
        &format!("{} kmh", column.name()),
        ColumnKind::Float,
        values,
    ))
}

/// `<source>/h`, rounded to three decimals. `None` when the source is absent.
pub fn secs_to_hours(dataset: &Dataset, source: &str) -> Option<Column> {
    let column = dataset.column(source)?;
    let values = convert(column, |v| round_to(v / SECONDS_PER_HOUR, 3));
    Some(Column::new(
        &format!("{}/h", column.name()),
        ColumnKind::Float,
        values,
    ))
}

fn convert(column: &Column, f: impl Fn(f64) -> f64) -> Vec<Value> {
    column
        .values()
        .iter()
        .map(|value| match value.as_f64() {
            Some(v) => Value::Float(f(v)),
            None => Value::Missing,
        })
        .collect()
}

/// Halves round to even, like numpy's `round`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
