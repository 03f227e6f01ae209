use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::state::error::SchemaError;

pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const MISSING_DISPLAY: &str = "nan";

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Timestamp(NaiveDateTime),
    Float(f64),
    Integer(i64),
    Text(String),
    Missing,
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) if !v.is_nan() => Some(*v),
            Value::Integer(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            Value::Missing => true,
            Value::Float(v) => v.is_nan(),
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Timestamp,
    Float,
    Integer,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Float | ColumnKind::Integer)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    values: Vec<Value>,
}

impl Column {
    /// The name is stored in canonical (lowercase) form.
    pub fn new(name: &str, kind: ColumnKind, values: Vec<Value>) -> Self {
        Self {
            name: canonical_name(name),
            kind,
            values,
        }
    }

    /// Builds a column from raw cell text, inferring integer, float or text.
    pub fn from_cells(name: &str, cells: Vec<String>) -> Self {
        let kind = infer_kind(&cells);
        let values = cells
            .into_iter()
            .map(|cell| parse_cell(cell, kind))
            .collect();
        Self::new(name, kind, values)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, row_index: usize) -> Option<&Value> {
        self.values.get(row_index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Column-oriented table. All columns share the same row count.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    row_count: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Result<Self, SchemaError> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        if let Some(uneven) = columns.iter().find(|c| c.len() != row_count) {
            return Err(SchemaError::LengthMismatch {
                column: uneven.name.clone(),
                expected: row_count,
                found: uneven.len(),
            });
        }
        Ok(Self { columns, row_count })
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    /// Case-insensitive column lookup.
    pub fn column(&self, name: &str) -> Option<&Column> {
        let wanted = canonical_name(name);
        self.columns.iter().find(|c| c.name == wanted)
    }

    pub fn require_column(&self, name: &str) -> Result<&Column, SchemaError> {
        self.column(name)
            .ok_or_else(|| SchemaError::column_not_found(canonical_name(name)))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn cell(&self, row_index: usize, column: &str) -> Option<&Value> {
        self.column(column)?.get(row_index)
    }

    pub fn row(&self, row_index: usize) -> Option<Vec<&Value>> {
        if row_index >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .filter_map(|c| c.get(row_index))
                .collect(),
        )
    }

    /// Appends a column, replacing any existing column with the same name.
    pub fn push_column(&mut self, column: Column) -> Result<(), SchemaError> {
        if !self.columns.is_empty() && column.len() != self.row_count {
            let found = column.len();
            return Err(SchemaError::LengthMismatch {
                column: column.name,
                expected: self.row_count,
                found,
            });
        }
        if self.columns.is_empty() {
            self.row_count = column.len();
        }
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Restricts the dataset to `names`, in that order.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Dataset, SchemaError> {
        let columns = names
            .iter()
            .map(|name| self.require_column(name.as_ref()).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset {
            columns,
            row_count: self.row_count,
        })
    }
}

pub fn canonical_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Formats a value for display in a table cell or a copied row.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Timestamp(ts) => ts.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
        Value::Float(v) => format_float(*v),
        Value::Integer(v) => v.to_string(),
        Value::Text(s) => s.clone(),
        Value::Missing => MISSING_DISPLAY.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        MISSING_DISPLAY.to_string()
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Orders two values of one column. Missing values compare greater so they
/// sink to the end of an ascending sort.
pub fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left.is_missing(), right.is_missing()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        _ => match (left.as_f64(), right.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => kind_rank(left).cmp(&kind_rank(right)),
        },
    }
}

fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Integer(_) | Value::Float(_) => 0,
        Value::Timestamp(_) => 1,
        Value::Text(_) => 2,
        Value::Missing => 3,
    }
}

/// A column with no values at all is Float, so it stays filterable.
fn infer_kind(cells: &[String]) -> ColumnKind {
    let present = cells.iter().map(|c| c.trim()).filter(|c| !c.is_empty());
    let mut kind = ColumnKind::Integer;
    let mut any = false;
    for cell in present {
        any = true;
        if kind == ColumnKind::Integer && cell.parse::<i64>().is_err() {
            kind = ColumnKind::Float;
        }
        if kind == ColumnKind::Float && cell.parse::<f64>().is_err() {
            return ColumnKind::Text;
        }
    }
    if any {
        kind
    } else {
        ColumnKind::Float
    }
}

fn parse_cell(cell: String, kind: ColumnKind) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    match kind {
        ColumnKind::Integer => trimmed.parse().map(Value::Integer).unwrap_or(Value::Missing),
        ColumnKind::Float => trimmed.parse().map(Value::Float).unwrap_or(Value::Missing),
        ColumnKind::Text | ColumnKind::Timestamp => Value::Text(cell),
    }
}
