use std::cmp::Ordering;

use crate::state::dataset::{compare_values, Dataset};
use crate::state::error::SchemaError;
use crate::state::filter::FilterPredicate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub order: SortOrder,
}

/// Derives the ordered row indices to render.
///
/// The filter runs first and the sort is applied to the surviving rows. The
/// sort is stable in both directions, and missing values always come last.
/// Fails only when the sort column does not exist in `dataset`.
pub fn project(
    dataset: &Dataset,
    filter: Option<&FilterPredicate>,
    sort: Option<&SortSpec>,
) -> Result<Vec<usize>, SchemaError> {
    let mut rows: Vec<usize> = match filter {
        Some(predicate) => filter_rows(dataset, predicate),
        None => (0..dataset.row_count()).collect(),
    };

    if let Some(spec) = sort {
        sort_rows(dataset, spec, &mut rows)?;
    }

    Ok(rows)
}

fn filter_rows(dataset: &Dataset, predicate: &FilterPredicate) -> Vec<usize> {
    let Some(column) = dataset.column(&predicate.column) else {
        return Vec::new();
    };

    column
        .values()
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| predicate.matches(value).then_some(idx))
        .collect()
}

fn sort_rows(dataset: &Dataset, spec: &SortSpec, rows: &mut [usize]) -> Result<(), SchemaError> {
    let column = dataset.require_column(&spec.column)?;
    let values = column.values();

    rows.sort_by(|&a, &b| {
        let (left, right) = (&values[a], &values[b]);
        match (left.is_missing(), right.is_missing()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match spec.order {
                SortOrder::Asc => compare_values(left, right),
                SortOrder::Desc => compare_values(right, left),
            },
        }
    });
    Ok(())
}
