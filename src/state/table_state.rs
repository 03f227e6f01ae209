use crate::state::dataset::{self, canonical_name, Dataset};
use crate::state::error::{FilterError, SchemaError};
use crate::state::filter::{self, FilterOperator, FilterPredicate};
use crate::state::view::{self, SortOrder, SortSpec};

pub const HELP_TEXT: &str = "To filter results, enter a valid column, an operator (>, <, >=, <=, ==) and a value.\nTo remove the filter, click the X button.";

/// What a successful filter request did.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterChange {
    Applied(FilterPredicate),
    Cleared,
}

impl FilterChange {
    pub fn message(&self) -> String {
        match self {
            FilterChange::Applied(predicate) => format!("Filter applied: {predicate}"),
            FilterChange::Cleared => "Filter removed, showing the full table.".to_string(),
        }
    }
}

/// Success flag plus the status line shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub success: bool,
    pub message: String,
}

impl From<Result<FilterChange, FilterError>> for FilterOutcome {
    fn from(result: Result<FilterChange, FilterError>) -> Self {
        match result {
            Ok(change) => Self {
                success: true,
                message: change.message(),
            },
            Err(err) => Self {
                success: false,
                message: err.to_string(),
            },
        }
    }
}

/// The loaded dataset plus one optional filter and one optional sort key.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TableState {
    data: Dataset,
    filter: Option<FilterPredicate>,
    sort_spec: Option<SortSpec>,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: Dataset) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Replaces the dataset and drops the filter and sort key.
    pub fn load(&mut self, data: Dataset) {
        self.data = data;
        self.filter = None;
        self.sort_spec = None;
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data.column_names()
    }

    pub fn filter(&self) -> Option<&FilterPredicate> {
        self.filter.as_ref()
    }

    pub fn sort_spec(&self) -> Option<&SortSpec> {
        self.sort_spec.as_ref()
    }

    pub fn set_filter(
        &mut self,
        column: &str,
        operator: &str,
        value: &str,
        reset: bool,
    ) -> FilterOutcome {
        self.try_set_filter(column, operator, value, reset).into()
    }

    /// Validation order: reset, threshold, operator, column. Any error leaves
    /// the current filter in place.
    pub fn try_set_filter(
        &mut self,
        column: &str,
        operator: &str,
        value: &str,
        reset: bool,
    ) -> Result<FilterChange, FilterError> {
        if reset {
            self.clear_filter();
            return Ok(FilterChange::Cleared);
        }

        let threshold = filter::parse_threshold(value)?;
        let operator: FilterOperator = operator.parse()?;
        let column_name = canonical_name(column);
        let target = self
            .data
            .column(&column_name)
            .ok_or_else(|| FilterError::ColumnNotFound(column_name.clone()))?;
        if !target.kind().is_numeric() {
            return Err(FilterError::NotNumeric(column_name));
        }

        let predicate = FilterPredicate {
            column: column_name,
            operator,
            threshold,
        };
        self.filter = Some(predicate.clone());
        Ok(FilterChange::Applied(predicate))
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// Header click: same column flips direction, a new column starts ascending.
    /// The column is not validated until the view is projected.
    pub fn set_sort(&mut self, column: &str) {
        let column = canonical_name(column);
        let order = match self.sort_spec.as_ref() {
            Some(spec) if spec.column == column => spec.order.toggled(),
            _ => SortOrder::Asc,
        };
        self.sort_spec = Some(SortSpec { column, order });
    }

    pub fn clear_sort(&mut self) {
        self.sort_spec = None;
    }

    pub fn current_view(&self) -> Result<Vec<usize>, SchemaError> {
        view::project(&self.data, self.filter.as_ref(), self.sort_spec.as_ref())
    }

    /// Header line and value line for one row, both joined with ", ".
    pub fn copy_row(&self, row_index: usize) -> Option<String> {
        let values = self.data.row(row_index)?;
        let header = self.data.column_names().join(", ");
        let row = values
            .into_iter()
            .map(dataset::display_value)
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("{header}\n{row}"))
    }

    /// Like [`Self::copy_row`], but only for rows the current view shows.
    pub fn copy_visible_row(&self, row_index: usize) -> Option<String> {
        let visible = self.current_view().ok()?;
        if !visible.contains(&row_index) {
            return None;
        }
        self.copy_row(row_index)
    }

    pub fn cell_display_value(&self, row_index: usize, column: &str) -> String {
        self.data
            .cell(row_index, column)
            .map(dataset::display_value)
            .unwrap_or_default()
    }

    pub fn help_text() -> &'static str {
        HELP_TEXT
    }
}
