use ridesheet::state::dataset::{Column, ColumnKind, Dataset, Value};
use ridesheet::state::dataset::display_value;
use ridesheet::state::error::{FilterError, SchemaError};
use ridesheet::state::filter::{FilterOperator, FilterPredicate};
use ridesheet::state::table_state::{FilterChange, TableState};
use ridesheet::state::view::SortOrder;

fn floats(name: &str, values: &[f64]) -> Column {
    Column::new(
        name,
        ColumnKind::Float,
        values.iter().map(|v| Value::Float(*v)).collect(),
    )
}

fn integers(name: &str, values: &[i64]) -> Column {
    Column::new(
        name,
        ColumnKind::Integer,
        values.iter().map(|v| Value::Integer(*v)).collect(),
    )
}

fn texts(name: &str, values: &[&str]) -> Column {
    Column::new(
        name,
        ColumnKind::Text,
        values.iter().map(|v| Value::Text(v.to_string())).collect(),
    )
}

fn sample_state() -> TableState {
    TableState::from_data(
        Dataset::new(vec![
            integers("activity id", &[1, 2, 3, 4]),
            floats("distance", &[5.0, 10.0, 15.0, 20.0]),
            integers("calories", &[10, 30, 20, 40]),
            texts("activity name", &["a", "b", "c", "d"]),
        ])
        .unwrap(),
    )
}

#[test]
fn test_filter_greater_than_keeps_order() {
    let mut state = sample_state();
    let outcome = state.set_filter("distance", ">", "10", false);

    assert!(outcome.success);
    assert_eq!(outcome.message, "Filter applied: distance > 10");
    assert_eq!(state.current_view().unwrap(), vec![2, 3]);
}

#[test]
fn test_filter_invalid_operator_leaves_view_unfiltered() {
    let mut state = sample_state();
    let outcome = state.set_filter("distance", "abc", "10", false);

    assert!(!outcome.success);
    assert!(!outcome.message.is_empty());
    assert_eq!(state.filter(), None);
    assert_eq!(state.current_view().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_filter_invalid_value_keeps_previous_filter() {
    let mut state = sample_state();
    assert!(state.set_filter("distance", ">=", "15", false).success);

    let err = state.try_set_filter("distance", "<", "ten", false).unwrap_err();
    assert_eq!(err, FilterError::InvalidValue("ten".to_string()));
    assert_eq!(
        state.filter(),
        Some(&FilterPredicate {
            column: "distance".to_string(),
            operator: FilterOperator::GtEq,
            threshold: 15.0,
        })
    );
    assert_eq!(state.current_view().unwrap(), vec![2, 3]);
}

#[test]
fn test_filter_value_checked_before_operator() {
    let mut state = sample_state();
    let err = state.try_set_filter("distance", "abc", "xyz", false).unwrap_err();
    assert!(matches!(err, FilterError::InvalidValue(_)));
}

#[test]
fn test_filter_missing_column_rejected() {
    let mut state = sample_state();
    let err = state.try_set_filter("elevation", ">", "1", false).unwrap_err();
    assert_eq!(err, FilterError::ColumnNotFound("elevation".to_string()));
    assert_eq!(state.filter(), None);
}

#[test]
fn test_filter_text_column_rejected() {
    let mut state = sample_state();
    let err = state
        .try_set_filter("activity name", "==", "1", false)
        .unwrap_err();
    assert_eq!(err, FilterError::NotNumeric("activity name".to_string()));
    assert_eq!(state.filter(), None);
}

#[test]
fn test_filter_column_is_case_insensitive() {
    let mut state = sample_state();
    let change = state.try_set_filter("  Distance ", "<=", "10", false).unwrap();
    assert!(matches!(change, FilterChange::Applied(ref p) if p.column == "distance"));
    assert_eq!(state.current_view().unwrap(), vec![0, 1]);
}

#[test]
fn test_filter_replaces_previous_filter() {
    let mut state = sample_state();
    assert!(state.set_filter("distance", ">", "10", false).success);
    assert!(state.set_filter("calories", "==", "30", false).success);
    assert_eq!(state.current_view().unwrap(), vec![1]);
}

#[test]
fn test_filter_reset_ignores_other_arguments() {
    let mut state = sample_state();
    assert!(state.set_filter("distance", ">", "10", false).success);

    let outcome = state.set_filter("nope", "??", "not a number", true);
    assert!(outcome.success);
    assert_eq!(outcome.message, "Filter removed, showing the full table.");
    assert_eq!(state.filter(), None);

    let outcome = state.set_filter("", "", "", true);
    assert!(outcome.success);
    assert_eq!(state.filter(), None);
}

#[test]
fn test_sort_toggle_asc_desc_asc() {
    let mut state = sample_state();

    state.set_sort("calories");
    assert_eq!(state.sort_spec().map(|s| s.order), Some(SortOrder::Asc));
    assert_eq!(state.current_view().unwrap(), vec![0, 2, 1, 3]);

    state.set_sort("calories");
    assert_eq!(state.sort_spec().map(|s| s.order), Some(SortOrder::Desc));
    assert_eq!(state.current_view().unwrap(), vec![3, 1, 2, 0]);

    state.set_sort("calories");
    assert_eq!(state.sort_spec().map(|s| s.order), Some(SortOrder::Asc));
}

#[test]
fn test_sort_new_column_resets_to_ascending() {
    let mut state = sample_state();
    state.set_sort("calories");
    state.set_sort("calories");
    state.set_sort("distance");

    let spec = state.sort_spec().unwrap();
    assert_eq!(spec.column, "distance");
    assert_eq!(spec.order, SortOrder::Asc);
}

#[test]
fn test_sort_descending_after_two_clicks() {
    let mut state = TableState::from_data(
        Dataset::new(vec![integers("calories", &[10, 30, 20])]).unwrap(),
    );
    state.set_sort("calories");
    state.set_sort("calories");

    let view = state.current_view().unwrap();
    let calories: Vec<String> = view
        .iter()
        .map(|&idx| state.cell_display_value(idx, "calories"))
        .collect();
    assert_eq!(calories, vec!["30", "20", "10"]);
}

#[test]
fn test_clear_sort_restores_load_order() {
    let mut state = sample_state();
    state.set_sort("calories");
    state.clear_sort();
    assert_eq!(state.sort_spec(), None);
    assert_eq!(state.current_view().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_filter_then_sort() {
    let mut state = sample_state();
    assert!(state.set_filter("distance", ">", "5", false).success);
    state.set_sort("calories");
    state.set_sort("calories");
    assert_eq!(state.current_view().unwrap(), vec![3, 1, 2]);
}

#[test]
fn test_load_resets_filter_and_sort() {
    let mut state = sample_state();
    assert!(state.set_filter("distance", ">", "10", false).success);
    state.set_sort("calories");

    state.load(Dataset::new(vec![floats("distance", &[1.0, 2.0])]).unwrap());
    assert_eq!(state.filter(), None);
    assert_eq!(state.sort_spec(), None);
    assert_eq!(state.current_view().unwrap(), vec![0, 1]);
}

#[test]
fn test_stale_sort_column_after_reload_is_schema_error() {
    let mut state = sample_state();
    state.load(Dataset::new(vec![floats("distance", &[1.0, 2.0])]).unwrap());
    state.set_sort("calories");

    let err = state.current_view().unwrap_err();
    assert_eq!(err, SchemaError::column_not_found("calories"));

    state.clear_sort();
    assert_eq!(state.current_view().unwrap(), vec![0, 1]);
}

#[test]
fn test_copy_row_text() {
    let state = TableState::from_data(
        Dataset::new(vec![
            integers("activity id", &[7]),
            floats("distance", &[18.0]),
            floats("moving time/h", &[1.017]),
            texts("activity name", &["Morning Ride"]),
        ])
        .unwrap(),
    );

    assert_eq!(
        state.copy_row(0).unwrap(),
        "activity id, distance, moving time/h, activity name\n7, 18.0, 1.017, Morning Ride"
    );
    assert_eq!(state.copy_row(1), None);
}

#[test]
fn test_empty_state_has_empty_view() {
    let state = TableState::new();
    assert!(state.column_names().is_empty());
    assert!(state.current_view().unwrap().is_empty());
    assert!(TableState::help_text().contains(">="));
}

#[test]
fn test_push_column_with_wrong_length_is_rejected() {
    let mut data = Dataset::new(vec![floats("distance", &[1.0, 2.0, 3.0])]).unwrap();
    let err = data.push_column(integers("calories", &[1, 2])).unwrap_err();
    assert_eq!(
        err,
        SchemaError::LengthMismatch {
            column: "calories".to_string(),
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(data.column_names(), vec!["distance"]);
}

#[test]
fn test_push_column_replaces_same_name() {
    let mut data = Dataset::new(vec![floats("distance", &[1.0, 2.0])]).unwrap();
    data.push_column(floats("Distance", &[3.0, 4.0])).unwrap();
    assert_eq!(data.column_names(), vec!["distance"]);
    assert_eq!(data.cell(1, "distance"), Some(&Value::Float(4.0)));
}

#[test]
fn test_filter_on_all_empty_column_matches_nothing() {
    let mut state = TableState::from_data(
        Dataset::new(vec![
            integers("activity id", &[1, 2]),
            Column::from_cells("average watts", vec![String::new(), String::new()]),
        ])
        .unwrap(),
    );

    let outcome = state.set_filter("average watts", ">", "100", false);
    assert!(outcome.success, "{}", outcome.message);
    assert!(state.current_view().unwrap().is_empty());
}

#[test]
fn test_copy_visible_row_skips_filtered_rows() {
    let mut state = sample_state();
    assert!(state.copy_visible_row(0).is_some());

    assert!(state.set_filter("distance", ">", "10", false).success);
    assert_eq!(state.copy_visible_row(0), None);
    assert_eq!(state.copy_visible_row(3), state.copy_row(3));
}

#[test]
fn test_copy_visible_row_with_stale_sort_is_none() {
    let mut state = sample_state();
    state.set_sort("elevation");
    assert_eq!(state.copy_visible_row(0), None);
}

#[test]
fn test_missing_value_displays_as_nan() {
    assert_eq!(display_value(&Value::Missing), "nan");
    assert_eq!(display_value(&Value::Float(f64::NAN)), "nan");

    let state = TableState::from_data(
        Dataset::new(vec![
            integers("activity id", &[9]),
            Column::new("average watts", ColumnKind::Float, vec![Value::Missing]),
        ])
        .unwrap(),
    );
    assert_eq!(state.copy_row(0).unwrap(), "activity id, average watts\n9, nan");
}
