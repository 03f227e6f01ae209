use arboard::Clipboard;
use dioxus::prelude::*;
use std::path::{Path, PathBuf};

use crate::io::activity_csv;
use crate::state::table_state::TableState;

pub async fn open_file(
    data: Signal<TableState>,
    file_path: Signal<Option<PathBuf>>,
    status: Signal<String>,
    selected_row: Signal<Option<usize>>,
) {
    let task = rfd::AsyncFileDialog::new()
        .add_filter("CSV", &["csv"])
        .pick_file()
        .await;

    match task {
        Some(handle) => {
            let path = handle.path().to_path_buf();
            load_path(&path, data, file_path, status, selected_row);
        }
        None => {
            let mut status = status;
            status.set("No file selected.".to_string());
        }
    }
}

pub fn load_path(
    path: &Path,
    mut data: Signal<TableState>,
    mut file_path: Signal<Option<PathBuf>>,
    mut status: Signal<String>,
    mut selected_row: Signal<Option<usize>>,
) {
    match activity_csv::load_activities(path) {
        Ok(dataset) => {
            let rows = dataset.row_count();
            data.with_mut(|state| state.load(dataset));
            file_path.set(Some(path.to_path_buf()));
            selected_row.set(None);
            status.set(format!("Loaded {rows} activities."));
        }
        Err(err) => {
            log::warn!("Failed to load {}: {err}", path.display());
            status.set(err.to_string());
        }
    }
}

pub fn apply_filter(
    mut data: Signal<TableState>,
    mut status: Signal<String>,
    mut selected_row: Signal<Option<usize>>,
    column: &str,
    operator: &str,
    value: &str,
    reset: bool,
) {
    let outcome = data.with_mut(|state| state.set_filter(column, operator, value, reset));
    log::debug!(
        "filter request '{column}' '{operator}' '{value}' reset={reset}: {}",
        outcome.success
    );
    if outcome.success {
        selected_row.set(None);
    }
    status.set(outcome.message);
}

pub fn copy_selected_row(
    data: Signal<TableState>,
    selected_row: Signal<Option<usize>>,
    mut status: Signal<String>,
) {
    let row = *selected_row.read();
    let Some(text) = row.and_then(|idx| data.read().copy_visible_row(idx)) else {
        status.set("Select a row to copy.".to_string());
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => status.set("Row copied to clipboard.".to_string()),
        Err(err) => {
            log::error!("Failed to copy to clipboard: {err}");
            status.set(format!("Copy failed: {err}"));
        }
    }
}
