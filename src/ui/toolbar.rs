use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::filter::FilterOperator;
use crate::state::table_state::TableState;
use crate::ui::actions;

#[component]
pub fn Toolbar(
    data: Signal<TableState>,
    file_path: Signal<Option<PathBuf>>,
    status: Signal<String>,
    selected_row: Signal<Option<usize>>,
) -> Element {
    let mut column = use_signal(String::new);
    let mut operator = use_signal(|| FilterOperator::Gt.symbol().to_string());
    let mut value = use_signal(String::new);

    let snapshot = data.read().clone();
    let columns = snapshot.column_names();
    let active_filter = snapshot.filter().map(|f| f.to_string());
    let has_sort = snapshot.sort_spec().is_some();

    rsx! {
        div { class: "toolbar",
            // File group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-open",
                    onclick: move |_| {
                        spawn(async move {
                            actions::open_file(data, file_path, status, selected_row).await;
                        });
                    },
                    "\u{1F4C2} Load CSV"
                }
            }
            div { class: "toolbar-separator" }

            // Filter group
            div { class: "toolbar-group",
                input {
                    class: "toolbar-input",
                    id: "input-filter-column",
                    list: "filter-columns",
                    placeholder: "column",
                    value: "{column.read()}",
                    oninput: move |evt| {
                        column.set(evt.value());
                    }
                }
                datalist { id: "filter-columns",
                    for col in &columns {
                        option { value: "{col}" }
                    }
                }
                select {
                    class: "toolbar-select toolbar-select-sm",
                    id: "select-filter-operator",
                    value: "{operator.read()}",
                    onchange: move |evt| {
                        operator.set(evt.value());
                    },
                    for op in FilterOperator::all().iter().copied() {
                        option { value: "{op.symbol()}", "{op.symbol()}" }
                    }
                }
                input {
                    class: "toolbar-input toolbar-input-sm",
                    id: "input-filter-value",
                    placeholder: "value",
                    value: "{value.read()}",
                    oninput: move |evt| {
                        value.set(evt.value());
                    }
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-filter",
                    onclick: move |_| {
                        let column = column.read().clone();
                        let operator = operator.read().clone();
                        let value = value.read().clone();
                        actions::apply_filter(data, status, selected_row, &column, &operator, &value, false);
                    },
                    "Filter"
                }
                button {
                    class: "toolbar-btn toolbar-btn-danger",
                    id: "btn-clear-filter",
                    onclick: move |_| {
                        actions::apply_filter(data, status, selected_row, "", "", "", true);
                    },
                    "\u{2715}"
                }
            }
            div { class: "toolbar-separator" }

            // View group
            div { class: "toolbar-group",
                button {
                    class: "toolbar-btn",
                    id: "btn-clear-sort",
                    disabled: !has_sort,
                    onclick: move |_| {
                        data.with_mut(|state| state.clear_sort());
                        status.set("Sort cleared.".to_string());
                    },
                    "Clear sort"
                }
                button {
                    class: "toolbar-btn",
                    id: "btn-copy-row",
                    disabled: selected_row.read().is_none(),
                    onclick: move |_| {
                        actions::copy_selected_row(data, selected_row, status);
                    },
                    "Copy row"
                }
            }

            // Info area (right-aligned)
            div { class: "toolbar-info",
                if let Some(filter) = active_filter {
                    span { class: "toolbar-label", id: "label-active-filter", "Filter: {filter}" }
                }
                if let Some(path) = file_path.read().as_ref() {
                    span { class: "file-path", "{path.display()}" }
                }
            }
        }
    }
}
