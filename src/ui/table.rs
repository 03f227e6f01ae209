use dioxus::prelude::{Key, *};

use crate::state::table_state::TableState;
use crate::state::view::{SortOrder, SortSpec};
use crate::ui::actions;

#[component]
pub fn Table(
    data: Signal<TableState>,
    status: Signal<String>,
    selected_row: Signal<Option<usize>>,
) -> Element {
    let snapshot = data.read().clone();
    let columns = snapshot.column_names();
    let sort_spec = snapshot.sort_spec().cloned();

    if columns.is_empty() {
        return rsx! {
            p { class: "empty-message", id: "empty-message", "No data loaded. Click \"Load CSV\" to open an activity export." }
        };
    }

    let visible_rows = match snapshot.current_view() {
        Ok(rows) => rows,
        Err(err) => {
            return rsx! {
                p { class: "empty-message error-message", id: "view-error",
                    "{err}. Clear the sort to continue."
                }
            };
        }
    };

    rsx! {
        div {
            class: "table-container",
            id: "table-container",
            tabindex: "0",
            onkeydown: move |evt| {
                let copy = evt.modifiers().contains(Modifiers::CONTROL)
                    && matches!(evt.key(), Key::Character(ref c) if c.eq_ignore_ascii_case("c"));
                if copy {
                    actions::copy_selected_row(data, selected_row, status);
                }
            },
            table {
                thead {
                    tr {
                        th { class: "row-number", "#" }
                        for col in &columns {
                            th {
                                class: header_class(col, &sort_spec),
                                id: format!("col-{}", sanitize_id(col)),
                                onclick: {
                                    let col_name = col.clone();
                                    let mut data = data;
                                    move |_| {
                                        log::debug!("sort requested on '{col_name}'");
                                        data.with_mut(|state| state.set_sort(&col_name));
                                    }
                                },
                                "{col}"
                            }
                        }
                    }
                }
                tbody {
                    for (display_index, data_index) in visible_rows.iter().copied().enumerate() {
                        tr {
                            class: row_class(display_index, data_index, &selected_row),
                            id: format!("row-{data_index}"),
                            onclick: move |_| {
                                let mut selected_row = selected_row;
                                selected_row.set(Some(data_index));
                            },
                            td { class: "row-number", "{display_index + 1}" }
                            for col in &columns {
                                td { class: "cell", "{snapshot.cell_display_value(data_index, col)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn header_class(col: &str, sort_spec: &Option<SortSpec>) -> &'static str {
    match sort_spec.as_ref() {
        Some(spec) if spec.column == col => match spec.order {
            SortOrder::Asc => "sorted-asc",
            SortOrder::Desc => "sorted-desc",
        },
        _ => "",
    }
}

fn row_class(display_index: usize, data_index: usize, selected_row: &Signal<Option<usize>>) -> String {
    let mut class = if display_index % 2 == 0 { "even" } else { "odd" }.to_string();
    if *selected_row.read() == Some(data_index) {
        class.push_str(" selected-row");
    }
    class
}

fn sanitize_id(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}
