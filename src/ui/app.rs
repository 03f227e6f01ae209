use dioxus::prelude::*;
use std::path::PathBuf;

use crate::state::table_state::TableState;
use crate::ui::actions;
use crate::ui::status::StatusBar;
use crate::ui::table::Table;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

pub const OPEN_ENV_VAR: &str = "RIDESHEET_OPEN";

#[component]
pub fn App() -> Element {
    let data = use_signal(TableState::new);
    let file_path = use_signal::<Option<PathBuf>>(|| None);
    let status = use_signal(|| TableState::help_text().to_string());
    let selected_row = use_signal::<Option<usize>>(|| None);

    use_effect(move || {
        if let Ok(path) = std::env::var(OPEN_ENV_VAR) {
            actions::load_path(&PathBuf::from(path), data, file_path, status, selected_row);
        }
    });

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            Toolbar { data, file_path, status, selected_row }
            Table { data, status, selected_row }
            StatusBar { status }
        }
    }
}
