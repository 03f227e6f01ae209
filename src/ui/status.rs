use dioxus::prelude::*;
use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(40);

/// Types `status` out one character at a time; a new message restarts it.
#[component]
pub fn StatusBar(status: Signal<String>) -> Element {
    let mut shown = use_signal(String::new);

    let _typing = use_resource(move || async move {
        let text = status.read().clone();
        shown.set(String::new());
        for ch in text.chars() {
            tokio::time::sleep(TYPE_DELAY).await;
            shown.with_mut(|s| s.push(ch));
        }
    });

    rsx! {
        div { class: "status-bar", id: "status-bar",
            pre { "{shown}" }
        }
    }
}
