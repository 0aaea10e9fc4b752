use dioxus::prelude::*;

/// Shown in place of the playground when it cannot start
#[component]
pub fn ErrorScreen(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "error-screen",
            h1 { "{title}" }
            pre { "{message}" }
        }
    }
}
