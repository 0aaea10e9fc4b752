use dioxus::prelude::*;
use image_block_engine::{Notification, NotificationStyle};

/// Stack of notifications raised by blocks. Clicking one dismisses it.
#[component]
pub fn Toasts(toasts: Signal<Vec<Notification>>) -> Element {
    let mut toasts = toasts;
    let shown = toasts.read().clone();

    rsx! {
        div {
            class: "cdx-notifies",
            for (index, notification) in shown.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: match notification.style {
                        NotificationStyle::Error => "cdx-notify cdx-notify--error",
                    },
                    onclick: move |_| {
                        let mut list = toasts.write();
                        if index < list.len() {
                            list.remove(index);
                        }
                    },
                    "{notification.message}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(messages: Vec<String>) -> Element {
        let toasts = use_signal(|| messages.into_iter().map(Notification::error).collect::<Vec<_>>());
        rsx! { Toasts { toasts } }
    }

    #[test]
    fn test_error_toasts_are_listed() {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                messages: vec!["Couldn’t upload image. Please try another.".to_string()],
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("cdx-notify--error"));
        assert!(html.contains("Please try another."));
    }
}
