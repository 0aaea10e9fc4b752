use dioxus::prelude::*;
use image_block_engine::{BlockData, ImageTool};

/// The "Alignment" group of the block settings menu
#[component]
pub fn BlockTunes(tool: Signal<ImageTool>, on_change: EventHandler<BlockData>) -> Element {
    let mut tool = tool;
    let menu = tool.read().render_tunes();

    rsx! {
        div {
            class: "ce-popover-item-group",
            div {
                class: "ce-popover-item-group__title",
                span { class: "ce-popover-item__icon", dangerous_inner_html: menu.icon }
                "{menu.label}"
            }
            for item in menu.items {
                button {
                    key: "{item.direction}",
                    class: if item.active { "ce-popover-item ce-popover-item--active" } else { "ce-popover-item" },
                    title: "{item.title}",
                    onclick: move |_| {
                        tool.write().set_direction(item.direction);
                        on_change.call(tool.read().save());
                    },
                    span { class: "ce-popover-item__icon", dangerous_inner_html: item.icon }
                    "{item.title}"
                }
            }
        }
    }
}
