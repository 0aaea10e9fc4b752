use std::rc::Rc;

use dioxus::prelude::*;
use image_block_engine::{
    BlockData, HostApi, ImageTool, Notification, PasteAction, PasteEvent, ToolConfig, ToolContext,
};

use super::components::{BlockTunes, ErrorScreen, ImageBlock, Toasts, spawn_upload};
use crate::host::{DragSuppression, LocalTransport, PathPicker, ToastNotifier, WindowSurface};

const IMAGE_TOOL_CSS: &str = include_str!("../../assets/image-tool.css");

/// Playground hosting a single image block with its settings menu
#[component]
pub fn App(config: ToolConfig, data: serde_json::Value, read_only: bool) -> Element {
    let toasts = use_signal(Vec::<Notification>::new);
    let suppression = use_signal(DragSuppression::default);
    let mut file_path = use_signal(String::new);
    let mut paste_text = use_signal(String::new);
    let mut saved = use_signal(|| None::<BlockData>);

    let tool = use_hook(|| {
        let api = HostApi::new(Rc::new(ToastNotifier { toasts }))
            .with_surface(Rc::new(WindowSurface { suppression }))
            .with_picker(Rc::new(PathPicker { path: file_path }));
        let mut ctx = ToolContext::new(data.clone(), config.clone(), api).read_only(read_only);
        if config.endpoints.by_file.is_none() && config.endpoints.by_url.is_none() {
            log::info!("No upload endpoints configured, keeping uploads local");
            ctx = ctx.with_uploader(Rc::new(LocalTransport));
        }
        ImageTool::new(ctx)
            .map(Signal::new)
            .map_err(|e| e.to_string())
    });

    let mut tool = match tool {
        Ok(tool) => tool,
        Err(message) => {
            log::error!("Cannot create image block: {message}");
            return rsx! {
                ErrorScreen { title: "Invalid block data", message }
            };
        }
    };

    let on_change = EventHandler::new(move |data: BlockData| {
        log::debug!("Block changed, image: {:?}", data.image.url);
        saved.set(Some(data));
    });

    let mut paste_link = move || {
        let text = paste_text.read().trim().to_string();
        if !ImageTool::paste_config().pattern.is_match(&text) {
            log::info!("Ignoring paste of {text:?}: not an image link");
            return;
        }
        if let PasteAction::UploadUrl(url) = (PasteEvent::Pattern { url: text }).into_action() {
            let pending = tool.write().begin_url_upload(url);
            spawn_upload(tool, pending, on_change);
        }
    };

    let current = saved.read().clone().unwrap_or_else(|| tool.read().save());
    let valid = tool.read().validate(&current);
    let saved_json = serde_json::to_string_pretty(&current).unwrap_or_default();
    let root_class = if suppression.read().is_active() {
        "playground playground--dragging"
    } else {
        "playground"
    };

    rsx! {
        style { {IMAGE_TOOL_CSS} }
        div {
            class: "{root_class}",
            Toasts { toasts }
            div {
                class: "playground__editor",
                ImageBlock { tool, on_change }
            }
            if !read_only {
                div {
                    class: "playground__sidebar",
                    BlockTunes { tool, on_change }
                    div {
                        class: "playground__field",
                        label { "Image file" }
                        input {
                            r#type: "text",
                            placeholder: "/path/to/picture.png",
                            value: "{file_path}",
                            oninput: move |evt| file_path.set(evt.value()),
                        }
                    }
                    div {
                        class: "playground__field",
                        label { "Paste a link" }
                        input {
                            r#type: "text",
                            placeholder: "https://example.com/picture.png",
                            value: "{paste_text}",
                            oninput: move |evt| paste_text.set(evt.value()),
                        }
                        button { onclick: move |_| paste_link(), "Paste" }
                    }
                }
            }
            div {
                class: "playground__output",
                h3 { if valid { "Saved data" } else { "Saved data (would be discarded)" } }
                pre { "{saved_json}" }
            }
        }
    }
}
