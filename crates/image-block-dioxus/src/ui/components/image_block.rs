use std::rc::Rc;

use dioxus::prelude::*;
use image_block_engine::{BlockData, Edge, ImageTool, PendingUpload, Point, Size};

/// Renders one image block. Behaviour lives in the [`ImageTool`] behind the
/// signal; this component only forwards DOM events and measurements to it.
#[component]
pub fn ImageBlock(tool: Signal<ImageTool>, on_change: EventHandler<BlockData>) -> Element {
    let mut tool = tool;
    let mut row_el = use_signal(|| None::<Rc<MountedData>>);
    let mut media_el = use_signal(|| None::<Rc<MountedData>>);

    let view = tool.read().render();
    let dragging = tool.read().is_dragging();

    // Re-measure the media element and report the saved data
    let remeasure = move || {
        spawn(async move {
            let element = media_el.read().clone();
            if let Some(element) = element
                && let Ok(rect) = element.get_client_rect().await
            {
                tool.write()
                    .media_measured(Size::new(rect.width(), rect.height()));
            }
            on_change.call(tool.read().save());
        });
    };

    let mut media_loaded = move |src: String| {
        tool.write().media_loaded(&src);
        remeasure();
    };

    let press = move |edge: Edge, evt: MouseEvent| {
        evt.prevent_default();
        let pointer = client_point(&evt);
        let media = media_el.read().clone();
        let row = row_el.read().clone();
        spawn(async move {
            let wrapper_width = width_of(media).await;
            let parent_width = width_of(row).await;
            tool.write()
                .press_handle(edge, pointer, wrapper_width, parent_width);
        });
    };

    let select_file = move || {
        let Some((picker, accept)) = tool.read().file_picker() else {
            log::warn!("No file picker available");
            return;
        };
        spawn(async move {
            if let Some(file) = picker.pick(&accept).await {
                let pending = tool.write().begin_file_upload(file);
                spawn_upload(tool, pending, on_change);
            }
        });
    };

    let block_class = view.class_attr();
    let preloader_style = format!(
        "background-image: {};",
        view.preloader_background.clone().unwrap_or_default()
    );
    let wrapper_class = if view.highlighted {
        "image-tool__image image-tool__image--hovered"
    } else {
        "image-tool__image"
    };
    // Committed widths are percentages of the row, which is also what gets
    // measured as the parent width
    let wrapper_style = view
        .media
        .as_ref()
        .map(|media| format!("width: {};", media.width))
        .unwrap_or_default();

    rsx! {
        div {
            class: "{block_class}",

            div {
                class: "image-tool__image-row",
                style: "justify-content: {view.align_self};",
                onmounted: move |evt| row_el.set(Some(evt.data())),

                div {
                    class: "{wrapper_class}",
                    style: "{wrapper_style}",
                    onmouseenter: move |_| tool.write().hover_enter(),
                    onmouseleave: move |_| tool.write().hover_leave(),

                    if view.presentation.preloader {
                        div {
                            class: "image-tool__image-preloader",
                            style: "{preloader_style}",
                        }
                    }

                    if let Some(media) = view.media.clone() {
                        if media.tag == "video" {
                            video {
                                class: "image-tool__image-picture",
                                src: "{media.src}",
                                style: "height: {media.height};",
                                autoplay: true,
                                muted: true,
                                r#loop: true,
                                "playsinline": "true",
                                onmounted: move |evt| media_el.set(Some(evt.data())),
                                onloadeddata: {
                                    let src = media.src.clone();
                                    move |_| media_loaded(src.clone())
                                },
                            }
                        } else {
                            img {
                                class: "image-tool__image-picture",
                                src: "{media.src}",
                                style: "height: {media.height};",
                                draggable: "false",
                                onmounted: move |evt| media_el.set(Some(evt.data())),
                                onload: {
                                    let src = media.src.clone();
                                    move |_| media_loaded(src.clone())
                                },
                            }
                        }
                    }

                    if view.handles.start {
                        div {
                            class: "image-tool__resize-handle image-tool__resize-handle--start",
                            onmousedown: move |evt| press(Edge::Start, evt),
                        }
                    }
                    if view.handles.end {
                        div {
                            class: "image-tool__resize-handle image-tool__resize-handle--end",
                            onmousedown: move |evt| press(Edge::End, evt),
                        }
                    }
                }
            }

            if view.presentation.caption {
                if view.caption.editable {
                    input {
                        class: "cdx-input image-tool__caption",
                        value: "{view.caption.html}",
                        placeholder: "{view.caption.placeholder}",
                        oninput: move |evt: FormEvent| {
                            tool.write().set_caption(evt.value());
                            on_change.call(tool.read().save());
                        },
                    }
                } else {
                    div {
                        class: "image-tool__caption",
                        dangerous_inner_html: "{view.caption.html}",
                    }
                }
            }

            if view.presentation.select_button {
                div {
                    class: "cdx-button",
                    dangerous_inner_html: "{view.select_button}",
                    onclick: move |_| select_file(),
                }
            }

            // Follows the pointer anywhere in the window while resizing
            if dragging {
                div {
                    class: "image-tool__drag-overlay",
                    onmousemove: move |evt: MouseEvent| {
                        tool.write().pointer_move(client_point(&evt));
                    },
                    onmouseup: move |_| {
                        tool.write().pointer_release();
                        remeasure();
                    },
                }
            }
        }
    }
}

/// Run a started upload in the background and report the result
pub fn spawn_upload(
    mut tool: Signal<ImageTool>,
    pending: PendingUpload,
    on_change: EventHandler<BlockData>,
) {
    spawn(async move {
        let completed = pending.send().await;
        tool.write().finish_upload(completed);
        on_change.call(tool.read().save());
    });
}

fn client_point(evt: &MouseEvent) -> Point {
    let coordinates = evt.client_coordinates();
    Point::new(coordinates.x, coordinates.y)
}

async fn width_of(element: Option<Rc<MountedData>>) -> f64 {
    match element {
        Some(element) => element
            .get_client_rect()
            .await
            .map(|rect| rect.width())
            .unwrap_or_default(),
        None => 0.0,
    }
}
