//! Pure mapping from block state to what should be on screen.
//!
//! Nothing here touches a DOM; front ends render a [`BlockView`] with whatever
//! technology they use.

use image_block_config::ToolConfig;

use crate::alignment::{AlignmentController, HandleSet};
use crate::host::I18n;
use crate::state::BlockStateMachine;
use crate::status::{Presentation, VisualStatus};
use crate::tunes::ICON_PICTURE;

pub const BLOCK_CLASS: &str = "cdx-block";
pub const WRAPPER_CLASS: &str = "image-tool";

#[derive(Debug, Clone, PartialEq)]
pub struct MediaView {
    pub tag: &'static str,
    pub src: String,
    pub width: String,
    pub height: String,
    pub flags: &'static [&'static str],
    pub loaded_event: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CaptionView {
    /// Caption markup as entered by the user
    pub html: String,
    pub placeholder: String,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockView {
    pub status: VisualStatus,
    pub classes: Vec<String>,
    pub presentation: Presentation,
    /// CSS `background-image` of the preloader
    pub preloader_background: Option<String>,
    pub media: Option<MediaView>,
    pub caption: CaptionView,
    /// Markup of the select-file button
    pub select_button: String,
    pub handles: HandleSet,
    pub highlighted: bool,
    pub align_self: &'static str,
}

impl BlockView {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

pub struct ViewContext<'a> {
    pub config: &'a ToolConfig,
    pub i18n: &'a dyn I18n,
    pub read_only: bool,
}

pub fn render_block(
    state: &BlockStateMachine,
    alignment: &AlignmentController,
    ctx: &ViewContext<'_>,
) -> BlockView {
    let status = state.status();
    let mut presentation = status.presentation();
    presentation.select_button &= !ctx.read_only;

    let media = state.media().map(|media| MediaView {
        tag: media.kind().tag(),
        src: media.url().to_string(),
        width: media.width().to_string(),
        height: media.height().to_string(),
        flags: media.flags(),
        loaded_event: media.kind().loaded_event(),
    });

    let select_button = ctx.config.button_content.clone().unwrap_or_else(|| {
        format!("{ICON_PICTURE} {}", ctx.i18n.t("Select an Image"))
    });

    BlockView {
        status,
        classes: vec![
            BLOCK_CLASS.to_string(),
            WRAPPER_CLASS.to_string(),
            status.class_name(),
        ],
        presentation,
        preloader_background: state.preview().map(|src| format!("url({src})")),
        media,
        caption: CaptionView {
            html: state.data().caption.clone(),
            placeholder: ctx.i18n.t(&ctx.config.caption_placeholder),
            editable: !ctx.read_only,
        },
        select_button,
        handles: alignment.visible_handles(),
        highlighted: alignment.is_highlighted(),
        align_self: alignment.align_self(),
    }
}
