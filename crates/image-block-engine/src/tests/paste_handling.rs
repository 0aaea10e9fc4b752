use std::rc::Rc;

use image_block_config::ToolConfig;
use pretty_assertions::assert_eq;
use serde_json::json;

use super::{ScriptedTransport, StaticBlobs, harness, harness_with};
use crate::data::ImageFile;
use crate::paste::PasteEvent;
use crate::status::VisualStatus;
use crate::tool::UPLOAD_FAILED_MESSAGE;
use crate::upload::{FileUpload, UploadResponse};

const PASTED_URL: &str = "https://images.example.com/cat.png";

#[tokio::test]
async fn test_pasted_link_uploads_by_url() {
    let transport = ScriptedTransport::new().respond(
        PASTED_URL,
        UploadResponse::success(ImageFile::new("https://cdn/cat.png")),
    );
    let mut h = harness(json!(null), ToolConfig::default(), transport);

    h.tool
        .on_paste(PasteEvent::Pattern {
            url: PASTED_URL.to_string(),
        })
        .await;

    assert_eq!(h.transport.calls(), vec![format!("url:{PASTED_URL}")]);
    assert_eq!(h.tool.save().image.url, "https://cdn/cat.png");
}

#[tokio::test]
async fn test_pasted_remote_tag_uploads_by_url() {
    let transport = ScriptedTransport::new().respond(PASTED_URL, UploadResponse::success(ImageFile::new("u")));
    let mut h = harness(json!(null), ToolConfig::default(), transport);

    h.tool
        .on_paste(PasteEvent::Tag {
            src: PASTED_URL.to_string(),
        })
        .await;

    assert_eq!(h.transport.calls(), vec![format!("url:{PASTED_URL}")]);
}

#[tokio::test]
async fn test_dropped_file_uploads_by_file() {
    let transport = ScriptedTransport::new()
        .respond("drop.gif", UploadResponse::success(ImageFile::new("https://cdn/drop.gif")));
    let mut h = harness(json!(null), ToolConfig::default(), transport);

    h.tool
        .on_paste(PasteEvent::File {
            file: FileUpload::new("drop.gif", "image/gif", vec![0x47, 0x49, 0x46]),
        })
        .await;

    assert_eq!(h.transport.calls(), vec!["file:drop.gif".to_string()]);
    assert_eq!(h.tool.status(), VisualStatus::Uploading);
    assert_eq!(h.tool.render().preloader_background, Some("url(data:image/gif;base64,R0lG)".to_string()));

    h.tool.media_loaded("https://cdn/drop.gif");
    assert_eq!(h.tool.status(), VisualStatus::Filled);
    assert_eq!(h.tool.render().preloader_background, None);
}

#[test]
fn test_url_preview_is_the_url_itself() {
    let mut h = harness(json!(null), ToolConfig::default(), ScriptedTransport::new());

    let pending = h.tool.begin_url_upload(PASTED_URL);

    assert_eq!(
        h.tool.render().preloader_background,
        Some(format!("url({PASTED_URL})"))
    );
    drop(pending);
}

#[tokio::test]
async fn test_blob_tag_is_resolved_then_uploaded_as_file() {
    let resolved = FileUpload::new("pasted-from-pdf.png", "image/png", vec![9, 9]);
    let transport = ScriptedTransport::new().respond(
        "pasted-from-pdf.png",
        UploadResponse::success(ImageFile::new("https://cdn/pdf.png")),
    );
    let mut h = harness_with(json!(null), ToolConfig::default(), transport, |api| {
        api.with_blob_resolver(Rc::new(StaticBlobs(Some(resolved))))
    });

    h.tool
        .on_paste(PasteEvent::Tag {
            src: "blob:https://editor.example/5f2c".to_string(),
        })
        .await;

    assert_eq!(h.transport.calls(), vec!["file:pasted-from-pdf.png".to_string()]);
    assert_eq!(h.tool.save().image.url, "https://cdn/pdf.png");
}

#[tokio::test]
async fn test_unreadable_blob_only_notifies() {
    let mut h = harness(
        json!({ "file": { "url": "kept.png" } }),
        ToolConfig::default(),
        ScriptedTransport::new(),
    );
    h.tool.media_loaded("kept.png");

    h.tool
        .on_paste(PasteEvent::Tag {
            src: "blob:https://editor.example/gone".to_string(),
        })
        .await;

    assert!(h.transport.calls().is_empty());
    assert_eq!(h.notifier.shown().len(), 1);
    assert_eq!(h.notifier.shown()[0].message, UPLOAD_FAILED_MESSAGE);
    assert_eq!(h.tool.status(), VisualStatus::Filled);
    assert_eq!(h.tool.save().image.url, "kept.png");
}

#[tokio::test]
async fn test_failed_blob_resolver_only_notifies() {
    let mut h = harness_with(json!(null), ToolConfig::default(), ScriptedTransport::new(), |api| {
        api.with_blob_resolver(Rc::new(StaticBlobs(None)))
    });

    h.tool
        .on_paste(PasteEvent::Tag {
            src: "blob:https://editor.example/gone".to_string(),
        })
        .await;

    assert!(h.transport.calls().is_empty());
    assert_eq!(h.notifier.shown().len(), 1);
    assert_eq!(h.tool.status(), VisualStatus::Empty);
}
