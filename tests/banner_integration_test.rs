//! Integration tests for error banners
//!
//! Banners are created detached and only swept once the caller inserted them.

use multishare_ui::services::banner_service::BannerService;
use multishare_ui::services::document::Document;
use multishare_ui::utils::error::UiError;

async fn document_with_container() -> Document {
    let doc = Document::new();
    let body = doc.body().await;
    let container = doc.create_element("div").await;
    doc.set_class_name(container, "container").await.unwrap();
    doc.append_child(body, container).await.unwrap();
    doc
}

#[tokio::test]
async fn test_show_error_keeps_message_verbatim() {
    let doc = Document::new();
    let banners = BannerService::new(doc.clone());

    let message = "Could not send <report.pdf> & friends";
    let banner = banners.show_error(message).await;

    assert_eq!(doc.text_content(banner).await.unwrap(), message);
}

#[tokio::test]
async fn test_show_error_does_not_insert() {
    let doc = document_with_container().await;
    let banners = BannerService::new(doc.clone());

    banners.show_error("nope").await;

    assert!(doc.query_selector_all(".error-message").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_after_any_number_of_banners() {
    for count in [0usize, 1, 5] {
        let doc = document_with_container().await;
        let container = doc.query_selector(".container").await.unwrap().unwrap();
        let banners = BannerService::new(doc.clone());

        for i in 0..count {
            let banner = banners.show_error(&format!("error {}", i)).await;
            doc.append_child(container, banner).await.unwrap();
        }
        assert_eq!(doc.query_selector_all(".error-message").await.unwrap().len(), count);

        assert_eq!(banners.remove_errors().await, count);
        assert!(doc.query_selector_all(".error-message").await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_clear_is_idempotent() {
    let doc = document_with_container().await;
    let body = doc.body().await;
    let banners = BannerService::new(doc.clone());

    let banner = banners.show_error("once").await;
    doc.append_child(body, banner).await.unwrap();

    assert_eq!(banners.remove_errors().await, 1);
    assert_eq!(banners.remove_errors().await, 0);
}

#[tokio::test]
async fn test_banners_across_insertion_points() {
    let doc = document_with_container().await;
    let body = doc.body().await;
    let container = doc.query_selector(".container").await.unwrap().unwrap();
    let banners = BannerService::new(doc.clone());

    let top = banners.show_error("top").await;
    doc.insert_first_child(body, top).await.unwrap();
    let nested = banners.show_error("nested").await;
    doc.append_child(container, nested).await.unwrap();

    assert_eq!(banners.remove_errors().await, 2);
    assert!(doc.is_attached(container).await);
}

#[tokio::test]
async fn test_removed_banner_can_be_shown_again() {
    let doc = document_with_container().await;
    let body = doc.body().await;
    let banners = BannerService::new(doc.clone());

    let banner = banners.show_error("retry").await;
    doc.append_child(body, banner).await.unwrap();
    banners.remove_errors().await;

    doc.append_child(body, banner).await.unwrap();
    assert_eq!(doc.query_selector_all(".error-message").await.unwrap(), vec![banner]);
}

#[tokio::test]
async fn test_multi_word_class_is_refused() {
    let result = BannerService::with_class(Document::new(), "error message");
    assert!(matches!(result, Err(UiError::InvalidClassName(_))));
}

#[tokio::test]
async fn test_custom_class_banners_are_swept() {
    let doc = document_with_container().await;
    let body = doc.body().await;
    let banners = BannerService::with_class(doc.clone(), "upload-error").unwrap();

    let banner = banners.show_error("Upload failed").await;
    doc.append_child(body, banner).await.unwrap();

    assert_eq!(banners.remove_errors().await, 1);
    assert!(!doc.is_attached(banner).await);
}
