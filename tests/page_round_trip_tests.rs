//! Integration tests for the generate/decode page
//!
//! These drive the page controller with the real QR codec and a recording
//! view, the way a host UI would.

use qr_page::bitmap;
use qr_page::page::{NO_IMAGE_MESSAGE, NOT_FOUND_MESSAGE, ViewEvent};
use qr_page::{
    BarcodeCodec, BarcodeFormat, DecodeOutcome, DecodingOptions, EncodingOptions, PageConfig,
    PageController, PageError, PixelImage, QrCodec, RecordingView,
};

fn page() -> PageController<QrCodec, RecordingView> {
    PageController::with_defaults(QrCodec::new(), RecordingView::new())
}

#[test]
fn test_empty_input_is_rejected() {
    let mut page = page();
    let result = page.generate_code("");

    assert!(matches!(result, Err(PageError::EmptyInput)));
    assert!(page.last_image().is_none());
    assert!(page.view().image().is_none());
    assert_eq!(page.view().decoded_text(), "");
    assert!(page.view().events().contains(&ViewEvent::FocusInput));
}

#[test]
fn test_generate_then_decode_hello() {
    let mut page = page();
    page.generate_code("hello").expect("generate should succeed");

    assert!(page.last_image().is_some());
    assert!(page.view().image().is_some());

    let outcome = page.decode_code().expect("decode should not fail");
    match outcome {
        DecodeOutcome::Decoded(result) => {
            assert_eq!(result.text, "hello");
            assert_eq!(result.format, BarcodeFormat::QrCode);
        }
        other => panic!("expected a decoded result, got {:?}", other),
    }
    assert_eq!(page.view().decoded_text(), "hello");
}

#[test]
fn test_decode_without_image() {
    let mut page = page();
    assert_eq!(page.decode_code().unwrap(), DecodeOutcome::NoImage);
    assert_eq!(page.view().decoded_text(), "Please generate a barcode first.");
    assert_eq!(NO_IMAGE_MESSAGE, "Please generate a barcode first.");
}

#[test]
fn test_second_generate_replaces_first() {
    let mut page = page();
    page.generate_code("A").unwrap();
    let first = page.last_image().cloned();
    page.generate_code("B").unwrap();

    assert_ne!(page.last_image().cloned(), first);
    assert_eq!(page.decode_code().unwrap().display_text(), "B");
}

#[test]
fn test_blank_image_reports_no_barcode() {
    let codec = QrCodec::new();
    let blank = PixelImage::blank(200, 200).unwrap();
    let found = codec
        .decode(&blank, &DecodingOptions::for_formats(&[BarcodeFormat::QrCode]))
        .unwrap();
    assert!(found.is_none());

    let mut page = page();
    assert_eq!(page.scan_image(&blank).unwrap(), DecodeOutcome::NotFound);
    assert_eq!(page.view().decoded_text(), "No barcode found");
    assert_eq!(NOT_FOUND_MESSAGE, "No barcode found");
}

#[test]
fn test_unicode_and_long_text() {
    let mut page = page();
    let text = "Grüße aus Köln – QR ✓";
    page.generate_code(text).unwrap();
    assert_eq!(page.decode_code().unwrap().display_text(), text);

    let long = "The quick brown fox jumps over the lazy dog. ".repeat(4);
    let config = PageConfig {
        width: 400,
        height: 400,
        ..PageConfig::default()
    };
    let mut page = PageController::new(QrCodec::new(), RecordingView::new(), &config);
    page.generate_code(&long).unwrap();
    assert_eq!(page.decode_code().unwrap().display_text(), long);
}

#[test]
fn test_scan_saved_picture() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asset.png");
    let image = QrCodec::new()
        .encode(
            "packaged asset",
            BarcodeFormat::QrCode,
            &EncodingOptions::default().with_size(240, 240),
        )
        .unwrap();
    bitmap::save_png(&image, &path).unwrap();

    let mut page = page();
    let picture = bitmap::load(&path).unwrap();
    let outcome = page.scan_image(&picture).unwrap();

    assert_eq!(outcome.display_text(), "packaged asset");
    assert!(page.last_image().is_none());
    assert_eq!(
        page.view().image().map(|b| b.dimensions()),
        Some((240, 240))
    );
}

#[test]
fn test_configured_size_is_used() {
    let config = PageConfig {
        width: 320,
        height: 160,
        margin: 1,
        ..PageConfig::default()
    };
    let mut page = PageController::new(QrCodec::new(), RecordingView::new(), &config);
    page.generate_code("size").unwrap();

    let image = page.last_image().unwrap();
    assert_eq!((image.width(), image.height()), (320, 160));
    assert_eq!(page.decode_code().unwrap().display_text(), "size");
}
