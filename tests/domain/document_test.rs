use bytes::Bytes;

use docsum::domain::{ContentType, UploadedFile, sanitize_filename};

#[test]
fn given_allowed_extensions_when_parsing_then_returns_content_type() {
    assert_eq!(ContentType::from_filename("a.pdf"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("a.PDF"), Some(ContentType::Pdf));
    assert_eq!(ContentType::from_filename("a.jpg"), Some(ContentType::Image));
    assert_eq!(ContentType::from_filename("a.JpEg"), Some(ContentType::Image));
    assert_eq!(ContentType::from_filename("a.b.png"), Some(ContentType::Image));
}

#[test]
fn given_unknown_or_missing_extension_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_filename("a.gif"), None);
    assert_eq!(ContentType::from_filename("pdf"), None);
    assert_eq!(ContentType::from_filename("a.pdf.exe"), None);
    assert_eq!(ContentType::from_filename("a."), None);
}

#[test]
fn given_content_types_when_labelling_then_matches_response_type() {
    assert_eq!(ContentType::Pdf.as_label(), "pdf");
    assert_eq!(ContentType::Image.as_label(), "image");
}

#[test]
fn given_spaces_when_sanitizing_filename_then_replaced_with_underscores() {
    assert_eq!(sanitize_filename("my tax return.pdf"), "my_tax_return.pdf");
    assert_eq!(sanitize_filename("plain.png"), "plain.png");
}

#[test]
fn given_declared_size_when_measuring_upload_then_larger_value_wins() {
    let data = Bytes::from_static(b"12345");

    assert_eq!(UploadedFile::new("a.pdf", data.clone(), None).size_bytes(), 5);
    assert_eq!(UploadedFile::new("a.pdf", data.clone(), Some(2)).size_bytes(), 5);
    assert_eq!(UploadedFile::new("a.pdf", data, Some(100)).size_bytes(), 100);
}
