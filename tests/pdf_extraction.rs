// tests/pdf_extraction.rs
// PDF text extraction on documents built in memory

mod common;

use common::{build_pdf, lease_pdf, squash, text_page, undeclared_font_pdf, untyped_font_pdf};
use lexsum::input::{acquire_upload_text, UploadedFile, PDF_MIME};
use lexsum::pdf::extract_pdf_text;
use lexsum::SummarizeError;

#[test]
fn test_pages_come_out_in_order() {
    let text = extract_pdf_text(&lease_pdf()).expect("readable PDF");
    let flat = squash(&text);

    let first = flat.find("Theleaseisvoid.").expect("page one text");
    let second = flat.find("Paymentisduemonthly.").expect("page two text");
    assert!(first < second, "page order lost: {:?}", text);
}

#[test]
fn test_three_pages_concatenated() {
    let pdf = build_pdf(&[
        text_page("Clause one."),
        text_page("Clause two."),
        text_page("Clause three."),
    ]);
    let flat = squash(&extract_pdf_text(&pdf).unwrap());

    let positions: Vec<usize> = ["Clauseone.", "Clausetwo.", "Clausethree."]
        .iter()
        .map(|s| flat.find(s).expect("missing page text"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_undeclared_font_is_extraction_error() {
    let result = extract_pdf_text(&undeclared_font_pdf());
    assert!(matches!(result, Err(SummarizeError::Extraction(_))));
}

#[test]
fn test_untyped_font_is_extraction_error() {
    let result = extract_pdf_text(&untyped_font_pdf());
    assert!(matches!(result, Err(SummarizeError::Extraction(_))));
}

#[tokio::test]
async fn test_pdf_upload_read_through_blocking_pool() {
    let file = UploadedFile::new("lease.pdf", Some(PDF_MIME.to_string()), lease_pdf());
    let text = acquire_upload_text(Some(file)).await.unwrap();
    assert!(squash(&text).contains("Paymentisduemonthly."));

    let broken = UploadedFile::new("broken.pdf", None, undeclared_font_pdf());
    let err = acquire_upload_text(Some(broken)).await.unwrap_err();
    assert_eq!(err.status_code().as_u16(), 422);
}
