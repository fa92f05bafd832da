// tests/common/mod.rs
// Small PDF documents built in memory for extraction tests
#![allow(dead_code)]

pub const HELVETICA: &str = "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>";

/// Content stream that draws one line of text with font /F1
pub fn text_page(line: &str) -> String {
    format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", line)
}

/// One page per content stream, all sharing `font` as /F1
pub fn build_pdf_with_font(contents: &[String], font: &str) -> Vec<u8> {
    let kids: Vec<String> = (0..contents.len())
        .map(|k| format!("{} 0 R", 4 + 2 * k))
        .collect();

    let mut objects = vec![
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), contents.len()),
        font.to_string(),
    ];
    for (k, content) in contents.iter().enumerate() {
        objects.push(format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
            5 + 2 * k
        ));
        objects.push(format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            content.len(),
            content
        ));
    }

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_at = pdf.len();
    pdf.extend_from_slice(format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1).as_bytes());
    for offset in offsets {
        pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
    }
    pdf.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        )
        .as_bytes(),
    );
    pdf
}

pub fn build_pdf(contents: &[String]) -> Vec<u8> {
    build_pdf_with_font(contents, HELVETICA)
}

/// Two readable pages
pub fn lease_pdf() -> Vec<u8> {
    build_pdf(&[
        text_page("The lease is void."),
        text_page("Payment is due monthly."),
    ])
}

/// Parses fine but draws with a font the page never declares
pub fn undeclared_font_pdf() -> Vec<u8> {
    build_pdf(&["BT /F9 12 Tf 72 720 Td (Orphan clause.) Tj ET".to_string()])
}

/// Parses fine but its font dictionary has no /Subtype
pub fn untyped_font_pdf() -> Vec<u8> {
    build_pdf_with_font(
        &[text_page("Orphan clause.")],
        "<< /Type /Font /BaseFont /Helvetica >>",
    )
}

/// Text with all whitespace removed; layout spacing varies by PDF reader
pub fn squash(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
