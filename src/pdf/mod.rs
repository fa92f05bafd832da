pub mod processor;

pub use processor::extract_pdf_text;
