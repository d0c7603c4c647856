//! PDF text extraction.
//!
//! Reads the text layer of the first N pages of a document. No OCR: a
//! scanned-image PDF legitimately yields an empty string, and the caller
//! decides what that means.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractResult;

/// Extract text from the first `min(page_count, page_limit)` pages of a PDF
/// on disk.
///
/// Returns the trimmed concatenation of each page's text. An empty result is
/// not an error here. Pure read; the file is never modified.
///
/// # Errors
///
/// Returns error if the document cannot be opened or parsed as a PDF.
pub fn extract_text(path: &Path, page_limit: usize) -> ExtractResult<String> {
    let doc = Document::load(path)?;
    Ok(text_from_document(&doc, page_limit))
}

/// Extract text from an in-memory PDF. Same contract as [`extract_text`].
///
/// # Errors
///
/// Returns error if the bytes cannot be parsed as a PDF.
pub fn extract_text_from_bytes(bytes: &[u8], page_limit: usize) -> ExtractResult<String> {
    let doc = Document::load_mem(bytes)?;
    Ok(text_from_document(&doc, page_limit))
}

/// Concatenate the text layers of the first `page_limit` pages.
///
/// A page that fails to decode contributes nothing rather than failing the
/// whole document.
fn text_from_document(doc: &Document, page_limit: usize) -> String {
    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().take(page_limit).collect();

    let mut text = String::new();
    for number in &page_numbers {
        match doc.extract_text(&[*number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => debug!(page = number, error = %e, "page failed to decode, skipping"),
        }
    }
    text.trim().to_string()
}
