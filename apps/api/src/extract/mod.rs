//! PDF text extraction for uploaded resumes.
//!
//! Only the first three pages are read; resumes rarely run longer and later pages
//! tend to be references or publications lists.

pub mod handlers;

use thiserror::Error;

pub const MAX_PAGES: usize = 3;
/// Less text than this means the PDF is scanned or image-only.
pub const MIN_EXTRACTED_CHARS: usize = 30;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Couldn't read that PDF. Try pasting instead.")]
    Unreadable(String),

    #[error("Couldn't read text from PDF. Try pasting instead.")]
    NoText,
}

/// Joins the first `MAX_PAGES` pages with blank lines and trims the result.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> Result<String, ExtractError> {
    let text = pages
        .iter()
        .take(MAX_PAGES)
        .map(|p| p.as_ref().trim())
        .collect::<Vec<_>>()
        .join("\n\n")
        .trim()
        .to_string();

    if text.chars().count() < MIN_EXTRACTED_CHARS {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

/// Extracts resume text from an in-memory PDF.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| ExtractError::Unreadable(e.to_string()))?;
    join_pages(&pages)
}
