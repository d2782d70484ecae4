// src/pdf/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::error::PdfError;

/// Lists the qualifying PDF files inside `input_dir`.
///
/// Only files whose extension is `pdf` (case-insensitive) qualify; anything
/// else in the directory is silently ignored. The result is sorted by path so
/// that output row order does not depend on the directory-listing order of the
/// underlying filesystem.
pub fn list_documents(input_dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            documents.push(path);
        } else {
            tracing::debug!("Ignoring non-PDF entry: {}", path.display());
        }
    }

    documents.sort();
    Ok(documents)
}

/// Reads one PDF file and returns the text of all its pages concatenated
/// verbatim, with no page-break marker inserted between pages.
///
/// Any failure here (unreadable file, malformed PDF) propagates to the caller
/// and aborts the whole batch; there is no per-document recovery.
pub fn read_document_text(path: &Path) -> Result<String, PdfError> {
    let bytes = fs::read(path).map_err(|source| PdfError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)
        .map_err(|e| PdfError::Extraction(path.display().to_string(), e))?;

    tracing::debug!("Extracted {} pages from {}", pages.len(), path.display());
    Ok(pages.concat())
}
