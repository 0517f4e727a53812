use anyhow::{anyhow, Context};
use std::fs;
use std::path::Path;

use crate::error::QuizError;

pub mod docx;
pub mod loader;
pub mod pdf;

pub use docx::ZipDocx;
pub use pdf::LopdfPages;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<DocumentFormat, QuizError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "txt" => Ok(DocumentFormat::PlainText),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(QuizError::UnsupportedFormat(
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
            )),
        }
    }
}

/// Text of every page of a PDF, in page order.
pub trait PdfPages: Send + Sync {
    fn get_page_texts(&self, bytes: &[u8]) -> anyhow::Result<Vec<String>>;
}

/// Plain text of a DOCX document.
pub trait DocxText: Send + Sync {
    fn get_text(&self, bytes: &[u8]) -> anyhow::Result<String>;
}

pub struct TextSource {
    pdf: Box<dyn PdfPages>,
    docx: Box<dyn DocxText>,
}

impl Default for TextSource {
    fn default() -> Self {
        TextSource::new(Box::new(LopdfPages), Box::new(ZipDocx))
    }
}

impl TextSource {
    pub fn new(pdf: Box<dyn PdfPages>, docx: Box<dyn DocxText>) -> Self {
        TextSource { pdf, docx }
    }

    pub fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Result<String, QuizError> {
        let text = match format {
            DocumentFormat::PlainText => String::from_utf8(bytes.to_vec())
                .map_err(|_| anyhow!("file is not valid UTF-8 text")),
            DocumentFormat::Pdf => self
                .pdf
                .get_page_texts(bytes)
                .map(|pages| pages.join(" ")),
            DocumentFormat::Docx => self.docx.get_text(bytes),
        };
        text.map_err(QuizError::Read)
    }

    pub fn read_file(&self, path: &Path) -> Result<String, QuizError> {
        let format = DocumentFormat::from_path(path)?;
        let bytes = fs::read(path)
            .with_context(|| format!("could not open {}", path.display()))
            .map_err(QuizError::Read)?;
        self.extract(&bytes, format)
    }
}
