use anyhow::{Context, Result};
use lopdf::Document;

use crate::source::PdfPages;

pub struct LopdfPages;

impl PdfPages for LopdfPages {
    fn get_page_texts(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let document = Document::load_mem(bytes).context("could not parse PDF")?;
        // Keyed by page number, so iteration follows page order
        let pages = document.get_pages();
        pages
            .keys()
            .map(|page_number| {
                document
                    .extract_text(&[*page_number])
                    .with_context(|| format!("could not extract text from page {}", page_number))
            })
            .collect()
    }
}
