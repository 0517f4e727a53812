use anyhow::Result;
use std::path::Path;

#[cfg(feature = "pdf-export")]
pub mod pdf;

pub trait Exporter {
    fn export(&self, lines: &[String], destination: &Path) -> Result<()>;
}

#[cfg(feature = "pdf-export")]
pub fn default_exporter() -> Option<Box<dyn Exporter>> {
    Some(Box::new(pdf::PdfExporter::default()))
}

#[cfg(not(feature = "pdf-export"))]
pub fn default_exporter() -> Option<Box<dyn Exporter>> {
    None
}
