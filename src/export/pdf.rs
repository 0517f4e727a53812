use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::path::Path;

use crate::export::Exporter;

/// US letter, portrait, one inch margins. Units are PDF points.
#[derive(Clone, Debug)]
pub struct PdfExporter {
    pub page_width: i64,
    pub page_height: i64,
    pub margin: i64,
    pub font_size: i64,
    pub leading: i64,
    pub max_line_chars: usize,
}

impl Default for PdfExporter {
    fn default() -> Self {
        PdfExporter {
            page_width: 612,
            page_height: 792,
            margin: 72,
            font_size: 11,
            leading: 14,
            max_line_chars: 85,
        }
    }
}

// Helvetica with WinAnsiEncoding covers Latin-1, anything else becomes '?'
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) < 256 { c as u8 } else { b'?' })
        .collect()
}

// Continuation lines keep the indentation of the line they come from
fn wrap(line: &str, width: usize) -> Vec<String> {
    if line.chars().count() <= width {
        return vec![line.to_owned()];
    }
    let body = line.trim_start_matches(' ');
    let indent = &line[..line.len() - body.len()];
    let mut wrapped = Vec::new();
    let mut current = String::new();
    for word in body.split(' ').filter(|word| !word.is_empty()) {
        if !current.is_empty()
            && indent.len() + current.chars().count() + 1 + word.chars().count() > width
        {
            wrapped.push(format!("{}{}", indent, current));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    wrapped.push(format!("{}{}", indent, current));
    wrapped
}

impl PdfExporter {
    fn get_lines_per_page(&self) -> usize {
        ((self.page_height - 2 * self.margin) / self.leading).max(1) as usize
    }

    fn get_page_content(&self, lines: &[String]) -> Content {
        let top = self.page_height - self.margin - self.font_size;
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), self.font_size.into()]),
            Operation::new("TL", vec![self.leading.into()]),
            Operation::new("Td", vec![self.margin.into(), top.into()]),
        ];
        for line in lines {
            operations.push(Operation::new(
                "Tj",
                vec![Object::string_literal(encode_win_ansi(line))],
            ));
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));
        Content { operations }
    }

    pub fn build(&self, lines: &[String]) -> Result<Document> {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let font_id = document.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let wrapped: Vec<String> = lines
            .iter()
            .flat_map(|line| wrap(line, self.max_line_chars))
            .collect();
        let mut page_chunks: Vec<&[String]> = wrapped.chunks(self.get_lines_per_page()).collect();
        if page_chunks.is_empty() {
            page_chunks.push(&[]);
        }

        let mut kids: Vec<Object> = Vec::new();
        for chunk in page_chunks {
            let content = self.get_page_content(chunk);
            let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                self.page_width.into(),
                self.page_height.into(),
            ],
        };
        document.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        document.trailer.set("Root", catalog_id);
        document.compress();
        Ok(document)
    }
}

impl Exporter for PdfExporter {
    fn export(&self, lines: &[String], destination: &Path) -> Result<()> {
        let mut document = self.build(lines)?;
        document
            .save(destination)
            .with_context(|| format!("could not write {}", destination.display()))?;
        log::info!("Exported {} lines to {}", lines.len(), destination.display());
        Ok(())
    }
}
