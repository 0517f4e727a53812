use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

use crate::source::DocxText;

const DOCUMENT_ENTRY: &str = "word/document.xml";

pub struct ZipDocx;

fn read_document_xml(bytes: &[u8]) -> Result<String> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).context("not a DOCX archive")?;
    let mut entry = archive
        .by_name(DOCUMENT_ENTRY)
        .context("DOCX archive has no document body")?;
    let mut xml = String::new();
    entry.read_to_string(&mut xml)?;
    Ok(xml)
}

fn collect_text(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut text = String::new();
    let mut inside_text_run = false;
    loop {
        match reader.read_event().context("malformed DOCX body")? {
            Event::Start(e) => {
                if e.name().as_ref() == b"w:t" {
                    inside_text_run = true;
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => inside_text_run = false,
                b"w:p" => text.push('\n'),
                _ => (),
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => text.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => text.push('\n'),
                _ => (),
            },
            Event::Text(t) => {
                if inside_text_run {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => (),
        }
    }
    Ok(text)
}

impl DocxText for ZipDocx {
    fn get_text(&self, bytes: &[u8]) -> Result<String> {
        let xml = read_document_xml(bytes)?;
        collect_text(&xml)
    }
}
