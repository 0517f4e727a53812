use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::app::Event;

#[derive(Debug, Deserialize)]
struct RawAnswer {
    question: usize,
    answer: String,
}

/// Answers read from a `question,answer` CSV file, questions numbered from 1.
#[derive(Debug)]
pub struct AnswerSheet {
    events: Vec<Event>,
}

impl AnswerSheet {
    pub fn open(source: &Path) -> Result<AnswerSheet> {
        let file = File::open(source)
            .with_context(|| format!("Could not open answer sheet {}", source.display()))?;
        AnswerSheet::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSheet> {
        let mut events = Vec::new();
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        for answer in csv_reader.deserialize() {
            let raw_answer: RawAnswer = answer?;
            if raw_answer.question == 0 {
                bail!("Questions are numbered from 1");
            }
            events.push(Event::SheetAnswer(raw_answer.question - 1, raw_answer.answer));
        }
        Ok(AnswerSheet { events })
    }

    pub fn get_events(&self) -> &[Event] {
        &self.events
    }
}
