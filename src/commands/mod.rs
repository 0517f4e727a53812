use anyhow::{anyhow, bail, Context, Result};
use std::path::PathBuf;

use crate::app::Event;
use crate::quiz::QuestionKind;

pub mod answers;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Event(Event),
    Quit,
}

fn parse_kind(name: &str) -> Result<QuestionKind> {
    match name.to_lowercase().as_str() {
        "mcq" | "multiple" => Ok(QuestionKind::MultipleChoice),
        "vf" | "tf" => Ok(QuestionKind::TrueFalse),
        "corta" | "short" => Ok(QuestionKind::ShortAnswer),
        _ => bail!("Unknown question kind: {}", name),
    }
}

// Questions are numbered from 1 on screen
fn parse_question_number(word: Option<&str>) -> Result<usize> {
    let word = word.context("Question number cannot be blank")?;
    let number = word
        .parse::<usize>()
        .with_context(|| format!("Not a question number: {}", word))?;
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow!("Questions are numbered from 1"))
}

fn split_first_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.find(char::is_whitespace) {
        Some(position) => (&text[..position], text[position..].trim()),
        None => (text, ""),
    }
}

/// Interprets one line typed in the terminal. Blank lines give `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let (verb, rest) = split_first_word(line);
    let event = match verb.to_lowercase().as_str() {
        "" => return Ok(None),
        "salir" | "quit" => return Ok(Some(Command::Quit)),
        "ayuda" | "help" => Event::HelpRequested,
        "abrir" => {
            if rest.is_empty() {
                bail!("File name cannot be blank");
            }
            Event::FileSelected(PathBuf::from(rest))
        }
        "tipos" => Event::KindsRequested,
        "alternar" => Event::KindToggled(parse_kind(rest)?),
        "generar" => Event::GenerateRequested,
        "ver" => Event::ShowRequested,
        "elegir" | "responder" => {
            let (number, answer) = split_first_word(rest);
            let index = parse_question_number(Some(number).filter(|n| !n.is_empty()))?;
            if answer.is_empty() {
                bail!("Answer cannot be blank");
            }
            if verb.eq_ignore_ascii_case("elegir") {
                Event::OptionSelected(index, answer.to_owned())
            } else {
                Event::AnswerTyped(index, answer.to_owned())
            }
        }
        "verificar" => Event::AnswerChecked(parse_question_number(rest.split_whitespace().next())?),
        "calificar" => Event::GradeRequested,
        "exportar" => Event::ExportRequested(if rest.is_empty() {
            None
        } else {
            Some(PathBuf::from(rest))
        }),
        _ => bail!("Unknown command: {}", verb),
    };
    Ok(Some(Command::Event(event)))
}
