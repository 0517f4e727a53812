//! Printable form of a quiz, shared by the terminal and by PDF export.

use crate::quiz::{Answer, Question};

pub const TITLE: &str = "Examen Interactivo";
pub const TRUE_LABEL: &str = "Verdadero";
pub const FALSE_LABEL: &str = "Falso";

const OPTION_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

pub fn get_option_letter(index: usize) -> char {
    OPTION_LETTERS.chars().nth(index).unwrap_or('?')
}

pub fn get_question_text(question: &Question) -> String {
    match question {
        Question::MultipleChoice { prompt, .. } => {
            format!("¿Qué palabra completa mejor: \"{}\"?", prompt)
        }
        Question::TrueFalse { statement, .. } => statement.clone(),
        Question::ShortAnswer { prompt, .. } => format!("Complete: \"{}\"", prompt),
    }
}

/// Options offered for a question, in display order. Short answers have none.
pub fn get_presented_options(question: &Question) -> Vec<String> {
    match question {
        Question::MultipleChoice { options, .. } => options.clone(),
        Question::TrueFalse { .. } => vec![TRUE_LABEL.to_owned(), FALSE_LABEL.to_owned()],
        Question::ShortAnswer { .. } => Vec::new(),
    }
}

pub fn parse_truth(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_ref() {
        "verdadero" | "v" | "true" | "t" => Some(true),
        "falso" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Turns an option letter, or the text of an option, into an answer.
pub fn resolve_option(question: &Question, raw: &str) -> Option<Answer> {
    let raw = raw.trim();
    let options = get_presented_options(question);
    let mut chars = raw.chars();
    let by_letter = match (chars.next(), chars.next()) {
        (Some(letter), None) => OPTION_LETTERS
            .find(letter.to_ascii_lowercase())
            .filter(|index| *index < options.len())
            .map(|index| options[index].clone()),
        _ => None,
    };
    let chosen = by_letter.or_else(|| options.iter().find(|o| o.as_str() == raw).cloned());

    match question {
        Question::MultipleChoice { .. } => chosen.map(Answer::Choice),
        Question::TrueFalse { .. } => chosen
            .map(|label| label == TRUE_LABEL)
            .or_else(|| parse_truth(raw))
            .map(Answer::Boolean),
        Question::ShortAnswer { .. } => None,
    }
}

pub fn describe_answer(answer: &Answer) -> String {
    match answer {
        Answer::Choice(choice) => choice.clone(),
        Answer::Boolean(true) => TRUE_LABEL.to_owned(),
        Answer::Boolean(false) => FALSE_LABEL.to_owned(),
        Answer::Text(text) => text.clone(),
    }
}

pub fn get_exam_lines(questions: &[Question]) -> Vec<String> {
    let mut lines = vec![TITLE.to_owned(), String::new()];
    for (index, question) in questions.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, get_question_text(question)));
        for (option_index, option) in get_presented_options(question).iter().enumerate() {
            lines.push(format!("   {}) {}", get_option_letter(option_index), option));
        }
        if let Question::ShortAnswer { .. } = question {
            lines.push("   Respuesta: ____________________".to_owned());
        }
        lines.push(String::new());
    }
    lines
}
