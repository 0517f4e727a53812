use std::path::PathBuf;

use crate::quiz::{Grade, Question, QuestionKinds};

#[cfg(test)]
pub mod mock;
pub mod sheet;
pub mod terminal;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AnswerFeedback(usize, Question, bool),
    AnswerRecorded(usize),
    CommandHelp,
    DocumentSelected(PathBuf),
    Error(String),
    ExamReady(Vec<Question>),
    ExportUnavailable,
    Exported(PathBuf),
    GradeReport(Vec<Question>, Grade),
    KindsChanged(QuestionKinds),
    NoQuestions,
    Processing,
    TextTooShort,
    UnsupportedFormat(String),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
