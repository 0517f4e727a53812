use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not read document: {0:#}")]
    Read(anyhow::Error),

    #[error("Document text is too short ({length} characters, {minimum} required)")]
    InsufficientText { length: usize, minimum: usize },

    #[error("PDF export is not available in this build")]
    ExportUnavailable,

    #[error("Could not export the quiz: {0:#}")]
    ExportFailed(anyhow::Error),

    #[error("There is no question #{0}")]
    NoSuchQuestion(usize),

    #[error("This kind of answer does not fit question #{0}")]
    AnswerKindMismatch(usize),

    #[error("No document selected")]
    NoDocument,

    #[error("There is no active quiz")]
    NoQuiz,
}
