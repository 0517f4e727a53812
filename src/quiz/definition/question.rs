use crate::quiz::settings::QuestionKind;

fn sanitize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Question {
    MultipleChoice {
        prompt: String,
        options: Vec<String>,
        correct: String,
    },
    TrueFalse {
        statement: String,
        truth: bool,
    },
    ShortAnswer {
        prompt: String,
        answer: String,
    },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Answer {
    Choice(String),
    Boolean(bool),
    Text(String),
}

impl Question {
    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::TrueFalse { .. } => QuestionKind::TrueFalse,
            Question::ShortAnswer { .. } => QuestionKind::ShortAnswer,
        }
    }

    pub fn accepts(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::MultipleChoice { .. }, Answer::Choice(_)) => true,
            (Question::TrueFalse { .. }, Answer::Boolean(_)) => true,
            (Question::ShortAnswer { .. }, Answer::Text(_)) => true,
            _ => false,
        }
    }

    pub fn is_answer_correct(&self, answer: &Answer) -> bool {
        match (self, answer) {
            (Question::MultipleChoice { correct, .. }, Answer::Choice(choice)) => choice == correct,
            (Question::TrueFalse { truth, .. }, Answer::Boolean(value)) => value == truth,
            (Question::ShortAnswer { answer, .. }, Answer::Text(text)) => {
                sanitize(text) == sanitize(answer)
            }
            _ => false,
        }
    }

    pub fn get_correct_answer(&self) -> Answer {
        match self {
            Question::MultipleChoice { correct, .. } => Answer::Choice(correct.clone()),
            Question::TrueFalse { truth, .. } => Answer::Boolean(*truth),
            Question::ShortAnswer { answer, .. } => Answer::Text(answer.clone()),
        }
    }
}
