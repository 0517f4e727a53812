use crate::error::QuizError;
use crate::quiz::definition::{Answer, Question};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grade {
    pub score: usize,
    pub total: usize,
    pub results: Vec<bool>,
}

/// Questions generated from one document and the answers given so far.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: Vec<Option<Answer>>,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        let answers = vec![None; questions.len()];
        QuizSession { questions, answers }
    }

    pub fn get_questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get_question(&self, index: usize) -> Result<&Question, QuizError> {
        self.questions
            .get(index)
            .ok_or(QuizError::NoSuchQuestion(index + 1))
    }

    pub fn get_answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index).and_then(Option::as_ref)
    }

    pub fn record_answer(&mut self, index: usize, answer: Answer) -> Result<(), QuizError> {
        let question = self.get_question(index)?;
        if !question.accepts(&answer) {
            return Err(QuizError::AnswerKindMismatch(index + 1));
        }
        self.answers[index] = Some(answer);
        Ok(())
    }

    /// Grades a single question, `None` if there is no such question.
    pub fn check(&self, index: usize) -> Option<bool> {
        let question = self.questions.get(index)?;
        Some(
            self.get_answer(index)
                .map_or(false, |answer| question.is_answer_correct(answer)),
        )
    }

    pub fn grade(&self) -> Grade {
        let results: Vec<bool> = (0..self.questions.len())
            .map(|index| self.check(index).unwrap_or(false))
            .collect();
        Grade {
            score: results.iter().filter(|correct| **correct).count(),
            total: self.questions.len(),
            results,
        }
    }
}
