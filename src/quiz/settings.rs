#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QuestionKinds {
    pub multiple_choice: bool,
    pub true_false: bool,
    pub short_answer: bool,
}

impl Default for QuestionKinds {
    fn default() -> Self {
        QuestionKinds {
            multiple_choice: true,
            true_false: true,
            short_answer: true,
        }
    }
}

impl QuestionKinds {
    /// Kinds a question may be drawn from, multiple choice when nothing is enabled.
    pub fn get_enabled(&self) -> Vec<QuestionKind> {
        let mut kinds: Vec<QuestionKind> = [
            QuestionKind::MultipleChoice,
            QuestionKind::TrueFalse,
            QuestionKind::ShortAnswer,
        ]
        .iter()
        .copied()
        .filter(|kind| self.is_enabled(*kind))
        .collect();
        if kinds.is_empty() {
            kinds.push(QuestionKind::MultipleChoice);
        }
        kinds
    }

    pub fn toggle(&mut self, kind: QuestionKind) {
        match kind {
            QuestionKind::MultipleChoice => self.multiple_choice = !self.multiple_choice,
            QuestionKind::TrueFalse => self.true_false = !self.true_false,
            QuestionKind::ShortAnswer => self.short_answer = !self.short_answer,
        }
    }

    pub fn is_enabled(&self, kind: QuestionKind) -> bool {
        match kind {
            QuestionKind::MultipleChoice => self.multiple_choice,
            QuestionKind::TrueFalse => self.true_false,
            QuestionKind::ShortAnswer => self.short_answer,
        }
    }
}
