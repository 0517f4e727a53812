use itertools::Itertools;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::error::QuizError;
use crate::quiz::definition::{Corpus, Question};
use crate::quiz::random::{shuffle, RandomSource};
use crate::quiz::settings::{QuestionKind, QuestionKinds};
use crate::settings::Settings;

#[cfg(test)]
mod tests;

const FALLBACK_KEYWORD: &str = "palabra";
const FALLBACK_OPTIONS: [&str; 3] = ["Opción 1", "Opción 2", "Opción 3"];

lazy_static! {
    static ref BLANKABLE_WORD_REGEX: Regex = Regex::new(r"\b\w{4,}\b").unwrap();
}

pub fn ensure_enough_text(text: &str, settings: &Settings) -> Result<(), QuizError> {
    let length = text.trim().chars().count();
    if length < settings.min_text_length {
        return Err(QuizError::InsufficientText {
            length,
            minimum: settings.min_text_length,
        });
    }
    Ok(())
}

pub fn generate(
    text: &str,
    kinds: &QuestionKinds,
    settings: &Settings,
    random: &mut dyn RandomSource,
) -> Vec<Question> {
    let corpus = Corpus::new(text, settings);
    let enabled_kinds = kinds.get_enabled();
    let generator = Generator {
        corpus: &corpus,
        settings,
    };

    corpus
        .sentences
        .iter()
        .take(settings.max_questions)
        .map(|sentence| {
            let kind = enabled_kinds[random.index(enabled_kinds.len())];
            match kind {
                QuestionKind::MultipleChoice => generator.multiple_choice(sentence, random),
                QuestionKind::TrueFalse => generator.true_false(sentence, random),
                QuestionKind::ShortAnswer => generator.short_answer(sentence, random),
            }
        })
        .collect()
}

struct Generator<'a> {
    corpus: &'a Corpus,
    settings: &'a Settings,
}

impl<'a> Generator<'a> {
    fn draw<'b>(pool: &'b [String], random: &mut dyn RandomSource) -> Option<&'b str> {
        if pool.is_empty() {
            None
        } else {
            Some(pool[random.index(pool.len())].as_str())
        }
    }

    // The keyword is drawn from the whole text and need not be the blanked word.
    fn multiple_choice(&self, sentence: &str, random: &mut dyn RandomSource) -> Question {
        let keyword = Self::draw(&self.corpus.words, random)
            .unwrap_or(FALLBACK_KEYWORD)
            .to_owned();

        let mut options = vec![keyword.clone()];
        for fallback in FALLBACK_OPTIONS.iter() {
            let option = Self::draw(&self.corpus.key_terms, random).unwrap_or(*fallback);
            options.push(option.to_owned());
        }
        shuffle(&mut options, random);

        let prompt = BLANKABLE_WORD_REGEX
            .replace(sentence, NoExpand(&self.settings.blank))
            .into_owned();

        Question::MultipleChoice {
            prompt,
            options,
            correct: keyword,
        }
    }

    fn true_false(&self, sentence: &str, random: &mut dyn RandomSource) -> Question {
        if random.chance(self.settings.true_statement_probability) {
            Question::TrueFalse {
                statement: sentence.to_owned(),
                truth: true,
            }
        } else {
            let reversed = sentence.split_whitespace().rev().join(" ");
            Question::TrueFalse {
                statement: format!("{}{}", self.settings.false_prefix, reversed),
                truth: false,
            }
        }
    }

    fn short_answer(&self, sentence: &str, random: &mut dyn RandomSource) -> Question {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        let position = random.index(tokens.len());
        let prompt = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                if i == position {
                    self.settings.blank.as_str()
                } else {
                    *token
                }
            })
            .join(" ");

        Question::ShortAnswer {
            prompt,
            answer: tokens[position].to_owned(),
        }
    }
}
