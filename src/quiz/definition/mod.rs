use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

use crate::settings::Settings;

pub mod question;

pub use question::{Answer, Question};

lazy_static! {
    static ref SENTENCE_END_REGEX: Regex = Regex::new("[.!?]+").unwrap();
}

fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// Sentences and vocabulary a quiz is drawn from.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    pub sentences: Vec<String>,
    pub words: Vec<String>,
    pub key_terms: Vec<String>,
}

impl Corpus {
    pub fn new(text: &str, settings: &Settings) -> Corpus {
        let sentences: Vec<String> = SENTENCE_END_REGEX
            .split(text)
            .map(str::trim)
            .filter(|s| char_count(s) > settings.min_sentence_length)
            .map(str::to_owned)
            .collect();

        let words: Vec<String> = text
            .split_whitespace()
            .filter(|w| char_count(w) > settings.min_word_length)
            .map(str::to_owned)
            .collect();

        let key_terms = words
            .iter()
            .unique()
            .take(settings.max_key_terms)
            .cloned()
            .collect();

        Corpus {
            sentences,
            words,
            key_terms,
        }
    }
}
