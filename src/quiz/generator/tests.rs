use super::*;
use crate::quiz::random::from_seed;
use crate::quiz::random::scripted::ScriptedRandom;

const SENTENCE: &str = "El sistema procesa datos correctamente";

fn only(kind: QuestionKind) -> QuestionKinds {
    QuestionKinds {
        multiple_choice: kind == QuestionKind::MultipleChoice,
        true_false: kind == QuestionKind::TrueFalse,
        short_answer: kind == QuestionKind::ShortAnswer,
    }
}

fn repeated_text(repetitions: usize) -> String {
    vec![SENTENCE; repetitions].join(". ") + "."
}

#[test]
fn repeated_sentence_yields_six_questions() {
    let text = repeated_text(60);
    let settings = Settings::default();
    assert!(ensure_enough_text(&text, &settings).is_ok());
    let questions = generate(&text, &QuestionKinds::default(), &settings, &mut from_seed(1));
    assert_eq!(questions.len(), 6);
}

#[test]
fn question_count_is_capped_by_sentence_count() {
    let text = repeated_text(2);
    let questions = generate(
        &text,
        &QuestionKinds::default(),
        &Settings::default(),
        &mut from_seed(2),
    );
    assert_eq!(questions.len(), 2);
}

#[test]
fn no_sentences_means_no_questions() {
    let text = "Hola. Qué tal. Bien. Nada más por ahora. Adiós amigos.";
    let questions = generate(
        text,
        &QuestionKinds::default(),
        &Settings::default(),
        &mut from_seed(3),
    );
    assert!(questions.is_empty());
}

#[test]
fn questions_only_use_enabled_kinds() {
    let text = repeated_text(10);
    for seed in 0..20 {
        let questions = generate(
            &text,
            &only(QuestionKind::TrueFalse),
            &Settings::default(),
            &mut from_seed(seed),
        );
        assert!(questions
            .iter()
            .all(|q| q.kind() == QuestionKind::TrueFalse));
    }
}

#[test]
fn nothing_enabled_falls_back_to_multiple_choice() {
    let kinds = QuestionKinds {
        multiple_choice: false,
        true_false: false,
        short_answer: false,
    };
    let questions = generate(&repeated_text(10), &kinds, &Settings::default(), &mut from_seed(4));
    assert_eq!(questions.len(), 6);
    assert!(questions
        .iter()
        .all(|q| q.kind() == QuestionKind::MultipleChoice));
}

#[test]
fn multiple_choice_offers_four_options_including_the_answer() {
    let text = "Los planetas giran alrededor del sol. La fotosíntesis convierte la luz en energía química. El agua hierve a cien grados centígrados.";
    for seed in 0..50 {
        let questions = generate(
            text,
            &only(QuestionKind::MultipleChoice),
            &Settings::default(),
            &mut from_seed(seed),
        );
        assert_eq!(questions.len(), 3);
        for question in questions {
            match question {
                Question::MultipleChoice {
                    options, correct, ..
                } => {
                    assert_eq!(options.len(), 4);
                    assert!(options.contains(&correct));
                }
                _ => panic!("Expected a multiple choice question"),
            }
        }
    }
}

#[test]
fn multiple_choice_blanks_first_long_word() {
    let text = format!("{}.", SENTENCE);
    // kind, keyword, three key terms, then an identity shuffle
    let mut random = ScriptedRandom::new().indices(&[0, 1, 0, 2, 3, 3, 2, 1]);
    let questions = generate(
        &text,
        &only(QuestionKind::MultipleChoice),
        &Settings::default(),
        &mut random,
    );
    assert_eq!(
        questions,
        vec![Question::MultipleChoice {
            prompt: "El __________ procesa datos correctamente".to_owned(),
            options: vec![
                "procesa".to_owned(),
                "sistema".to_owned(),
                "datos".to_owned(),
                "correctamente.".to_owned(),
            ],
            correct: "procesa".to_owned(),
        }]
    );
}

#[test]
fn multiple_choice_falls_back_on_sparse_vocabulary() {
    let text = "a b c d e f g h i j k l.";
    let mut random = ScriptedRandom::new().indices(&[0, 3, 2, 1]);
    let questions = generate(
        text,
        &only(QuestionKind::MultipleChoice),
        &Settings::default(),
        &mut random,
    );
    assert_eq!(
        questions,
        vec![Question::MultipleChoice {
            prompt: "a b c d e f g h i j k l".to_owned(),
            options: vec![
                "palabra".to_owned(),
                "Opción 1".to_owned(),
                "Opción 2".to_owned(),
                "Opción 3".to_owned(),
            ],
            correct: "palabra".to_owned(),
        }]
    );
}

#[test]
fn true_statements_are_verbatim() {
    let text = format!("{}.", SENTENCE);
    let mut random = ScriptedRandom::new().chances(&[true]);
    let questions = generate(&text, &only(QuestionKind::TrueFalse), &Settings::default(), &mut random);
    assert_eq!(
        questions,
        vec![Question::TrueFalse {
            statement: SENTENCE.to_owned(),
            truth: true,
        }]
    );
}

#[test]
fn false_statements_reverse_words() {
    let text = format!("{}.", SENTENCE);
    let mut random = ScriptedRandom::new().chances(&[false]);
    let questions = generate(&text, &only(QuestionKind::TrueFalse), &Settings::default(), &mut random);
    assert_eq!(
        questions,
        vec![Question::TrueFalse {
            statement: "Falso: correctamente datos procesa sistema El".to_owned(),
            truth: false,
        }]
    );
}

#[test]
fn short_answer_blanks_drawn_position() {
    let text = format!("{}.", SENTENCE);
    let mut random = ScriptedRandom::new().indices(&[0, 2]);
    let questions = generate(
        &text,
        &only(QuestionKind::ShortAnswer),
        &Settings::default(),
        &mut random,
    );
    assert_eq!(
        questions,
        vec![Question::ShortAnswer {
            prompt: "El sistema __________ datos correctamente".to_owned(),
            answer: "procesa".to_owned(),
        }]
    );
}

#[test]
fn short_answer_can_be_put_back_in_place() {
    let text = "Los planetas giran alrededor del sol. La fotosíntesis convierte la luz en energía química. El agua hierve a cien grados centígrados.";
    let settings = Settings::default();
    let corpus = Corpus::new(text, &settings);
    for seed in 0..30 {
        let questions = generate(
            text,
            &only(QuestionKind::ShortAnswer),
            &settings,
            &mut from_seed(seed),
        );
        for (question, sentence) in questions.iter().zip(corpus.sentences.iter()) {
            match question {
                Question::ShortAnswer { prompt, answer } => {
                    let position = prompt
                        .split(' ')
                        .position(|token| token == settings.blank)
                        .unwrap();
                    let restored = prompt.replacen(&settings.blank, answer, 1);
                    assert_eq!(&restored, sentence);
                    assert_eq!(sentence.split(' ').nth(position), Some(answer.as_str()));
                }
                _ => panic!("Expected a short answer question"),
            }
        }
    }
}

#[test]
fn questions_follow_sentence_order() {
    let text = "Primera oración bastante larga. Segunda oración también larga.";
    let mut random = ScriptedRandom::new().indices(&[0, 0, 0, 0]);
    let questions = generate(
        text,
        &only(QuestionKind::ShortAnswer),
        &Settings::default(),
        &mut random,
    );
    assert_eq!(
        questions,
        vec![
            Question::ShortAnswer {
                prompt: "__________ oración bastante larga".to_owned(),
                answer: "Primera".to_owned(),
            },
            Question::ShortAnswer {
                prompt: "__________ oración también larga".to_owned(),
                answer: "Segunda".to_owned(),
            },
        ]
    );
}

#[test]
fn short_text_is_refused() {
    let settings = Settings::default();
    let text = "a".repeat(49);
    match ensure_enough_text(&text, &settings) {
        Err(QuizError::InsufficientText { length, minimum }) => {
            assert_eq!(length, 49);
            assert_eq!(minimum, 50);
        }
        _ => panic!("Expected an insufficient text error"),
    }
    let padded = format!("   {}\n\n", text);
    assert!(ensure_enough_text(&padded, &settings).is_err());
    assert!(ensure_enough_text(&"a".repeat(50), &settings).is_ok());
}
