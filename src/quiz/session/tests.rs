use super::*;
use crate::quiz::generator::generate;
use crate::quiz::random::from_thread;
use crate::quiz::settings::QuestionKinds;
use crate::settings::Settings;

fn sample_questions() -> Vec<Question> {
    vec![
        Question::MultipleChoice {
            prompt: "El __________ procesa datos correctamente".to_owned(),
            options: vec![
                "datos".to_owned(),
                "sistema".to_owned(),
                "procesa".to_owned(),
                "datos".to_owned(),
            ],
            correct: "sistema".to_owned(),
        },
        Question::TrueFalse {
            statement: "Falso: correctamente datos procesa sistema El".to_owned(),
            truth: false,
        },
        Question::ShortAnswer {
            prompt: "El sistema procesa __________ correctamente".to_owned(),
            answer: "answer".to_owned(),
        },
    ]
}

#[test]
fn unanswered_questions_are_incorrect() {
    let session = QuizSession::new(sample_questions());
    let grade = session.grade();
    assert_eq!(grade.score, 0);
    assert_eq!(grade.total, 3);
    assert_eq!(grade.results, vec![false, false, false]);
}

#[test]
fn grades_each_kind() {
    let mut session = QuizSession::new(sample_questions());
    assert!(session
        .record_answer(0, Answer::Choice("sistema".to_owned()))
        .is_ok());
    assert!(session.record_answer(1, Answer::Boolean(false)).is_ok());
    assert!(session
        .record_answer(2, Answer::Text(" Answer ".to_owned()))
        .is_ok());
    let grade = session.grade();
    assert_eq!(grade.score, 3);
    assert_eq!(grade.total, 3);
}

#[test]
fn later_answers_overwrite_earlier_ones() {
    let mut session = QuizSession::new(sample_questions());
    session.record_answer(1, Answer::Boolean(false)).unwrap();
    assert_eq!(session.grade().score, 1);
    session.record_answer(1, Answer::Boolean(true)).unwrap();
    assert_eq!(session.grade().score, 0);
    assert_eq!(session.get_answer(1), Some(&Answer::Boolean(true)));
}

#[test]
fn grading_is_idempotent() {
    let mut session = QuizSession::new(sample_questions());
    session
        .record_answer(0, Answer::Choice("datos".to_owned()))
        .unwrap();
    session
        .record_answer(2, Answer::Text("answer".to_owned()))
        .unwrap();
    let first = session.grade();
    let second = session.grade();
    assert_eq!(first, second);
    assert_eq!(first.results, vec![false, false, true]);
    assert_eq!(session.get_answer(0), Some(&Answer::Choice("datos".to_owned())));
}

#[test]
fn rejects_unknown_questions() {
    let mut session = QuizSession::new(sample_questions());
    match session.record_answer(3, Answer::Boolean(true)) {
        Err(QuizError::NoSuchQuestion(4)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
    assert_eq!(session.check(3), None);
}

#[test]
fn rejects_answers_of_the_wrong_kind() {
    let mut session = QuizSession::new(sample_questions());
    match session.record_answer(0, Answer::Boolean(true)) {
        Err(QuizError::AnswerKindMismatch(1)) => (),
        other => panic!("Unexpected result: {:?}", other),
    }
    assert_eq!(session.get_answer(0), None);
}

#[test]
fn checks_single_questions() {
    let mut session = QuizSession::new(sample_questions());
    assert_eq!(session.check(2), Some(false));
    session
        .record_answer(2, Answer::Text("ANSWER".to_owned()))
        .unwrap();
    assert_eq!(session.check(2), Some(true));
}

#[test]
fn generated_quiz_can_be_graded() {
    let text = vec!["El sistema procesa datos correctamente"; 60].join(". ");
    let questions = generate(
        &text,
        &QuestionKinds::default(),
        &Settings::default(),
        &mut from_thread(),
    );
    let mut session = QuizSession::new(questions);
    for index in 0..session.get_questions().len() {
        let answer = session.get_questions()[index].get_correct_answer();
        session.record_answer(index, answer).unwrap();
    }
    let grade = session.grade();
    assert_eq!(grade.total, 6);
    assert_eq!(grade.score, 6);
}
