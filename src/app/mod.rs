use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::QuizError;
use crate::export::Exporter;
use crate::output::{sheet, Message, QuizOutput};
use crate::quiz::generator::{ensure_enough_text, generate};
use crate::quiz::random::RandomSource;
use crate::quiz::{Answer, Grade, QuestionKind, QuestionKinds, QuizSession};
use crate::settings::Settings;
use crate::source::loader::{DecodeHandle, DecodeState, Loader};
use crate::source::{DocumentFormat, TextSource};


#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    FileSelected(PathBuf),
    KindToggled(QuestionKind),
    KindsRequested,
    GenerateRequested,
    OptionSelected(usize, String),
    AnswerTyped(usize, String),
    SheetAnswer(usize, String),
    AnswerChecked(usize),
    GradeRequested,
    ExportRequested(Option<PathBuf>),
    ShowRequested,
    HelpRequested,
}

enum Phase {
    Idle,
    Loading(DecodeHandle),
    Quiz(QuizSession),
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Loading(handle) => write!(f, "Loading(request #{})", handle.get_request()),
            Phase::Quiz(session) => write!(f, "Quiz({} questions)", session.get_questions().len()),
        }
    }
}

pub struct App<O: QuizOutput> {
    settings: Settings,
    kinds: QuestionKinds,
    current_file: Option<PathBuf>,
    current_phase: Phase,
    loader: Loader,
    source: Arc<TextSource>,
    random: Box<dyn RandomSource>,
    exporter: Option<Box<dyn Exporter>>,
    output: O,
}

impl<O: QuizOutput> App<O> {
    pub fn new(
        settings: Settings,
        kinds: QuestionKinds,
        source: Arc<TextSource>,
        random: Box<dyn RandomSource>,
        exporter: Option<Box<dyn Exporter>>,
        output: O,
    ) -> Self {
        App {
            settings,
            kinds,
            current_file: None,
            current_phase: Phase::Idle,
            loader: Loader::new(),
            source,
            random,
            exporter,
            output,
        }
    }

    fn set_current_phase(&mut self, phase: Phase) {
        log::info!("Entering phase: {:?}", phase);
        self.current_phase = phase;
    }

    /// Runs one user interaction. Failures become notices, they never end the session.
    pub fn handle(&mut self, event: Event) {
        log::debug!("Handling event: {:?}", event);
        if let Err(e) = self.try_handle(event) {
            log::warn!("{}", e);
            self.report(e);
        }
    }

    fn try_handle(&mut self, event: Event) -> Result<(), QuizError> {
        match event {
            Event::FileSelected(path) => self.select_file(path),
            Event::KindToggled(kind) => {
                self.kinds.toggle(kind);
                self.output.say(&Message::KindsChanged(self.kinds));
                Ok(())
            }
            Event::KindsRequested => {
                self.output.say(&Message::KindsChanged(*self.get_kinds()));
                Ok(())
            }
            Event::GenerateRequested => self.generate(),
            Event::OptionSelected(index, option) => self.select_option(index, &option),
            Event::AnswerTyped(index, text) => self.answer(index, Answer::Text(text)),
            Event::SheetAnswer(index, raw) => {
                let kind = self.get_session_or_err()?.get_question(index)?.kind();
                match kind {
                    QuestionKind::ShortAnswer => self.answer(index, Answer::Text(raw)),
                    _ => self.select_option(index, &raw),
                }
            }
            Event::AnswerChecked(index) => self.check(index),
            Event::GradeRequested => self.grade().map(|_| ()),
            Event::ExportRequested(path) => self.export(path.as_deref()).map(|_| ()),
            Event::ShowRequested => {
                let questions = self.get_session_or_err()?.get_questions().to_vec();
                self.output.say(&Message::ExamReady(questions));
                Ok(())
            }
            Event::HelpRequested => {
                self.output.say(&Message::CommandHelp);
                Ok(())
            }
        }
    }

    fn report(&self, error: QuizError) {
        let message = match error {
            QuizError::UnsupportedFormat(name) => Message::UnsupportedFormat(name),
            QuizError::InsufficientText { .. } => Message::TextTooShort,
            QuizError::ExportUnavailable => Message::ExportUnavailable,
            other => Message::Error(other.to_string()),
        };
        self.output.say(&message);
    }

    pub fn get_kinds(&self) -> &QuestionKinds {
        &self.kinds
    }

    pub fn get_session(&self) -> Option<&QuizSession> {
        match &self.current_phase {
            Phase::Quiz(session) => Some(session),
            _ => None,
        }
    }

    fn get_session_or_err(&self) -> Result<&QuizSession, QuizError> {
        self.get_session().ok_or(QuizError::NoQuiz)
    }

    fn get_session_mut(&mut self) -> Result<&mut QuizSession, QuizError> {
        match &mut self.current_phase {
            Phase::Quiz(session) => Ok(session),
            _ => Err(QuizError::NoQuiz),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.current_phase {
            Phase::Loading(_) => true,
            _ => false,
        }
    }

    pub fn select_file(&mut self, path: PathBuf) -> Result<(), QuizError> {
        // Whatever was selected, decoding or being answered before is stale now
        self.current_file = None;
        self.loader.supersede_pending();
        match self.current_phase {
            Phase::Idle => (),
            _ => self.set_current_phase(Phase::Idle),
        }

        DocumentFormat::from_path(&path)?;
        self.output.say(&Message::DocumentSelected(path.clone()));
        self.current_file = Some(path);
        Ok(())
    }

    pub fn generate(&mut self) -> Result<(), QuizError> {
        let path = self.current_file.clone().ok_or(QuizError::NoDocument)?;
        self.output.say(&Message::Processing);

        let source = self.source.clone();
        let handle = self.loader.load(move || source.read_file(&path));
        self.set_current_phase(Phase::Loading(handle));
        Ok(())
    }

    /// Picks up a finished decode, if any.
    pub fn tick(&mut self) {
        let state = match &self.current_phase {
            Phase::Loading(handle) => handle.poll(),
            _ => return,
        };
        self.on_decode_state(state);
    }

    /// Blocks until the pending decode, if any, is over.
    pub fn wait_for_document(&mut self) {
        let phase = std::mem::replace(&mut self.current_phase, Phase::Idle);
        match phase {
            Phase::Loading(handle) => {
                let state = handle.wait();
                self.on_decode_state(state);
            }
            other => self.current_phase = other,
        }
    }

    fn on_decode_state(&mut self, state: DecodeState) {
        match state {
            DecodeState::InProgress => (),
            DecodeState::Superseded => {
                if self.is_loading() {
                    self.set_current_phase(Phase::Idle);
                }
            }
            DecodeState::Done(result) => {
                self.set_current_phase(Phase::Idle);
                if let Err(e) = result.and_then(|text| self.begin_quiz(&text)) {
                    log::warn!("{}", e);
                    self.report(e);
                }
            }
        }
    }

    fn begin_quiz(&mut self, text: &str) -> Result<(), QuizError> {
        ensure_enough_text(text, &self.settings)?;
        let questions = generate(text, &self.kinds, &self.settings, self.random.as_mut());
        log::info!("Generated {} questions", questions.len());
        if questions.is_empty() {
            self.output.say(&Message::NoQuestions);
        } else {
            self.output.say(&Message::ExamReady(questions.clone()));
        }
        self.set_current_phase(Phase::Quiz(QuizSession::new(questions)));
        Ok(())
    }

    fn answer(&mut self, index: usize, answer: Answer) -> Result<(), QuizError> {
        self.get_session_mut()?.record_answer(index, answer)?;
        self.output.say(&Message::AnswerRecorded(index));
        Ok(())
    }

    fn select_option(&mut self, index: usize, option: &str) -> Result<(), QuizError> {
        let question = self.get_session_or_err()?.get_question(index)?;
        let answer =
            sheet::resolve_option(question, option).ok_or(QuizError::AnswerKindMismatch(index + 1))?;
        self.answer(index, answer)
    }

    fn check(&mut self, index: usize) -> Result<(), QuizError> {
        let session = self.get_session_or_err()?;
        let question = session.get_question(index)?.clone();
        let correct = session.check(index).unwrap_or(false);
        self.output
            .say(&Message::AnswerFeedback(index, question, correct));
        Ok(())
    }

    pub fn grade(&mut self) -> Result<Grade, QuizError> {
        let session = self.get_session_or_err()?;
        let grade = session.grade();
        log::info!("Graded quiz: {} / {}", grade.score, grade.total);
        self.output.say(&Message::GradeReport(
            session.get_questions().to_vec(),
            grade.clone(),
        ));
        Ok(grade)
    }

    pub fn export(&mut self, destination: Option<&Path>) -> Result<PathBuf, QuizError> {
        let exporter = self.exporter.as_ref().ok_or(QuizError::ExportUnavailable)?;
        let session = self.get_session_or_err()?;
        let destination = destination
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.settings.export_file_name));
        let lines = sheet::get_exam_lines(session.get_questions());
        exporter
            .export(&lines, &destination)
            .map_err(QuizError::ExportFailed)?;
        self.output.say(&Message::Exported(destination.clone()));
        Ok(destination)
    }
}
