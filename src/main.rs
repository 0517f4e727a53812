use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod app;
mod commands;
mod error;
mod export;
mod output;
mod quiz;
mod settings;
mod source;

use app::{App, Event};
use commands::answers::AnswerSheet;
use commands::Command;
use output::terminal::TerminalOutput;
use output::QuizOutput;
use quiz::random::{self, RandomSource};
use quiz::QuestionKinds;
use settings::Settings;
use source::TextSource;

/// Builds a short quiz out of a .txt, .pdf or .docx document.
#[derive(Debug, Parser)]
#[command(name = "examgen", version)]
struct Args {
    /// Document to build the quiz from
    file: Option<PathBuf>,

    /// Leave out multiple choice questions
    #[arg(long)]
    no_mcq: bool,

    /// Leave out true/false questions
    #[arg(long)]
    no_tf: bool,

    /// Leave out short answer questions
    #[arg(long)]
    no_short: bool,

    /// Grade the answers in this question,answer CSV file and exit
    #[arg(long, value_name = "CSV")]
    answers: Option<PathBuf>,

    /// Export the generated quiz to this PDF file
    #[arg(long, value_name = "PDF")]
    export: Option<PathBuf>,

    /// Seed for reproducible quizzes
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file to use instead of the default one
    #[arg(long, value_name = "TOML")]
    settings: Option<PathBuf>,
}

impl Args {
    fn get_kinds(&self) -> QuestionKinds {
        QuestionKinds {
            multiple_choice: !self.no_mcq,
            true_false: !self.no_tf,
            short_answer: !self.no_short,
        }
    }

    fn get_random(&self) -> Box<dyn RandomSource> {
        match self.seed {
            Some(seed) => Box::new(random::from_seed(seed)),
            None => Box::new(random::from_thread()),
        }
    }
}

fn run_answer_sheet<O: QuizOutput>(app: &mut App<O>, sheet_path: &Path, export: Option<PathBuf>) -> Result<()> {
    let sheet = AnswerSheet::open(sheet_path)?;
    app.handle(Event::GenerateRequested);
    app.wait_for_document();
    if app.get_session().is_none() {
        return Ok(());
    }
    for event in sheet.get_events() {
        app.handle(event.clone());
    }
    app.handle(Event::GradeRequested);
    if export.is_some() {
        app.handle(Event::ExportRequested(export));
    }
    Ok(())
}

fn run_interactive<O: QuizOutput>(app: &mut App<O>) -> Result<()> {
    app.handle(Event::HelpRequested);
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().context("Could not write prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        app.tick();

        match commands::parse(&line) {
            Ok(None) => (),
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Event(event))) => {
                let generating = event == Event::GenerateRequested;
                app.handle(event);
                if generating {
                    app.wait_for_document();
                }
            }
            Err(e) => println!("{:#}\n", e),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let settings = Settings::load(args.settings.as_deref());
    let mut app = App::new(
        settings,
        args.get_kinds(),
        Arc::new(TextSource::default()),
        args.get_random(),
        export::default_exporter(),
        TerminalOutput::new(),
    );

    if let Some(file) = &args.file {
        app.handle(Event::FileSelected(file.clone()));
    }

    match &args.answers {
        Some(sheet_path) => run_answer_sheet(&mut app, sheet_path, args.export.clone()),
        None => {
            if let Some(destination) = &args.export {
                app.handle(Event::GenerateRequested);
                app.wait_for_document();
                app.handle(Event::ExportRequested(Some(destination.clone())));
            }
            run_interactive(&mut app)
        }
    }
}
