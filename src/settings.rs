use anyhow::{Context, Result};
use directories_next::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub max_questions: usize,
    pub min_text_length: usize,
    pub min_sentence_length: usize,
    pub min_word_length: usize,
    pub max_key_terms: usize,
    pub true_statement_probability: f64,
    pub blank: String,
    pub false_prefix: String,
    pub export_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_questions: 6,
            min_text_length: 50,
            min_sentence_length: 20,
            min_word_length: 4,
            max_key_terms: 20,
            true_statement_probability: 0.7,
            blank: "__________".to_owned(),
            false_prefix: "Falso: ".to_owned(),
            export_file_name: "examen_generado.pdf".to_owned(),
        }
    }
}

fn get_default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "lesforges", "examgen")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

impl Settings {
    pub fn parse(content: &str) -> Result<Settings> {
        toml::from_str(content).context("invalid settings file")
    }

    pub fn open(path: &Path) -> Result<Settings> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Settings::parse(&content)
    }

    // Settings files are optional, a broken one falls back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Settings {
        let path = match explicit_path {
            Some(p) => p.to_path_buf(),
            None => match get_default_settings_path() {
                Some(p) if p.exists() => p,
                _ => return Settings::default(),
            },
        };
        match Settings::open(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings: {:#}", e);
                Settings::default()
            }
        }
    }
}
