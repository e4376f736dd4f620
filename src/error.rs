use std::path::PathBuf;

use thiserror::Error;

use crate::models::draft_state::DraftRole;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("unable to read hero data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to parse hero data {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid hero record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
    #[error("hero [{0}] is defined more than once")]
    DuplicateHero(String),
    #[error("alias [{alias}] is used by both [{first}] and [{second}]")]
    AliasConflict {
        alias: String,
        first: String,
        second: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Unknown hero: {input}{}", format_suggestions(.suggestions))]
    UnknownHero {
        input: String,
        suggestions: Vec<String>,
    },
    #[error("{hero} is already {role}")]
    DuplicatePick { hero: String, role: DraftRole },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean {}?)", suggestions.join(", "))
    }
}
