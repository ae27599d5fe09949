use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::data::LoadError;
use crate::engine::EngineError;
use crate::snippet::SnippetError;

/// Error type for the application as a whole.
#[derive(Debug, Error)]
pub enum Error {
    #[error("quiz engine: {0}")]
    Engine(#[from] EngineError),
    #[error("failed to load questions: {0}")]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("snippet panel: {0}")]
    Snippet(#[from] SnippetError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
