use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::ModelError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: ModelError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Cut position {cut} lies outside a trace of {residues} residues")]
    CutOutOfRange { cut: usize, residues: usize },
}
