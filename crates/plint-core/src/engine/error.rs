use crate::core::models::params::ParamsError;
use thiserror::Error;

// Fatal errors only. Non-fatal conditions (missing hydrogens, missing
// aromatic or charge annotation) travel as `AnalysisResult::warnings`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid parameters: {source}")]
    InvalidParams {
        #[from]
        source: ParamsError,
    },
}
