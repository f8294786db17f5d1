//! Error types for the modal analysis.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by [`crate::analysis::ModalAnalyzer`]
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid analysis input: {0}")]
    InvalidInput(String),

    #[error("Failed to read WAV file {}: {source}", path.display())]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Recording contains no samples: {}", .0.display())]
    EmptyRecording(PathBuf),

    #[error("Failed to write plot {}: {source}", path.display())]
    Plot {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    ReportIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    ReportJson(#[from] serde_json::Error),
}

/// Analysis result type
pub type AnalysisResult<T> = Result<T, AnalysisError>;
