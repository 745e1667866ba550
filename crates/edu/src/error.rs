//! CLI error types.

use edu_config::ConfigError;
use edu_curriculum::CurriculumError;
use edu_storage::{ExportError, StorageError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Curriculum(#[from] CurriculumError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Export(#[from] ExportError),

    #[error("{0}")]
    Validation(String),
}
