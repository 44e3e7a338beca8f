use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Missing required column(s): {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("Parse error in row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn parse(row: usize, message: impl Into<String>) -> Self {
        DashboardError::Parse {
            row,
            message: message.into(),
        }
    }

    /// Load-time errors end the session; everything else is recoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            DashboardError::SourceNotFound { .. }
                | DashboardError::Schema { .. }
                | DashboardError::Parse { .. }
                | DashboardError::Csv(_)
                | DashboardError::Io(_)
        )
    }
}
