use thiserror::Error;

#[derive(Error, Debug)]
pub enum AptupError {
    #[error("External tool failed: {0}")]
    ExternalTool(String),

    #[error("Log file error: {0}")]
    LogFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AptupError>;
