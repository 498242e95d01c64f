use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown breakpoint: {0}")]
    UnknownBreakpoint(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
