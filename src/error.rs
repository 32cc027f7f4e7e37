use thiserror::Error;

pub type Result<T> = std::result::Result<T, EquationError>;

#[derive(Debug, Error)]
pub enum EquationError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unsupported equation: {0}")]
    Unsupported(String),
    #[error("no {target} nice equations after {rounds} rounds (found {found})")]
    Exhausted {
        rounds: usize,
        found: usize,
        target: usize,
    },
}
