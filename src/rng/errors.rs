use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RngError {
    #[error("Seed key cannot be empty")]
    EmptyKey,
}
