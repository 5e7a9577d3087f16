use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Category tag that is not one of the four supported lists.
    #[error("unknown gene list category: '{tag}'")]
    UnknownCategory { tag: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
