use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
