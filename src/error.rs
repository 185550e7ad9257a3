use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input for {field}: {problem}")]
    InvalidInput { field: String, problem: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(field: impl Into<String>, problem: impl Into<String>) -> Self {
        Error::InvalidInput {
            field: field.into(),
            problem: problem.into(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput { .. } => "INVALID_INPUT",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
