use std::fmt;
use std::io;

use fieldcheck_ean::EanError;
use fieldcheck_movie::MovieError;
use fieldcheck_schema::SchemaError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => USAGE,
        _ => FAILURE,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn schema_error(context: &str, err: SchemaError) -> CliError {
    match err {
        SchemaError::ValidationFailed { .. } | SchemaError::InvalidJson(_) => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

pub fn ean_error(context: &str, err: EanError) -> CliError {
    match err {
        EanError::Format(err) => CliError::new(
            DATA_INVALID,
            format!("{context}: {} ({:?})", err.message, err.value),
        ),
        EanError::Schema(err) => schema_error(context, err),
    }
}

pub fn movie_error(context: &str, err: MovieError) -> CliError {
    match err {
        MovieError::RatingsMissing(err) => CliError::new(
            DATA_INVALID,
            format!("{context}: {} (title {:?})", err.message, err.title),
        ),
        MovieError::ImdbRatingFormat(err) => CliError::new(
            DATA_INVALID,
            format!("{context}: {} (got {:?})", err.message, err.value),
        ),
        MovieError::Schema(err) => schema_error(context, err),
    }
}
