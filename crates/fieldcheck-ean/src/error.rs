use fieldcheck_schema::SchemaError;

/// An EAN code does not have the right format.
///
/// Wrong length and non-digit characters are reported the same way; the
/// message only names the expected length.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct EanFormatError {
    /// The rejected input, verbatim.
    pub value: String,
    /// Human-readable reason.
    pub message: String,
}

impl EanFormatError {
    pub(crate) fn expected_length(value: &str, expected: usize) -> Self {
        Self {
            value: value.to_string(),
            message: format!("EAN code should be exactly {expected} digits."),
        }
    }
}

/// Errors from validating a raw EAN record.
#[derive(Debug, thiserror::Error)]
pub enum EanError {
    /// The code itself is malformed.
    #[error(transparent)]
    Format(#[from] EanFormatError),

    /// The raw record has the wrong shape (e.g. `value` is not a string).
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, EanError>;
