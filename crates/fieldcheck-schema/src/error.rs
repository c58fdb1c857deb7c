/// Errors raised by the shape layer.
///
/// `ValidationFailed` is the basic type/shape error of a raw record: a field
/// of the wrong primitive type, a missing required field, or (in strict mode)
/// an unknown field. The remaining variants cover schema loading itself.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema could not be compiled.
    #[error("failed to compile schema for {record}: {message}")]
    CompileFailed { record: String, message: String },

    /// The record failed schema validation.
    #[error("{record} has an invalid shape: {message}")]
    ValidationFailed { record: String, message: String },

    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No schema registered for the given record name.
    #[error("no schema registered for record {0}")]
    NoSchema(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
