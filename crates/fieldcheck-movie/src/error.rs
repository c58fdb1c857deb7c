use fieldcheck_schema::SchemaError;

/// Neither an IMDb nor a Rotten Tomatoes rating was supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RatingsMissingError {
    /// Title of the rejected movie.
    pub title: String,
    pub message: String,
}

/// The IMDb rating is not a number in `[0, 10]`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ImdbRatingFormatError {
    /// The rejected rating text, verbatim.
    pub value: String,
    pub message: String,
}

/// Errors from building a [`crate::Movie`].
#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error(transparent)]
    RatingsMissing(#[from] RatingsMissingError),

    #[error(transparent)]
    ImdbRatingFormat(#[from] ImdbRatingFormatError),

    /// A raw record field has the wrong primitive type or is missing.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

pub type Result<T> = std::result::Result<T, MovieError>;
