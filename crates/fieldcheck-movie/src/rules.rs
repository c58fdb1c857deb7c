//! Field rules for movie records.

use std::ops::RangeInclusive;

use crate::error::{ImdbRatingFormatError, RatingsMissingError};

/// Accepted IMDb scores, both ends inclusive.
pub const IMDB_RATING_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// Require that at least one rating was supplied.
///
/// Only presence counts: an empty or null rating still satisfies the rule.
pub fn check_ratings_present(
    title: &str,
    has_imdb_rating: bool,
    has_rotten_tomatoes_rating: bool,
) -> Result<(), RatingsMissingError> {
    if !has_imdb_rating && !has_rotten_tomatoes_rating {
        tracing::debug!(title, "movie has no ratings");
        return Err(RatingsMissingError {
            title: title.to_string(),
            message: "Movie should have either an IMDb rating or Rotten Tomatoes rating."
                .to_string(),
        });
    }
    Ok(())
}

/// Parse an IMDb rating and check it lies in [`IMDB_RATING_RANGE`].
///
/// Surrounding whitespace is ignored when parsing.
pub fn check_imdb_rating(value: &str) -> Result<f64, ImdbRatingFormatError> {
    let score: f64 = value.trim().parse().map_err(|_| {
        tracing::debug!(value, "IMDb rating is not a number");
        ImdbRatingFormatError {
            value: value.to_string(),
            message: "IMDb rating should be a number.".to_string(),
        }
    })?;

    // NaN fails `contains` as well.
    if !IMDB_RATING_RANGE.contains(&score) {
        tracing::debug!(value, score, "IMDb rating out of range");
        return Err(ImdbRatingFormatError {
            value: value.to_string(),
            message: "IMDb rating should be between 0 and 10.".to_string(),
        });
    }

    Ok(score)
}
