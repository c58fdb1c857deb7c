//! Movie records with conditional rating requirements.
//!
//! A [`Movie`] needs an IMDb rating, a Rotten Tomatoes rating, or both.
//! An IMDb rating must read as a number between 0 and 10 inclusive; the
//! Rotten Tomatoes rating is free text.
//!
//! Typed input goes through [`Movie::new`]. Raw JSON goes through
//! [`MovieValidator`], which also reports shape errors and sees whether a
//! rating key was supplied at all.

pub mod error;
pub mod model;
pub mod rules;
pub mod validator;

pub use error::{ImdbRatingFormatError, MovieError, RatingsMissingError, Result};
pub use model::{Director, Movie, MovieFields};
pub use rules::{check_imdb_rating, check_ratings_present, IMDB_RATING_RANGE};
pub use validator::{
    MovieValidator, DIRECTOR_RECORD, DIRECTOR_SCHEMA, MOVIE_RECORD, MOVIE_SCHEMA,
};
