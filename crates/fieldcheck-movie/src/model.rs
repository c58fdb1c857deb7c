use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::rules::{check_imdb_rating, check_ratings_present};

/// A film director.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    name: String,
    verified: bool,
}

impl Director {
    pub fn new(name: impl Into<String>, verified: bool) -> Self {
        Self {
            name: name.into(),
            verified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn verified(&self) -> bool {
        self.verified
    }
}

/// Unvalidated input for [`Movie::new`].
///
/// A rating set to `None` counts as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MovieFields {
    pub title: String,
    pub director: String,
    pub producer: String,
    pub box_office: f64,
    #[serde(default)]
    pub imdb_rating: Option<String>,
    #[serde(default)]
    pub rotten_tomatoes_rating: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub director_details: Option<Director>,
}

/// A movie record that passed validation.
///
/// Guarantees at least one rating was supplied and that any IMDb rating
/// is a number in `[0, 10]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    title: String,
    director: String,
    producer: String,
    box_office: f64,
    imdb_rating: Option<String>,
    rotten_tomatoes_rating: Option<String>,
    genre: Option<String>,
    director_details: Option<Director>,
}

impl Movie {
    /// Validate `fields` and build the movie.
    pub fn new(fields: MovieFields) -> Result<Self> {
        check_ratings_present(
            &fields.title,
            fields.imdb_rating.is_some(),
            fields.rotten_tomatoes_rating.is_some(),
        )?;
        Self::from_present_fields(fields)
    }

    /// Second stage of validation, once rating presence is settled.
    pub(crate) fn from_present_fields(fields: MovieFields) -> Result<Self> {
        if let Some(rating) = &fields.imdb_rating {
            check_imdb_rating(rating)?;
        }

        tracing::trace!(title = %fields.title, "movie accepted");
        Ok(Self {
            title: fields.title,
            director: fields.director,
            producer: fields.producer,
            box_office: fields.box_office,
            imdb_rating: fields.imdb_rating,
            rotten_tomatoes_rating: fields.rotten_tomatoes_rating,
            genre: fields.genre,
            director_details: fields.director_details,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }

    pub fn box_office(&self) -> f64 {
        self.box_office
    }

    pub fn imdb_rating(&self) -> Option<&str> {
        self.imdb_rating.as_deref()
    }

    /// The IMDb rating as a number.
    pub fn imdb_score(&self) -> Option<f64> {
        self.imdb_rating
            .as_deref()
            .and_then(|rating| check_imdb_rating(rating).ok())
    }

    pub fn rotten_tomatoes_rating(&self) -> Option<&str> {
        self.rotten_tomatoes_rating.as_deref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn director_details(&self) -> Option<&Director> {
        self.director_details.as_ref()
    }
}
