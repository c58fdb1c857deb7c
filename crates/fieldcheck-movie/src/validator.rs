use fieldcheck_schema::{RegistryConfig, SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::error::Result;
use crate::model::{Director, Movie, MovieFields};
use crate::rules::{check_imdb_rating, check_ratings_present};

/// Schema record name for movies.
pub const MOVIE_RECORD: &str = "movie";

/// Schema record name for directors.
pub const DIRECTOR_RECORD: &str = "director";

/// JSON Schema for a raw movie record.
pub const MOVIE_SCHEMA: &str = r##"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "Movie",
    "type": "object",
    "properties": {
        "title": { "type": "string" },
        "director": { "type": "string" },
        "producer": { "type": "string" },
        "box_office": { "type": "number" },
        "imdb_rating": { "type": ["string", "null"] },
        "rotten_tomatoes_rating": { "type": ["string", "null"] },
        "genre": { "type": ["string", "null"] },
        "director_details": {
            "anyOf": [{ "$ref": "#/$defs/director" }, { "type": "null" }]
        }
    },
    "required": ["title", "director", "producer", "box_office"],
    "$defs": {
        "director": {
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "verified": { "type": "boolean" }
            },
            "required": ["name", "verified"]
        }
    }
}"##;

/// JSON Schema for a raw director record.
pub const DIRECTOR_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "Director",
    "type": "object",
    "properties": {
        "name": { "type": "string" },
        "verified": { "type": "boolean" }
    },
    "required": ["name", "verified"]
}"#;

const IMDB_RATING: &str = "imdb_rating";
const ROTTEN_TOMATOES_RATING: &str = "rotten_tomatoes_rating";

/// Validates raw JSON movie records.
///
/// Checks run in a fixed order: rating presence over the raw keys, then
/// the IMDb rating rule on a textual `imdb_rating`, then the record shape.
/// Domain errors therefore win over shape errors. Key presence is taken
/// from the raw object, so `"imdb_rating": null` counts as supplied.
pub struct MovieValidator {
    registry: SchemaRegistry,
}

impl MovieValidator {
    /// Validator with the default (permissive) registry config.
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let registry = SchemaRegistry::from_embedded_with_config(
            &[(MOVIE_RECORD, MOVIE_SCHEMA), (DIRECTOR_RECORD, DIRECTOR_SCHEMA)],
            config,
        )?;
        Ok(Self { registry })
    }

    /// Validate an already-parsed movie record.
    pub fn validate(&self, raw: &Value) -> Result<Movie> {
        let Some(map) = raw.as_object() else {
            // Not an object: the schema reports the wrong root type.
            self.registry.validate_value(MOVIE_RECORD, raw)?;
            return Err(SchemaError::ValidationFailed {
                record: MOVIE_RECORD.to_string(),
                message: "movie record must be a JSON object".to_string(),
            }
            .into());
        };

        let title = map.get("title").and_then(Value::as_str).unwrap_or_default();
        check_ratings_present(
            title,
            map.contains_key(IMDB_RATING),
            map.contains_key(ROTTEN_TOMATOES_RATING),
        )?;

        if let Some(Value::String(rating)) = map.get(IMDB_RATING) {
            check_imdb_rating(rating)?;
        }

        self.registry.validate_value(MOVIE_RECORD, raw)?;
        let fields: MovieFields =
            serde_json::from_value(raw.clone()).map_err(SchemaError::from)?;
        Movie::from_present_fields(fields)
    }

    /// Parse and validate a JSON movie payload.
    pub fn validate_json(&self, payload: &str) -> Result<Movie> {
        let raw: Value = serde_json::from_str(payload).map_err(SchemaError::from)?;
        self.validate(&raw)
    }

    /// Validate a raw director record. Directors only carry type rules.
    pub fn validate_director(&self, raw: &Value) -> Result<Director> {
        self.registry.validate_value(DIRECTOR_RECORD, raw)?;
        let director = serde_json::from_value(raw.clone()).map_err(SchemaError::from)?;
        Ok(director)
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }
}

impl Movie {
    /// Validate a raw JSON movie record with the default config.
    ///
    /// Builds a fresh [`MovieValidator`] on every call, which compiles both
    /// embedded schemas again. Keep a validator around when checking many
    /// records.
    pub fn from_value(raw: &Value) -> Result<Self> {
        MovieValidator::new()?.validate(raw)
    }
}
