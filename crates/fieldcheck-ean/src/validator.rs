use fieldcheck_schema::{RegistryConfig, SchemaError, SchemaRegistry};
use serde_json::Value;

use crate::code::{Ean, EanVariant};
use crate::error::Result;

/// JSON Schema for a raw EAN-8 record.
pub const EAN8_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "EAN-8",
    "type": "object",
    "properties": {
        "value": { "type": "string" }
    },
    "required": ["value"]
}"#;

/// JSON Schema for a raw EAN-13 record.
pub const EAN13_SCHEMA: &str = r#"{
    "$schema": "https://json-schema.org/draft/2020-12/schema",
    "title": "EAN-13",
    "type": "object",
    "properties": {
        "value": { "type": "string" }
    },
    "required": ["value"]
}"#;

/// Validates raw `{"value": ...}` records into EAN codes.
///
/// The record shape is checked first; a well-shaped record then goes
/// through the digit rules of [`Ean::new`].
pub struct EanValidator {
    registry: SchemaRegistry,
}

impl EanValidator {
    /// Validator with the default (permissive) registry config.
    pub fn new() -> Result<Self> {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let registry = SchemaRegistry::from_embedded_with_config(
            &[
                (EanVariant::Ean8.name(), EAN8_SCHEMA),
                (EanVariant::Ean13.name(), EAN13_SCHEMA),
            ],
            config,
        )?;
        Ok(Self { registry })
    }

    /// Validate an already-parsed record.
    pub fn validate(&self, raw: &Value, variant: EanVariant) -> Result<Ean> {
        self.registry.validate_value(variant.name(), raw)?;
        let value = raw
            .get("value")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(Ean::new(value, variant)?)
    }

    /// Parse and validate a JSON payload.
    pub fn validate_json(&self, payload: &str, variant: EanVariant) -> Result<Ean> {
        let raw: Value = serde_json::from_str(payload).map_err(SchemaError::from)?;
        self.validate(&raw, variant)
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }
}
