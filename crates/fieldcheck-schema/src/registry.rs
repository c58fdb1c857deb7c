use std::collections::HashMap;

use jsonschema::Validator;
use serde_json::{Map, Value};

use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::validator::validate_value;

/// Record-keyed registry of compiled JSON Schema validators.
pub struct SchemaRegistry {
    validators: HashMap<String, Validator>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            validators: HashMap::new(),
            config,
        }
    }

    /// Register a schema for a record from a JSON string.
    pub fn register(&mut self, record: &str, schema_json: &str) -> Result<()> {
        let schema: Value = serde_json::from_str(schema_json)?;
        self.register_value(record, &schema)
    }

    /// Register a schema for a record from JSON value.
    pub fn register_value(&mut self, record: &str, schema: &Value) -> Result<()> {
        let mut schema_to_compile = schema.clone();
        if self.config.strict_mode {
            apply_strict_mode(&mut schema_to_compile);
        }

        let compiled = jsonschema::validator_for(&schema_to_compile).map_err(|err| {
            SchemaError::CompileFailed {
                record: record.to_string(),
                message: err.to_string(),
            }
        })?;

        tracing::trace!(record, strict = self.config.strict_mode, "schema registered");
        self.validators.insert(record.to_string(), compiled);
        Ok(())
    }

    /// Load from embedded schema strings.
    pub fn from_embedded(schemas: &[(&str, &str)]) -> Result<Self> {
        Self::from_embedded_with_config(schemas, RegistryConfig::default())
    }

    /// Load from embedded schema strings with explicit config.
    pub fn from_embedded_with_config(
        schemas: &[(&str, &str)],
        config: RegistryConfig,
    ) -> Result<Self> {
        let mut registry = Self::with_config(config);
        for (record, schema) in schemas {
            registry.register(record, schema)?;
        }
        Ok(registry)
    }

    /// Parse a JSON payload and validate it against the record schema.
    ///
    /// Returns the parsed value so callers can keep working on it.
    pub fn validate(&self, record: &str, payload: &[u8]) -> Result<Value> {
        let value: Value = serde_json::from_slice(payload)?;
        self.validate_value(record, &value)?;
        Ok(value)
    }

    /// Validate an already-parsed value against the record schema.
    pub fn validate_value(&self, record: &str, value: &Value) -> Result<()> {
        match self.validators.get(record) {
            Some(validator) => validate_value(record, value, validator),
            None if self.config.fail_on_missing_schema => {
                Err(SchemaError::NoSchema(record.to_string()))
            }
            None => Ok(()),
        }
    }

    /// Check if a record has a registered schema.
    pub fn has_schema(&self, record: &str) -> bool {
        self.validators.contains_key(record)
    }

    /// Get record names that have registered schemas.
    pub fn records(&self) -> Vec<&str> {
        let mut records: Vec<&str> = self.validators.keys().map(String::as_str).collect();
        records.sort_unstable();
        records
    }

    /// Get registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_strict_mode(value: &mut Value) {
    match value {
        Value::Object(map) => {
            if is_object_schema(map) && !map.contains_key("additionalProperties") {
                map.insert("additionalProperties".to_string(), Value::Bool(false));
            }

            recurse_object_schema_children(map);
        }
        Value::Array(items) => {
            for item in items {
                apply_strict_mode(item);
            }
        }
        _ => {}
    }
}

fn recurse_object_schema_children(map: &mut Map<String, Value>) {
    recurse_map_schemas(map, "properties");
    recurse_map_schemas(map, "$defs");
    recurse_map_schemas(map, "definitions");

    recurse_single_schema(map, "additionalProperties");
    recurse_single_schema(map, "items");
    recurse_single_schema(map, "not");
    recurse_single_schema(map, "if");
    recurse_single_schema(map, "then");
    recurse_single_schema(map, "else");

    recurse_array_schemas(map, "allOf");
    recurse_array_schemas(map, "anyOf");
    recurse_array_schemas(map, "oneOf");
}

fn recurse_map_schemas(map: &mut Map<String, Value>, key: &str) {
    if let Some(Value::Object(obj)) = map.get_mut(key) {
        for value in obj.values_mut() {
            apply_strict_mode(value);
        }
    }
}

fn recurse_single_schema(map: &mut Map<String, Value>, key: &str) {
    if let Some(value) = map.get_mut(key) {
        apply_strict_mode(value);
    }
}

fn recurse_array_schemas(map: &mut Map<String, Value>, key: &str) {
    if let Some(Value::Array(items)) = map.get_mut(key) {
        for item in items {
            apply_strict_mode(item);
        }
    }
}

fn is_object_schema(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(items)) => items
            .iter()
            .any(|item| matches!(item, Value::String(kind) if kind == "object")),
        _ => map.contains_key("properties") || map.contains_key("required"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const PERSON_SCHEMA: &str = r#"{
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "verified": { "type": "boolean" }
        },
        "required": ["name", "verified"]
    }"#;

    #[test]
    fn register_and_validate() {
        let mut registry = SchemaRegistry::new();
        registry.register("person", PERSON_SCHEMA).unwrap();

        assert!(registry
            .validate("person", br#"{"name":"Ada","verified":true}"#)
            .is_ok());
        assert!(matches!(
            registry.validate("person", br#"{"name":"Ada","verified":"yes"}"#),
            Err(SchemaError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn validate_returns_parsed_value() {
        let mut registry = SchemaRegistry::new();
        registry.register("person", PERSON_SCHEMA).unwrap();

        let value = registry
            .validate("person", br#"{"name":"Ada","verified":false}"#)
            .unwrap();
        assert_eq!(value["name"], json!("Ada"));
    }

    #[test]
    fn missing_required_field_names_record() {
        let mut registry = SchemaRegistry::new();
        registry.register("person", PERSON_SCHEMA).unwrap();

        let err = registry
            .validate_value("person", &json!({ "name": "Ada" }))
            .unwrap_err();
        match err {
            SchemaError::ValidationFailed { record, message } => {
                assert_eq!(record, "person");
                assert!(message.contains("verified"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_schema_permissive_passes() {
        let registry = SchemaRegistry::new();
        assert!(registry.validate("unknown", br#"{"any":"thing"}"#).is_ok());
    }

    #[test]
    fn missing_schema_strict_fails() {
        let registry = SchemaRegistry::with_config(RegistryConfig {
            strict_mode: false,
            fail_on_missing_schema: true,
        });

        assert!(matches!(
            registry.validate("unknown", br#"{}"#),
            Err(SchemaError::NoSchema(name)) if name == "unknown"
        ));
    }

    #[test]
    fn strict_mode_rejects_additional_properties() {
        let mut permissive = SchemaRegistry::new();
        permissive.register("person", PERSON_SCHEMA).unwrap();

        let mut strict = SchemaRegistry::with_config(RegistryConfig {
            strict_mode: true,
            fail_on_missing_schema: false,
        });
        strict.register("person", PERSON_SCHEMA).unwrap();

        let payload = br#"{"name":"Ada","verified":true,"extra":1}"#;
        assert!(permissive.validate("person", payload).is_ok());
        assert!(matches!(
            strict.validate("person", payload),
            Err(SchemaError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn strict_mode_applies_to_defs() {
        let schema = r##"{
            "type": "object",
            "properties": {
                "owner": { "anyOf": [{ "$ref": "#/$defs/person" }, { "type": "null" }] }
            },
            "$defs": {
                "person": {
                    "type": "object",
                    "properties": { "name": { "type": "string" } },
                    "required": ["name"]
                }
            }
        }"##;

        let mut strict = SchemaRegistry::with_config(RegistryConfig::strict());
        strict.register("record", schema).unwrap();

        assert!(strict
            .validate_value("record", &json!({ "owner": { "name": "Ada" } }))
            .is_ok());
        assert!(strict
            .validate_value("record", &json!({ "owner": null }))
            .is_ok());
        assert!(matches!(
            strict.validate_value("record", &json!({ "owner": { "name": "Ada", "x": 1 } })),
            Err(SchemaError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn strict_mode_keeps_explicit_additional_properties() {
        let schema = r#"{
            "type": "object",
            "properties": { "a": { "type": "integer" } },
            "additionalProperties": true
        }"#;

        let mut strict = SchemaRegistry::with_config(RegistryConfig::strict());
        strict.register("open", schema).unwrap();

        assert!(strict.validate_value("open", &json!({ "a": 1, "b": 2 })).is_ok());
    }

    #[test]
    fn invalid_json_payload_fails() {
        let mut registry = SchemaRegistry::new();
        registry.register("person", PERSON_SCHEMA).unwrap();

        assert!(matches!(
            registry.validate("person", b"not-json"),
            Err(SchemaError::InvalidJson(_))
        ));
    }

    #[test]
    fn invalid_schema_fails_compile() {
        let mut registry = SchemaRegistry::new();
        let invalid = r#"{"type":"definitely-not-a-type"}"#;

        assert!(matches!(
            registry.register("broken", invalid),
            Err(SchemaError::CompileFailed { record, .. }) if record == "broken"
        ));
    }

    #[test]
    fn from_embedded_loads_schemas() {
        let registry = SchemaRegistry::from_embedded(&[
            ("person", PERSON_SCHEMA),
            (
                "flag",
                r#"{"type":"object","properties":{"x":{"type":"boolean"}},"required":["x"]}"#,
            ),
        ])
        .unwrap();

        assert!(registry.has_schema("person"));
        assert!(registry.has_schema("flag"));
        assert!(!registry.has_schema("other"));
        assert_eq!(registry.records(), vec!["flag", "person"]);
    }

    #[test]
    fn config_access() {
        let registry = SchemaRegistry::with_config(RegistryConfig::strict());
        assert_eq!(registry.config(), &RegistryConfig::strict());
        assert_eq!(SchemaRegistry::default().config(), &RegistryConfig::default());
    }
}
