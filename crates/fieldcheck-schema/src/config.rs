/// Controls shape validation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegistryConfig {
    /// When true, schemas reject additional properties not in the schema.
    pub strict_mode: bool,
    /// When true, records without a schema return `SchemaError::NoSchema`.
    pub fail_on_missing_schema: bool,
}

impl RegistryConfig {
    /// Config with strict mode on and missing schemas treated as errors.
    pub fn strict() -> Self {
        Self {
            strict_mode: true,
            fail_on_missing_schema: true,
        }
    }
}
