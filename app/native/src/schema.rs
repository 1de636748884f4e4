//! JSON Schema for the configuration file.

use crate::config::HomescreenConfig;

/// Generates a JSON Schema for [`HomescreenConfig`].
#[must_use]
pub fn generate_schema() -> schemars::Schema { schemars::schema_for!(HomescreenConfig) }

/// Generates the schema as a pretty-printed JSON string.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
