//! Machine-readable catalog surfaces for external LLM tools and agents:
//! the Agency JSON Schema and the schema-plus-items envelope.

use schemars::schema_for;

use sigmavendor_common::Agency;

/// JSON Schema describing the Agency shape. Purely descriptive.
pub fn agency_json_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(Agency)).unwrap_or_default()
}

/// Envelope served to LLM consumers: the schema, the records, and a count,
/// so a tool can understand the structure and the data in one fetch.
pub fn llm_agency_response(agencies: &[Agency]) -> serde_json::Value {
    serde_json::json!({
        "schema": agency_json_schema(),
        "items": agencies,
        "meta": {
            "total": agencies.len(),
        }
    })
}
