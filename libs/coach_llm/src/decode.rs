use serde_json::Value;

use crate::error::CompletionError;

/// Parse completion text as JSON and validate it against a task schema.
///
/// The returned value is the parsed completion unchanged; validation never
/// rewrites it. A completion that is not syntactically valid JSON maps to
/// [`CompletionError::Parse`], one that parses but violates the schema to
/// [`CompletionError::SchemaMismatch`].
pub fn decode_completion(content: &str, schema: &str) -> Result<Value, CompletionError> {
    let value: Value = serde_json::from_str(content)?;

    let schema: Value =
        serde_json::from_str(schema).map_err(|e| CompletionError::SchemaMismatch(e.to_string()))?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| CompletionError::SchemaMismatch(e.to_string()))?;

    if let Err(error) = validator.validate(&value) {
        return Err(CompletionError::SchemaMismatch(error.to_string()));
    }

    Ok(value)
}
