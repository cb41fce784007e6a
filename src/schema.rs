//! Argument schemas advertised in `tools/list`.

use rmcp::model::JsonObject;
use rmcp::schemars::{self, JsonSchema, generate::SchemaSettings};
use std::sync::Arc;

/// JSON schema for a tool's request type.
///
/// Subschemas are inlined, so enums such as the `list_components` category
/// appear as plain `enum` arrays instead of `$ref` definitions. Field doc
/// comments on the request structs become property descriptions. A schema that
/// does not serialize to an object degrades to `{}` (accept anything); argument
/// validation still happens at dispatch.
pub fn tool_input_schema<T: JsonSchema>() -> Arc<JsonObject> {
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;
    settings.transforms = vec![Box::new(schemars::transform::AddNullable::default())];

    let schema = settings.into_generator().into_root_schema_for::<T>();
    match serde_json::to_value(schema) {
        Ok(serde_json::Value::Object(object)) => Arc::new(object),
        _ => Arc::new(JsonObject::new()),
    }
}
