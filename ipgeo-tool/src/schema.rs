use schemars::{JsonSchema, r#gen::SchemaSettings};
use serde_json::Value;

/// Generate a tool schema the hosted model accepts (no `$schema`, `$ref` or
/// `definitions`; nested types inlined).
pub fn generate_tool_schema<T: JsonSchema>() -> Value {
    let settings = SchemaSettings::openapi3().with(|s| {
        s.inline_subschemas = true;
        s.meta_schema = None;
    });
    let generator = schemars::r#gen::SchemaGenerator::new(settings);
    let mut schema = generator.into_root_schema_for::<T>();
    schema.schema.metadata().title = None;

    let mut value = serde_json::to_value(schema.schema).unwrap_or(Value::Null);
    strip_unsupported(&mut value);
    value
}

fn strip_unsupported(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("$schema");
            map.remove("definitions");
            map.remove("$ref");
            for (_, v) in map.iter_mut() {
                strip_unsupported(v);
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                strip_unsupported(v);
            }
        }
        _ => {}
    }
}
