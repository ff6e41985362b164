//! Structural conformance validation.
//!
//! Recursively checks that a JSON document matches a [`SchemaNode`]: the
//! declared type, required-property presence, per-property sub-schemas, the
//! `additionalProperties` policy, and element-wise `items` validation for
//! arrays. The first mismatch is reported as a [`Violation`] carrying the
//! document path, expected, and actual detail.

use serde_json::Value;

use super::{SchemaNode, SchemaType, Violation};

/// Validates a JSON document against a structural schema.
///
/// # Errors
///
/// Returns the first [`Violation`] encountered, located by a `$.a.b[i]`
/// style document path.
pub fn validate(document: &Value, schema: &SchemaNode) -> Result<(), Violation> {
    validate_at(document, schema, "$")
}

fn validate_at(document: &Value, schema: &SchemaNode, path: &str) -> Result<(), Violation> {
    if let Some(expected) = schema.schema_type
        && !expected.matches(document)
    {
        let actual = SchemaType::of(document);
        return Err(Violation::new(
            path,
            expected.as_str(),
            actual,
            format!("expected {}, found {actual}", expected.as_str()),
        ));
    }

    match document {
        Value::Object(map) => {
            for name in &schema.required {
                if !map.contains_key(name) {
                    return Err(Violation::new(
                        format!("{path}.{name}"),
                        "property present",
                        "missing",
                        format!("required property '{name}' is missing"),
                    ));
                }
            }

            for (name, value) in map {
                if let Some(sub) = schema.properties.get(name) {
                    validate_at(value, sub, &format!("{path}.{name}"))?;
                } else if !schema.additional_properties {
                    return Err(Violation::new(
                        format!("{path}.{name}"),
                        "no additional properties",
                        format!("undeclared property '{name}'"),
                        format!("property '{name}' is not declared and additional properties are not permitted"),
                    ));
                }
            }
        }
        Value::Array(elements) => {
            if let Some(items) = &schema.items {
                for (index, element) in elements.iter().enumerate() {
                    validate_at(element, items, &format!("{path}[{index}]"))?;
                }
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schema(document: serde_json::Value) -> SchemaNode {
        SchemaNode::from_value(&document).unwrap()
    }

    fn user_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "id": {"type": "integer"},
                "email": {"type": "string"},
                "first_name": {"type": "string"},
                "last_name": {"type": "string"},
                "avatar": {"type": "string"}
            },
            "required": ["id", "email", "first_name", "last_name", "avatar"]
        })
    }

    fn user(id: u64) -> serde_json::Value {
        json!({
            "id": id,
            "email": format!("user{id}@reqres.in"),
            "first_name": "Janet",
            "last_name": "Weaver",
            "avatar": "https://reqres.in/img/faces/2-image.jpg"
        })
    }

    #[test]
    fn test_accepts_conformant_list_envelope() {
        let list = schema(json!({
            "type": "object",
            "properties": {
                "page": {"type": "integer"},
                "per_page": {"type": "integer"},
                "total": {"type": "integer"},
                "total_pages": {"type": "integer"},
                "data": {"type": "array", "items": user_schema()},
                "support": {"type": "object"}
            },
            "required": ["page", "per_page", "total", "total_pages", "data", "support"]
        }));

        let document = json!({
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [user(7), user(8)],
            "support": {"url": "https://reqres.in/#support", "text": "..."}
        });

        assert_eq!(validate(&document, &list), Ok(()));
    }

    #[test]
    fn test_accepts_single_resource_envelope() {
        let single = schema(json!({
            "type": "object",
            "properties": {
                "data": user_schema(),
                "support": {"type": "object"}
            },
            "required": ["data", "support"]
        }));

        let document = json!({"data": user(2), "support": {"url": "x", "text": "y"}});
        assert_eq!(validate(&document, &single), Ok(()));
    }

    #[test]
    fn test_reports_type_mismatch_with_location() {
        let node = schema(json!({
            "type": "object",
            "properties": {"page": {"type": "integer"}}
        }));

        let err = validate(&json!({"page": "two"}), &node).unwrap_err();
        assert_eq!(err.location, "$.page");
        assert_eq!(err.expected, "integer");
        assert_eq!(err.actual, "string");
    }

    #[test]
    fn test_integer_rejects_fractional_number() {
        let node = schema(json!({"type": "integer"}));
        let err = validate(&json!(2.5), &node).unwrap_err();
        assert_eq!(err.location, "$");
        assert_eq!(err.actual, "number");
    }

    #[test]
    fn test_reports_missing_required_property() {
        let node = schema(json!({
            "type": "object",
            "properties": {"job": {"type": "string"}},
            "required": ["job"]
        }));

        let err = validate(&json!({}), &node).unwrap_err();
        assert_eq!(err.location, "$.job");
        assert_eq!(err.actual, "missing");
    }

    #[test]
    fn test_strict_schema_rejects_undeclared_property() {
        let strict = schema(json!({
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "job": {"type": "string"},
                "updatedAt": {"type": "string"}
            },
            "required": ["name", "job", "updatedAt"],
            "additionalProperties": false
        }));

        // The remote echoes unknown fields back; the strict schema must
        // reject them.
        let echoed = json!({
            "name": "morpheus",
            "job": "zion resident",
            "kek": "lel",
            "updatedAt": "2026-08-29T12:00:00.000Z"
        });

        let err = validate(&echoed, &strict).unwrap_err();
        assert_eq!(err.location, "$.kek");
        assert_eq!(err.expected, "no additional properties");
    }

    #[test]
    fn test_permissive_schema_accepts_undeclared_property() {
        let node = schema(json!({
            "type": "object",
            "properties": {"name": {"type": "string"}}
        }));
        assert_eq!(validate(&json!({"name": "x", "extra": 1}), &node), Ok(()));
    }

    #[test]
    fn test_array_elements_validated_with_index_in_location() {
        let node = schema(json!({
            "type": "array",
            "items": {"type": "object", "required": ["id"]}
        }));

        let err = validate(&json!([{"id": 1}, {"name": "no id"}]), &node).unwrap_err();
        assert_eq!(err.location, "$[1].id");
    }

    #[test]
    fn test_nested_location_path() {
        let node = schema(json!({
            "type": "object",
            "properties": {
                "data": {
                    "type": "array",
                    "items": {"properties": {"email": {"type": "string"}}}
                }
            }
        }));

        let err = validate(&json!({"data": [user(1), {"email": 42}]}), &node).unwrap_err();
        assert_eq!(err.location, "$.data[1].email");
    }

    #[test]
    fn test_untyped_schema_accepts_anything() {
        let node = SchemaNode::default();
        assert_eq!(validate(&json!([1, "two", null]), &node), Ok(()));
    }
}
