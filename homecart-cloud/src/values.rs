//! Conversion between plain JSON documents and the document store's typed
//! value encoding.
//!
//! The store's wire format wraps every value in a type tag
//! (`stringValue`, `integerValue`, `mapValue`, …). The models serialize all
//! dates as RFC 3339 strings, so strings that parse as RFC 3339 are written
//! as `timestampValue` and timestamps read back as the same strings — the
//! round trip is stable for every shape in `homecart-model`.

use crate::error::{CloudError, CloudResult};
use chrono::DateTime;
use serde_json::{json, Map, Value};

/// Encodes a JSON document body into a typed `fields` map.
pub fn to_fields(data: &Value) -> CloudResult<Map<String, Value>> {
    let object = data
        .as_object()
        .ok_or_else(|| CloudError::Value("document body must be a JSON object".to_string()))?;
    let mut fields = Map::with_capacity(object.len());
    for (key, value) in object {
        fields.insert(key.clone(), to_value(value)?);
    }
    Ok(fields)
}

/// Encodes one JSON value.
pub fn to_value(value: &Value) -> CloudResult<Value> {
    Ok(match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(flag) => json!({ "booleanValue": flag }),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                // Integers are string-encoded on the wire.
                json!({ "integerValue": int.to_string() })
            } else if let Some(float) = number.as_f64() {
                json!({ "doubleValue": float })
            } else {
                return Err(CloudError::Value(format!("unrepresentable number {number}")));
            }
        }
        Value::String(text) => {
            if DateTime::parse_from_rfc3339(text).is_ok() {
                json!({ "timestampValue": text })
            } else {
                json!({ "stringValue": text })
            }
        }
        Value::Array(items) => {
            let values = items.iter().map(to_value).collect::<CloudResult<Vec<_>>>()?;
            json!({ "arrayValue": { "values": values } })
        }
        Value::Object(_) => {
            json!({ "mapValue": { "fields": to_fields(value)? } })
        }
    })
}

/// Decodes a typed `fields` map back into a plain JSON object.
pub fn from_fields(fields: &Map<String, Value>) -> CloudResult<Value> {
    let mut object = Map::with_capacity(fields.len());
    for (key, value) in fields {
        object.insert(key.clone(), from_value(value)?);
    }
    Ok(Value::Object(object))
}

/// Decodes one typed value.
pub fn from_value(value: &Value) -> CloudResult<Value> {
    let object = value
        .as_object()
        .ok_or_else(|| CloudError::Value(format!("expected a typed value, got {value}")))?;
    let (tag, inner) = object
        .iter()
        .next()
        .ok_or_else(|| CloudError::Value("empty typed value".to_string()))?;

    Ok(match tag.as_str() {
        "nullValue" => Value::Null,
        "booleanValue" => inner.clone(),
        "integerValue" => {
            let text = inner
                .as_str()
                .ok_or_else(|| CloudError::Value(format!("bad integerValue {inner}")))?;
            let parsed: i64 = text
                .parse()
                .map_err(|_| CloudError::Value(format!("bad integerValue {text}")))?;
            json!(parsed)
        }
        "doubleValue" => inner.clone(),
        "stringValue" | "timestampValue" | "referenceValue" => inner.clone(),
        "arrayValue" => {
            let items = inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(from_value).collect::<CloudResult<Vec<_>>>())
                .transpose()?
                .unwrap_or_default();
            Value::Array(items)
        }
        "mapValue" => {
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default();
            from_fields(&fields)?
        }
        other => return Err(CloudError::Value(format!("unsupported value type {other}"))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_round_trip() {
        let doc = json!({
            "name": "חלב 3%",
            "price": 6.5,
            "quantity": 2,
            "is_admin": true,
            "notes": null,
        });
        let fields = to_fields(&doc).unwrap();
        assert_eq!(fields["quantity"], json!({ "integerValue": "2" }));
        assert_eq!(fields["price"], json!({ "doubleValue": 6.5 }));
        assert_eq!(from_fields(&fields).unwrap(), doc);
    }

    #[test]
    fn rfc3339_strings_become_timestamps() {
        let doc = json!({ "created_date": "2025-10-11T08:30:00Z" });
        let fields = to_fields(&doc).unwrap();
        assert_eq!(
            fields["created_date"],
            json!({ "timestampValue": "2025-10-11T08:30:00Z" })
        );
        assert_eq!(from_fields(&fields).unwrap(), doc);
    }

    #[test]
    fn barcodes_stay_strings() {
        // Digit strings must not be mistaken for anything else.
        let doc = json!({ "barcode": "7290000000001" });
        let fields = to_fields(&doc).unwrap();
        assert_eq!(fields["barcode"], json!({ "stringValue": "7290000000001" }));
    }

    #[test]
    fn nested_arrays_and_maps_round_trip() {
        let doc = json!({
            "items": [
                { "name": "לחם", "quantity": 1, "productData": { "unitPrice": 8.9 } },
                { "name": "ביצים", "quantity": 2, "productData": null },
            ],
            "tags": [],
        });
        let fields = to_fields(&doc).unwrap();
        assert_eq!(from_fields(&fields).unwrap(), doc);
    }

    #[test]
    fn non_object_body_is_rejected() {
        assert!(to_fields(&json!([1, 2, 3])).is_err());
    }
}
