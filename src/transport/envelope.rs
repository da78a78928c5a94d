use serde_json::{Map, Value};

use super::TransportError;
use crate::domain::ResultCode;

/// Fields every VoodooSMS response shares, decoded before any payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// `result` as sent; `None` when the key is absent or `null`.
    pub result: Option<ResultCode>,
    /// Every top-level value joined with `", "`, in document order. `null`
    /// renders as nothing and arrays are flattened into the list.
    pub diagnostic: String,
}

pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    let body: Map<String, Value> = serde_json::from_str(json)?;

    let result = body.get("result").and_then(result_code_from_value);
    let diagnostic = body
        .values()
        .map(diagnostic_text)
        .collect::<Vec<_>>()
        .join(", ");

    Ok(Envelope { result, diagnostic })
}

fn result_code_from_value(value: &Value) -> Option<ResultCode> {
    match value {
        Value::Null => None,
        Value::Number(number) => Some(match number.as_i64() {
            Some(code) => ResultCode::Numeric(code),
            None => ResultCode::Text(number.to_string()),
        }),
        Value::String(text) => Some(ResultCode::Text(text.clone())),
        other => Some(ResultCode::Text(other.to_string())),
    }
}

fn diagnostic_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(diagnostic_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_numeric_result_and_join_values_in_order() {
        let json = r#"
        {
          "result": 400,
          "resultText": "400 Bad Request"
        }
        "#;

        let envelope = decode_envelope(json).unwrap();
        assert_eq!(envelope.result, Some(ResultCode::Numeric(400)));
        assert_eq!(envelope.diagnostic, "400, 400 Bad Request");
    }

    #[test]
    fn decode_text_result() {
        let json = r#"{"result": "200 OK", "credit": "123.0000"}"#;

        let envelope = decode_envelope(json).unwrap();
        assert_eq!(envelope.result, Some(ResultCode::Text("200 OK".to_owned())));
        assert_eq!(envelope.diagnostic, "200 OK, 123.0000");
    }

    #[test]
    fn decode_missing_or_null_result_as_none() {
        let envelope = decode_envelope(r#"{"credit": "1.00"}"#).unwrap();
        assert_eq!(envelope.result, None);

        let envelope = decode_envelope(r#"{"result": null}"#).unwrap();
        assert_eq!(envelope.result, None);
        assert_eq!(envelope.diagnostic, "");
    }

    #[test]
    fn diagnostic_blanks_null_and_flattens_arrays() {
        let json = r#"
        {
          "result": 401,
          "resultText": null,
          "errors": ["bad uid", ["bad pass", 7]],
          "extra": {"a": 1}
        }
        "#;

        let envelope = decode_envelope(json).unwrap();
        assert_eq!(envelope.result, Some(ResultCode::Numeric(401)));
        assert_eq!(
            envelope.diagnostic,
            r#"401, , bad uid, bad pass, 7, {"a":1}"#
        );
    }

    #[test]
    fn decode_keeps_non_integer_results_as_text() {
        let envelope = decode_envelope(r#"{"result": 200.5}"#).unwrap();
        assert_eq!(envelope.result, Some(ResultCode::Text("200.5".to_owned())));

        let envelope = decode_envelope(r#"{"result": true}"#).unwrap();
        assert_eq!(envelope.result, Some(ResultCode::Text("true".to_owned())));
    }

    #[test]
    fn decode_rejects_non_object_bodies() {
        assert!(matches!(
            decode_envelope("[1, 2]"),
            Err(TransportError::Json(_))
        ));
        assert!(matches!(
            decode_envelope("<html>oops</html>"),
            Err(TransportError::Json(_))
        ));
    }
}
