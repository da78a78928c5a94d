use serde::Deserialize;
use serde::de::Error as DeError;

/// Scalar value returned by VoodooSMS as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`123.0000` remains `"123.0000"` instead of becoming `"123.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportScalar(String);

impl TransportScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected field to be JSON string or number",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        value: TransportScalar,
    }

    #[test]
    fn numeric_tokens_are_kept_verbatim() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": 123.0000}"#).unwrap();
        assert_eq!(parsed.value.into_string(), "123.0000");

        let parsed: Wrapper = serde_json::from_str(r#"{"value": 4103395}"#).unwrap();
        assert_eq!(parsed.value.into_string(), "4103395");
    }

    #[test]
    fn strings_are_unescaped() {
        let parsed: Wrapper = serde_json::from_str(r#"{"value": "Delivered"}"#).unwrap();
        assert_eq!(parsed.value.into_string(), "Delivered");
    }

    #[test]
    fn other_json_types_are_rejected() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": true}"#).is_err());
        assert!(serde_json::from_str::<Wrapper>(r#"{"value": {"a": 1}}"#).is_err());
    }
}
