use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{DlrStatusResponse, GetDlrStatus};

#[derive(Debug, Clone, Deserialize)]
struct DlrStatusJsonResponse {
    #[serde(default)]
    delivery_status: Option<TransportScalar>,
}

pub fn encode_get_dlr_status_query(request: &GetDlrStatus) -> Vec<(String, String)> {
    let mut params = super::encode_format_query();
    params.push((
        GetDlrStatus::FIELD.to_owned(),
        request.reference_id().to_owned(),
    ));
    params
}

pub fn decode_dlr_status_json_response(json: &str) -> Result<DlrStatusResponse, TransportError> {
    let parsed: DlrStatusJsonResponse = serde_json::from_str(json)?;
    Ok(DlrStatusResponse {
        delivery_status: parsed.delivery_status.map(TransportScalar::into_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_get_dlr_status_query_params() {
        let params = encode_get_dlr_status_query(&GetDlrStatus::new("5143598"));
        assert_eq!(
            params,
            vec![
                ("format".to_owned(), "json".to_owned()),
                ("reference_id".to_owned(), "5143598".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_delivery_status() {
        let json = r#"
        {
          "result": 200,
          "resultText": "200 OK",
          "reference_id": "5143598",
          "delivery_status": "Delivered"
        }
        "#;

        let parsed = decode_dlr_status_json_response(json).unwrap();
        assert_eq!(parsed.delivery_status.as_deref(), Some("Delivered"));
    }

    #[test]
    fn decode_missing_delivery_status_as_absent() {
        let json = r#"{"result": 200, "status": "Delivered"}"#;
        let parsed = decode_dlr_status_json_response(json).unwrap();
        assert_eq!(parsed.delivery_status, None);
    }
}
