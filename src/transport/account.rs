use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::CreditResponse;

#[derive(Debug, Clone, Deserialize)]
struct CreditJsonResponse {
    #[serde(default)]
    credit: Option<TransportScalar>,
}

pub fn encode_get_credit_query() -> Vec<(String, String)> {
    super::encode_format_query()
}

pub fn decode_credit_json_response(json: &str) -> Result<CreditResponse, TransportError> {
    let parsed: CreditJsonResponse = serde_json::from_str(json)?;
    Ok(CreditResponse {
        credit: parsed.credit.map(TransportScalar::into_string),
    })
}
