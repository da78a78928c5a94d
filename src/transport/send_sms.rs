use serde::Deserialize;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{Destination, Originator, SendSms, SendSmsResponse};

/// Validity period, in days, requested for every outbound message.
const VALIDITY_DAYS: &str = "1";

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJsonResponse {
    #[serde(default)]
    reference_id: Option<TransportScalar>,
}

pub fn encode_send_sms_query(request: &SendSms) -> Vec<(String, String)> {
    let mut params = super::encode_format_query();
    params.push((
        Originator::FIELD.to_owned(),
        request.originator().as_str().to_owned(),
    ));
    params.push((
        Destination::FIELD.to_owned(),
        request.destination().as_str().to_owned(),
    ));
    params.push((SendSms::MESSAGE_FIELD.to_owned(), request.message().to_owned()));
    params.push(("validity".to_owned(), VALIDITY_DAYS.to_owned()));
    params
}

pub fn decode_send_sms_json_response(json: &str) -> Result<SendSmsResponse, TransportError> {
    let parsed: SendSmsJsonResponse = serde_json::from_str(json)?;
    Ok(SendSmsResponse {
        reference_id: parsed.reference_id.map(TransportScalar::into_string),
    })
}
