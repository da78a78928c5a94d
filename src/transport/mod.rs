//! Transport layer: wire-format details (query encoding, JSON decoding).

mod account;
mod dlr_status;
mod envelope;
mod get_sms;
mod scalar;
mod send_sms;

pub use account::{decode_credit_json_response, encode_get_credit_query};
pub use dlr_status::{decode_dlr_status_json_response, encode_get_dlr_status_query};
pub use envelope::{Envelope, decode_envelope};
pub use get_sms::{decode_get_sms_json_response, encode_get_sms_query};
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_query};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unparseable message timestamp: {value}")]
    InvalidTimestamp { value: String },
}

fn encode_format_query() -> Vec<(String, String)> {
    vec![("format".to_owned(), "json".to_owned())]
}
