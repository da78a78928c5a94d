use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::value::RawValue;

use super::TransportError;
use super::scalar::TransportScalar;
use crate::domain::{GetSms, GetSmsResponse, Message};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Debug, Deserialize)]
struct GetSmsJsonResponse {
    // Absent when the inbox is empty, and not always a list.
    #[serde(default)]
    messages: Option<Box<RawValue>>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageJson {
    #[serde(default, rename = "Originator")]
    originator: Option<TransportScalar>,
    #[serde(rename = "TimeStamp")]
    timestamp: String,
    #[serde(default, rename = "Message")]
    message: Option<TransportScalar>,
}

impl MessageJson {
    fn into_message(self) -> Result<Message, TransportError> {
        Ok(Message {
            from: self
                .originator
                .map(TransportScalar::into_string)
                .unwrap_or_default(),
            timestamp: parse_timestamp(&self.timestamp)?,
            message: self
                .message
                .map(TransportScalar::into_string)
                .unwrap_or_default(),
        })
    }
}

pub fn encode_get_sms_query(request: &GetSms) -> Vec<(String, String)> {
    let (from, to) = request.bounds();
    let mut params = super::encode_format_query();
    params.push(("from".to_owned(), from.to_query_value()));
    params.push(("to".to_owned(), to.to_query_value()));
    params.push((GetSms::KEYWORD_FIELD.to_owned(), request.keyword().to_owned()));
    params
}

pub fn decode_get_sms_json_response(json: &str) -> Result<GetSmsResponse, TransportError> {
    let parsed: GetSmsJsonResponse = serde_json::from_str(json)?;

    let messages = match parsed.messages {
        Some(raw) if raw.get().starts_with('[') => {
            let entries: Vec<MessageJson> = serde_json::from_str(raw.get())?;
            entries
                .into_iter()
                .map(MessageJson::into_message)
                .collect::<Result<Vec<_>, _>>()?
        }
        _ => Vec::new(),
    };

    Ok(GetSmsResponse { messages })
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TransportError> {
    let trimmed = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.naive_local());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::default()));
    }
    Err(TransportError::InvalidTimestamp {
        value: value.to_owned(),
    })
}
