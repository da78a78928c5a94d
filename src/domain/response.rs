use chrono::NaiveDateTime;

/// Inbound SMS returned by `getSMS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub from: String,
    pub timestamp: NaiveDateTime,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreditResponse {
    pub credit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSmsResponse {
    pub reference_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSmsResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DlrStatusResponse {
    pub delivery_status: Option<String>,
}
