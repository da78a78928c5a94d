use std::fmt;

use crate::domain::validation::ValidationError;
use crate::domain::value::{DateBound, Destination, Originator};

/// Remote procedure called under `/vapi/server/<method>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GetCredit,
    SendSms,
    GetSms,
    GetDlrStatus,
}

impl Method {
    /// Name used in the URL path.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetCredit => "getCredit",
            Self::SendSms => "sendSMS",
            Self::GetSms => "getSMS",
            Self::GetDlrStatus => "getDlrStatus",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated `sendSMS` request.
#[derive(Debug, Clone)]
pub struct SendSms {
    originator: Originator,
    destination: Destination,
    message: String,
}

impl SendSms {
    /// Query field name used by VoodooSMS for the message body (`msg`).
    pub const MESSAGE_FIELD: &'static str = "msg";

    /// Validate originator and destination. The message text is sent as-is.
    pub fn new(
        originator: impl Into<String>,
        destination: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            originator: Originator::new(originator)?,
            destination: Destination::new(destination)?,
            message: message.into(),
        })
    }

    pub fn originator(&self) -> &Originator {
        &self.originator
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// `getSMS` request: inbound messages received between two bounds.
#[derive(Debug, Clone)]
pub struct GetSms {
    from: DateBound,
    to: DateBound,
    keyword: String,
}

impl GetSms {
    /// Query field name used by VoodooSMS (`keyword`).
    pub const KEYWORD_FIELD: &'static str = "keyword";

    /// Request without a keyword filter.
    pub fn new(from: impl Into<DateBound>, to: impl Into<DateBound>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            keyword: String::new(),
        }
    }

    /// Filter on the inbound keyword.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    /// `(from, to)` bounds as given.
    pub fn bounds(&self) -> (&DateBound, &DateBound) {
        (&self.from, &self.to)
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// `getDlrStatus` request for a previously submitted message.
#[derive(Debug, Clone)]
pub struct GetDlrStatus {
    reference_id: String,
}

impl GetDlrStatus {
    /// Query field name used by VoodooSMS (`reference_id`).
    pub const FIELD: &'static str = "reference_id";

    pub fn new(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: reference_id.into(),
        }
    }

    pub fn reference_id(&self) -> &str {
        &self.reference_id
    }
}
