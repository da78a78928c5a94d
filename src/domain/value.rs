use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use phonenumber::country;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// VoodooSMS account user name (`uid`).
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query field name used by VoodooSMS (`uid`).
    pub const FIELD: &'static str = "uid";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// VoodooSMS account password (`pass`).
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output never contains the password itself.
pub struct Password(String);

impl Password {
    /// Query field name used by VoodooSMS (`pass`).
    pub const FIELD: &'static str = "pass";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender id shown to the recipient (`orig`).
///
/// Invariant: 1-11 ASCII alphanumerics, optionally followed by four digits,
/// so numeric senders may be up to 15 digits long.
pub struct Originator(String);

impl Originator {
    /// Query field name used by VoodooSMS (`orig`).
    pub const FIELD: &'static str = "orig";

    const EXPECTED: &'static str = "must be 15 numeric digits or 11 alphanumerics";

    /// Create a validated [`Originator`]. The value is checked exactly as given.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !is_valid_originator(&value) {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                expected: Self::EXPECTED,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the validated sender id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_originator(value: &str) -> bool {
    let bytes = value.as_bytes();
    if !bytes.iter().all(u8::is_ascii_alphanumeric) {
        return false;
    }
    match bytes.len() {
        1..=11 => true,
        // Longer senders are only allowed with a four digit tail.
        12..=15 => bytes[bytes.len() - 4..].iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient number in E.164 digits without the leading `+` (`dest`).
///
/// Invariant: 10-15 ASCII digits.
pub struct Destination(String);

impl Destination {
    /// Query field name used by VoodooSMS (`dest`).
    pub const FIELD: &'static str = "dest";

    const EXPECTED: &'static str = "must be valid E.164 format";

    /// Create a validated [`Destination`]. The value is checked exactly as given.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let digits_only = value.bytes().all(|b| b.is_ascii_digit());
        if !digits_only || !(10..=15).contains(&value.len()) {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                expected: Self::EXPECTED,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<PhoneNumber> for Destination {
    type Error = ValidationError;

    fn try_from(value: PhoneNumber) -> Result<Self, Self::Error> {
        Self::new(value.digits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Human-entered number (`"07123 456789"`, `"+44 7123 456789"`) normalized
/// to the digits VoodooSMS expects in `dest`.
pub struct PhoneNumber {
    digits: String,
}

impl PhoneNumber {
    /// Parse `input`, falling back to `default_region` when it has no country prefix.
    ///
    /// Numbers `phonenumber` considers invalid for their region are rejected.
    pub fn parse(
        default_region: Option<country::Id>,
        input: &str,
    ) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: Destination::FIELD,
            });
        }

        let invalid = || ValidationError::InvalidPhoneNumber {
            field: Destination::FIELD,
            input: input.to_owned(),
        };
        let parsed = phonenumber::parse(default_region, input).map_err(|_| invalid())?;
        if !phonenumber::is_valid(&parsed) {
            return Err(invalid());
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Ok(Self {
            digits: e164.trim_start_matches('+').to_owned(),
        })
    }

    /// Country code followed by the national number, without `+`.
    pub fn digits(&self) -> &str {
        &self.digits
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Lower or upper bound of a `getSMS` date range (`from` / `to`).
///
/// Date-like values are sent as `YYYY-MM-DD HH:MM:SS`; text is sent unchanged.
pub enum DateBound {
    DateTime(NaiveDateTime),
    Raw(String),
}

impl DateBound {
    const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";

    /// Value as it appears in the query string.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::DateTime(value) => value.format(Self::FORMAT).to_string(),
            Self::Raw(value) => value.clone(),
        }
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDate> for DateBound {
    /// Midnight at the start of the given day.
    fn from(value: NaiveDate) -> Self {
        Self::DateTime(value.and_time(NaiveTime::default()))
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    /// Wall-clock time in the value's own offset.
    fn from(value: DateTime<Tz>) -> Self {
        Self::DateTime(value.naive_local())
    }
}

impl From<&str> for DateBound {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_owned())
    }
}

impl From<String> for DateBound {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Value of the top-level `result` field.
///
/// VoodooSMS reports it either as an integer or as text (`"200 OK"`), so both
/// shapes are preserved as-is.
pub enum ResultCode {
    Numeric(i64),
    Text(String),
}

impl ResultCode {
    /// Map this code to a known result variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownResultCode> {
        KnownResultCode::from_code(self)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(code) => write!(f, "{code}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Result codes with a defined meaning.
///
/// Unknown codes return `None` from [`KnownResultCode::from_code`].
pub enum KnownResultCode {
    Success,
    NoMessages,
    BadRequest,
    Unauthorised,
    NotEnoughCredit,
    Forbidden,
    MessageTooLarge,
}

impl KnownResultCode {
    /// Text `getSMS` reports instead of an empty message list.
    pub const NO_MESSAGES_TEXT: &'static str = "You dont have any messages";

    /// Convert a raw result code into a known variant.
    ///
    /// Error codes only match their integer form.
    pub fn from_code(code: &ResultCode) -> Option<Self> {
        Some(match code {
            ResultCode::Numeric(200) => Self::Success,
            ResultCode::Numeric(400) => Self::BadRequest,
            ResultCode::Numeric(401) => Self::Unauthorised,
            ResultCode::Numeric(402) => Self::NotEnoughCredit,
            ResultCode::Numeric(403) => Self::Forbidden,
            ResultCode::Numeric(513) => Self::MessageTooLarge,
            ResultCode::Text(text) if text == "200 OK" => Self::Success,
            ResultCode::Text(text) if text == Self::NO_MESSAGES_TEXT => Self::NoMessages,
            _ => return None,
        })
    }

    /// Whether the call went through and its payload can be read.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::NoMessages)
    }
}
