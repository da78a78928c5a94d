use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    InvalidFormat {
        field: &'static str,
        expected: &'static str,
    },
    InvalidPhoneNumber {
        field: &'static str,
        input: String,
    },
}

impl ValidationError {
    /// Query field the rejected value belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidPhoneNumber { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidFormat { field, expected } => write!(f, "{field} {expected}"),
            Self::InvalidPhoneNumber { field, input } => {
                write!(f, "{field} is not a phone number: {input}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
