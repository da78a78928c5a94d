//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{GetDlrStatus, GetSms, Method, SendSms};
pub use response::{CreditResponse, DlrStatusResponse, GetSmsResponse, Message, SendSmsResponse};
pub use validation::ValidationError;
pub use value::{
    DateBound, Destination, KnownResultCode, Originator, Password, PhoneNumber, ResultCode,
    Username,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_rejects_empty() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn password_rejects_empty() {
        assert!(matches!(
            Password::new(""),
            Err(ValidationError::Empty {
                field: Password::FIELD
            })
        ));
    }

    #[test]
    fn send_sms_validates_originator_before_destination() {
        let err = SendSms::new("", "ABC", "hi").unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: Originator::FIELD
            }
        );

        let err = SendSms::new("SENDERID", "ABC", "hi").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::InvalidFormat {
                field: Destination::FIELD,
                ..
            }
        ));
    }

    #[test]
    fn send_sms_keeps_message_as_given() {
        let request = SendSms::new("SENDERID", "447123456789", " Test message ").unwrap();
        assert_eq!(request.originator().as_str(), "SENDERID");
        assert_eq!(request.destination().as_str(), "447123456789");
        assert_eq!(request.message(), " Test message ");
    }

    #[test]
    fn get_sms_defaults_to_empty_keyword() {
        let request = GetSms::new("2014-10-10 12:00:00", "2014-10-17 12:00:00");
        assert_eq!(request.keyword(), "");

        let request = request.with_keyword("TEMP");
        assert_eq!(request.keyword(), "TEMP");
        let (from, to) = request.bounds();
        assert_eq!(from.to_query_value(), "2014-10-10 12:00:00");
        assert_eq!(to.to_query_value(), "2014-10-17 12:00:00");
    }

    #[test]
    fn method_names_match_remote_procedures() {
        assert_eq!(Method::GetCredit.as_str(), "getCredit");
        assert_eq!(Method::SendSms.as_str(), "sendSMS");
        assert_eq!(Method::GetSms.as_str(), "getSMS");
        assert_eq!(Method::GetDlrStatus.to_string(), "getDlrStatus");
    }
}
