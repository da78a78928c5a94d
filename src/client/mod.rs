//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    DateBound, GetDlrStatus, GetSms, KnownResultCode, Message, Method, Password, SendSms, Username,
    ValidationError,
};
use crate::transport::{Envelope, TransportError};

const DEFAULT_BASE_URL: &str = "https://voodoosms.com";
const BASE_URL_FIELD: &str = "base_url";

/// Raw HTTP response handed back by an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP collaborator used by [`GatewayClient`] to issue `GET` requests.
///
/// The default implementation wraps a blocking `reqwest` client; inject another one with
/// [`GatewayClientBuilder::transport`].
pub trait HttpTransport: Send + Sync {
    fn get(
        &self,
        url: &Url,
        query: &[(String, String)],
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(
        &self,
        url: &Url,
        query: &[(String, String)],
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self.client.get(url.clone()).query(query).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone)]
/// Account credentials attached to every VoodooSMS call as `uid` / `pass`.
pub struct Credentials {
    username: Username,
    password: Password,
}

impl Credentials {
    /// Validate that both parts are non-empty.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Username::FIELD.to_owned(), self.username.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors returned by [`GatewayClient`].
///
/// Every failed call yields exactly one variant. None of them are retried.
/// Response-level variants carry the response body's values joined with `", "`.
pub enum GatewayError {
    /// A parameter that must be present was empty.
    #[error("required parameter missing: {field}")]
    RequiredParameter { field: &'static str },

    /// A parameter was present but malformed. Raised before any request is made.
    #[error("invalid parameter format: {field} {expected}")]
    InvalidParameterFormat {
        field: &'static str,
        expected: &'static str,
    },

    /// Result code `400`.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Result code `401`.
    #[error("unauthorised: {0}")]
    Unauthorised(String),

    /// Result code `402`.
    #[error("not enough credit: {0}")]
    NotEnoughCredit(String),

    /// Result code `403`.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Result code `513`.
    #[error("message too large: {0}")]
    MessageTooLarge(String),

    /// Transport failure, undecodable body, unknown result code, or a missing
    /// expected field.
    #[error("unexpected response: {0}")]
    Unexpected(String),
}

impl From<ValidationError> for GatewayError {
    fn from(value: ValidationError) -> Self {
        let field = value.field();
        match value {
            ValidationError::Empty { .. } => Self::RequiredParameter { field },
            ValidationError::InvalidFormat { expected, .. } => {
                Self::InvalidParameterFormat { field, expected }
            }
            ValidationError::InvalidPhoneNumber { .. } => Self::InvalidParameterFormat {
                field,
                expected: "must be a parseable phone number",
            },
        }
    }
}

impl GatewayError {
    fn from_result_code(kind: KnownResultCode, diagnostic: String) -> Option<Self> {
        Some(match kind {
            KnownResultCode::BadRequest => Self::BadRequest(diagnostic),
            KnownResultCode::Unauthorised => Self::Unauthorised(diagnostic),
            KnownResultCode::NotEnoughCredit => Self::NotEnoughCredit(diagnostic),
            KnownResultCode::Forbidden => Self::Forbidden(diagnostic),
            KnownResultCode::MessageTooLarge => Self::MessageTooLarge(diagnostic),
            KnownResultCode::Success | KnownResultCode::NoMessages => return None,
        })
    }
}

#[derive(Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the host, timeout, user-agent, or transport.
pub struct GatewayClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl GatewayClientBuilder {
    /// Create a builder with the default host and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the host. Requests go to `<base_url>/vapi/server/<method>`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use `transport` instead of the built-in `reqwest` client.
    pub fn transport(mut self, transport: impl HttpTransport + 'static) -> Self {
        let transport: Arc<dyn HttpTransport> = Arc::new(transport);
        self.transport = Some(transport);
        self
    }

    /// Build a [`GatewayClient`].
    ///
    /// Fails with [`GatewayError::InvalidParameterFormat`] if the base URL is not an absolute
    /// URL, and with [`GatewayError::Unexpected`] if the HTTP client cannot be created.
    pub fn build(self) -> Result<GatewayClient, GatewayError> {
        endpoint_url(&self.base_url, Method::GetCredit).map_err(|_| {
            GatewayError::InvalidParameterFormat {
                field: BASE_URL_FIELD,
                expected: "must be an absolute http(s) URL",
            }
        })?;

        let http: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::blocking::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| GatewayError::Unexpected(err.to_string()))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(GatewayClient {
            credentials: self.credentials,
            base_url: self.base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level VoodooSMS client.
///
/// Each operation builds its query from scratch, validates it where required,
/// issues one blocking `GET` to `https://voodoosms.com/vapi/server/<method>`
/// (by default) and maps the body's `result` code to a value or a [`GatewayError`].
/// Nothing is retried.
pub struct GatewayClient {
    credentials: Credentials,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    /// Create a client using the default host. No network activity happens here.
    ///
    /// For more customization, use [`GatewayClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::blocking::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> GatewayClientBuilder {
        GatewayClientBuilder::new(credentials)
    }

    /// Remaining account credit, as reported (e.g. `"123.0000"`).
    pub fn get_credit(&self) -> Result<String, GatewayError> {
        let response = self.call(
            Method::GetCredit,
            crate::transport::encode_get_credit_query(),
            crate::transport::decode_credit_json_response,
        )?;
        require_field(Method::GetCredit, "credit", response.credit)
    }

    /// Send one SMS and return the gateway's reference id.
    ///
    /// Errors:
    /// - [`GatewayError::RequiredParameter`] / [`GatewayError::InvalidParameterFormat`] for a bad
    ///   originator or destination, before any request is made,
    /// - a result-code variant when the gateway rejects the request,
    /// - [`GatewayError::Unexpected`] when `reference_id` is missing from the response.
    pub fn send_sms(
        &self,
        originator: impl Into<String>,
        destination: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<String, GatewayError> {
        let request = SendSms::new(originator, destination, message)?;
        let response = self.call(
            Method::SendSms,
            crate::transport::encode_send_sms_query(&request),
            crate::transport::decode_send_sms_json_response,
        )?;
        require_field(Method::SendSms, "reference_id", response.reference_id)
    }

    /// Inbound messages received between `from` and `to`.
    ///
    /// Date-like bounds are sent as `YYYY-MM-DD HH:MM:SS`, strings as given. An empty inbox
    /// yields an empty vector.
    pub fn get_sms(
        &self,
        from: impl Into<DateBound>,
        to: impl Into<DateBound>,
    ) -> Result<Vec<Message>, GatewayError> {
        self.fetch_sms(&GetSms::new(from, to))
    }

    /// Same as [`GatewayClient::get_sms`], filtered on `keyword`.
    pub fn get_sms_with_keyword(
        &self,
        from: impl Into<DateBound>,
        to: impl Into<DateBound>,
        keyword: impl Into<String>,
    ) -> Result<Vec<Message>, GatewayError> {
        self.fetch_sms(&GetSms::new(from, to).with_keyword(keyword))
    }

    /// Delivery status (e.g. `"Delivered"`) for a reference id returned by
    /// [`GatewayClient::send_sms`].
    pub fn get_dlr_status(&self, reference_id: impl Into<String>) -> Result<String, GatewayError> {
        let request = GetDlrStatus::new(reference_id);
        let response = self.call(
            Method::GetDlrStatus,
            crate::transport::encode_get_dlr_status_query(&request),
            crate::transport::decode_dlr_status_json_response,
        )?;
        require_field(
            Method::GetDlrStatus,
            "delivery_status",
            response.delivery_status,
        )
    }

    fn fetch_sms(&self, request: &GetSms) -> Result<Vec<Message>, GatewayError> {
        let response = self.call(
            Method::GetSms,
            crate::transport::encode_get_sms_query(request),
            crate::transport::decode_get_sms_json_response,
        )?;
        Ok(response.messages)
    }

    fn call<T: Default>(
        &self,
        method: Method,
        query: Vec<(String, String)>,
        decode: fn(&str) -> Result<T, TransportError>,
    ) -> Result<T, GatewayError> {
        let url = endpoint_url(&self.base_url, method)
            .map_err(|err| GatewayError::Unexpected(err.to_string()))?;

        let mut params = Vec::<(String, String)>::with_capacity(query.len() + 2);
        params.extend(query);
        self.credentials.push_query_params(&mut params);

        tracing::debug!(%method, path = url.path(), "dispatching gateway request");
        let response = self.http.get(&url, &params).map_err(|err| {
            tracing::debug!(%method, error = %err, "gateway transport failed");
            GatewayError::Unexpected(err.to_string())
        })?;
        tracing::debug!(%method, status = response.status, "gateway responded");

        let envelope = crate::transport::decode_envelope(&response.body)
            .map_err(|err| undecodable(response.status, err))?;

        match interpret(method, envelope)? {
            KnownResultCode::NoMessages => Ok(T::default()),
            _ => decode(&response.body).map_err(|err| undecodable(response.status, err)),
        }
    }
}

/// Map the envelope's result code to success (returning its kind) or to an error.
fn interpret(method: Method, envelope: Envelope) -> Result<KnownResultCode, GatewayError> {
    let Some(code) = envelope.result.as_ref() else {
        tracing::warn!(%method, "gateway response has no result code");
        return Err(GatewayError::Unexpected(envelope.diagnostic));
    };
    let Some(kind) = code.known_kind() else {
        tracing::warn!(%method, result = %code, "unmapped gateway result code");
        return Err(GatewayError::Unexpected(envelope.diagnostic));
    };
    match GatewayError::from_result_code(kind, envelope.diagnostic) {
        Some(err) => Err(err),
        None => Ok(kind),
    }
}

fn require_field(
    method: Method,
    field: &'static str,
    value: Option<String>,
) -> Result<String, GatewayError> {
    value.ok_or_else(|| {
        tracing::warn!(%method, field, "expected field missing from gateway response");
        GatewayError::Unexpected(format!("No {field} found in gateway response"))
    })
}

fn undecodable(status: u16, err: TransportError) -> GatewayError {
    GatewayError::Unexpected(format!("{err} (HTTP status {status})"))
}

fn endpoint_url(base_url: &str, method: Method) -> Result<Url, EndpointError> {
    let mut url = Url::parse(base_url)?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(EndpointError::NotHttp);
    }
    url.path_segments_mut()
        .map_err(|()| EndpointError::NotHttp)?
        .pop_if_empty()
        .extend(["vapi", "server", method.as_str()]);
    Ok(url)
}

#[derive(Debug, thiserror::Error)]
enum EndpointError {
    #[error("invalid base URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("base URL must use http or https")]
    NotHttp,
}
