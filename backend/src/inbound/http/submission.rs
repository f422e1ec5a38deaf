//! Request decoding for coin change submissions.
//!
//! A submission arrives either as an HTML form post or as JSON. The
//! [`CoinChangeSubmission`] extractor inspects the content type, decodes the
//! body into the matching input variants, and remembers which response
//! format the caller expects. Bodies of any other content type are not read;
//! both fields count as missing and fail validation.

use actix_web::http::header;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{LocalBoxFuture, ready};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{AmountInput, CoinChangeRequest, DenominationsInput, Error};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";
const JSON_SUFFIX: &str = "+json";

/// Response encoding chosen from how the request arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Form posts get an HTML fragment.
    Html,
    /// Everything else gets JSON.
    Json,
}

/// JSON request body.
///
/// `coins` may be an array of integers or a comma-separated string; `amount`
/// may be an integer or a numeric string.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct JsonSubmission {
    /// Available denominations.
    #[serde(default)]
    #[schema(value_type = Vec<i64>, example = json!([1, 2, 5]))]
    pub coins: Option<Value>,
    /// Target amount.
    #[serde(default)]
    #[schema(value_type = i64, example = 11)]
    pub amount: Option<Value>,
}

impl From<JsonSubmission> for CoinChangeRequest {
    fn from(body: JsonSubmission) -> Self {
        let denominations = match body.coins {
            Some(Value::Array(values)) => DenominationsInput::Structured(values),
            Some(Value::String(text)) => DenominationsInput::Text(text),
            Some(Value::Null) | None => DenominationsInput::Missing,
            Some(other) => DenominationsInput::Unsupported(other),
        };
        let amount = match body.amount {
            Some(Value::Null) | None => AmountInput::Missing,
            Some(value) => AmountInput::Structured(value),
        };
        Self {
            denominations,
            amount,
        }
    }
}

/// Form-encoded request body.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct FormSubmission {
    /// Comma-separated denominations, e.g. `1,2,5`.
    #[schema(example = "1,2,5")]
    pub coins: Option<String>,
    /// Target amount as text.
    #[schema(example = "11")]
    pub amount: Option<String>,
}

impl From<FormSubmission> for CoinChangeRequest {
    fn from(body: FormSubmission) -> Self {
        Self {
            denominations: body
                .coins
                .map_or(DenominationsInput::Missing, DenominationsInput::Text),
            amount: body.amount.map_or(AmountInput::Missing, AmountInput::Text),
        }
    }
}

/// Decoded submission plus the response format it asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct CoinChangeSubmission {
    /// Raw request for the domain.
    pub request: CoinChangeRequest,
    /// Encoding for the successful response.
    pub format: ResponseFormat,
}

fn content_type(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
}

/// Whether the request carries a form-encoded body.
pub fn is_form_submission(req: &HttpRequest) -> bool {
    content_type(req).is_some_and(|value| value.contains(FORM_CONTENT_TYPE))
}

/// Whether the request declares a JSON body (`application/json` or a
/// `+json` media type).
pub fn is_json_submission(req: &HttpRequest) -> bool {
    content_type(req).is_some_and(|value| {
        let essence = value.split(';').next().unwrap_or_default().trim();
        essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE)
            || essence.to_ascii_lowercase().ends_with(JSON_SUFFIX)
    })
}

fn decode_json(bytes: &[u8]) -> Result<JsonSubmission, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonSubmission::default());
    }
    match serde_json::from_slice::<Value>(bytes).map_err(|err| undecodable("JSON", err))? {
        object @ Value::Object(_) => {
            serde_json::from_value(object).map_err(|err| undecodable("JSON", err))
        }
        other => Err(undecodable(
            "JSON",
            format_args!("expected an object, found {}", json_type(&other)),
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn undecodable(kind: &str, err: impl std::fmt::Display) -> Error {
    debug!(error = %err, kind, "coin change body could not be decoded");
    Error::invalid_request(format!("Request body is not valid {kind}."))
}

impl FromRequest for CoinChangeSubmission {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_form_submission(req) {
            let fut = web::Form::<FormSubmission>::from_request(req, payload);
            Box::pin(async move {
                let form = fut.await.map_err(|err| undecodable("form data", err))?;
                Ok(Self {
                    request: form.into_inner().into(),
                    format: ResponseFormat::Html,
                })
            })
        } else if is_json_submission(req) {
            let fut = web::Bytes::from_request(req, payload);
            Box::pin(async move {
                let bytes = fut.await.map_err(|err| undecodable("JSON", err))?;
                Ok(Self {
                    request: decode_json(&bytes)?.into(),
                    format: ResponseFormat::Json,
                })
            })
        } else {
            debug!(
                content_type = content_type(req).unwrap_or_default(),
                "coin change body ignored"
            );
            Box::pin(ready(Ok(Self {
                request: JsonSubmission::default().into(),
                format: ResponseFormat::Json,
            })))
        }
    }
}
