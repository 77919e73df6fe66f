//! Request extractors and field coercion shared by the JSON endpoints.
//!
//! Rejections from axum's built-in extractors are plain text. The extractors
//! here convert them into [Error]s so that every failed request gets the same
//! `{"error": ...}` JSON body.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Name};

/// A JSON request body of type `T`.
///
/// Unlike [axum::Json] the `Content-Type` header is not checked, the body only
/// has to parse as `T`.
#[derive(Debug)]
pub(crate) struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| Error::InvalidJson(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(Payload)
            .map_err(|error| Error::InvalidJson(error.to_string()))
    }
}

/// The integer ID in a path such as `/user/{id}`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| IdPath(id))
            .map_err(|rejection| Error::InvalidPath(rejection.body_text()))
    }
}

/// Read a required integer field.
///
/// Accepts JSON integers, floats without a fractional part and strings
/// holding an integer. `null` counts as missing.
///
/// # Errors
///
/// Returns [Error::MissingField] if the field is absent or null and
/// [Error::InvalidField] if it cannot be coerced.
pub(crate) fn require_integer(field: &'static str, value: Option<&Value>) -> Result<i64, Error> {
    let invalid = Error::InvalidField(field, "an integer");

    match value {
        None | Some(Value::Null) => Err(Error::MissingField(field)),
        Some(Value::Number(number)) => {
            if let Some(integer) = number.as_i64() {
                return Ok(integer);
            }

            match number.as_f64() {
                Some(float)
                    if float.fract() == 0.0
                        && float >= i64::MIN as f64
                        && float <= i64::MAX as f64 =>
                {
                    Ok(float as i64)
                }
                _ => Err(invalid),
            }
        }
        Some(Value::String(text)) => text.trim().parse().map_err(|_| invalid),
        Some(_) => Err(invalid),
    }
}

/// Read a required numeric field.
///
/// Accepts any finite JSON number or a string holding one. `null` counts as
/// missing.
///
/// # Errors
///
/// Returns [Error::MissingField] if the field is absent or null and
/// [Error::InvalidField] if it cannot be coerced.
pub(crate) fn require_number(field: &'static str, value: Option<&Value>) -> Result<f64, Error> {
    let invalid = Error::InvalidField(field, "a number");

    let number = match value {
        None | Some(Value::Null) => return Err(Error::MissingField(field)),
        Some(Value::Number(number)) => number.as_f64().ok_or(invalid.clone())?,
        Some(Value::String(text)) => text.trim().parse::<f64>().map_err(|_| invalid.clone())?,
        Some(_) => return Err(invalid),
    };

    if number.is_finite() {
        Ok(number)
    } else {
        Err(invalid)
    }
}

/// Read the required `name` field.
///
/// # Errors
///
/// Returns [Error::MissingField] if the field is absent or null,
/// [Error::InvalidField] if it is not a string and [Error::EmptyName] if it is
/// blank.
pub(crate) fn require_name(value: Option<&Value>) -> Result<Name, Error> {
    match value {
        None | Some(Value::Null) => Err(Error::MissingField("name")),
        Some(Value::String(text)) => Name::new(text),
        Some(_) => Err(Error::InvalidField("name", "a string")),
    }
}
