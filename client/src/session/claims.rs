//! Client-side decoding of the session token's claim set.
//!
//! The token is JWT-shaped (`header.payload.signature`). Only the payload is
//! read; the signature belongs to the backend and is never checked here.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Role, SessionError};

/// Claims the dashboard cares about. Unknown claims are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    /// Subject identifier (user id). Numeric subjects are kept as text.
    #[serde(default, deserialize_with = "deserialize_subject")]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Expiry as seconds since the Unix epoch. Carried but not enforced.
    #[serde(default, deserialize_with = "deserialize_expiry")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Resolve the `role` claim against the fixed role set.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingRole`] when the claim is absent and
    /// [`SessionError::UnknownRole`] when it names no known role.
    pub fn role(&self) -> Result<Role, SessionError> {
        self.role.as_deref().ok_or(SessionError::MissingRole)?.parse()
    }
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// # Errors
///
/// Fails when the token does not have three segments, when the payload is not
/// base64url, or when it is not a JSON object.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(SessionError::Malformed);
    };
    if payload.is_empty() {
        return Err(SessionError::Malformed);
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
    // A derived struct also accepts a JSON array positionally; claims are a map.
    match serde_json::from_slice::<Value>(&bytes)? {
        object @ Value::Object(_) => Ok(Claims::deserialize(object)?),
        _ => Err(serde_json::Error::custom("claims payload is not a JSON object").into()),
    }
}

fn deserialize_subject<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or integer subject")),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .map(Some)
            .ok_or_else(|| D::Error::custom("expiry out of range")),
        _ => Err(D::Error::custom("expected numeric expiry")),
    }
}
