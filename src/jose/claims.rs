//! Token claims model.
//!
//! Claims are the second compact segment: an ordered mapping of claim
//! names to JSON values carrying the token's assertions, per
//! [RFC 7519 Section 4](https://datatracker.ietf.org/doc/html/rfc7519#section-4).
//! The registered claims get typed accessors; anything else goes through
//! the generic claim accessors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `iss` (Issuer) claim name.
pub const ISSUER: &str = "iss";

/// `sub` (Subject) claim name.
pub const SUBJECT: &str = "sub";

/// `aud` (Audience) claim name.
pub const AUDIENCE: &str = "aud";

/// `exp` (Expiration Time) claim name.
pub const EXPIRATION_TIME: &str = "exp";

/// `nbf` (Not Before) claim name.
pub const NOT_BEFORE: &str = "nbf";

/// `iat` (Issued At) claim name.
pub const ISSUED_AT: &str = "iat";

/// `jti` (JWT ID) claim name.
pub const JWT_ID: &str = "jti";

/// Audience claim value.
///
/// The `aud` claim may name a single recipient or an ordered list of
/// recipients; the shape given at set time is the shape serialized and
/// the shape read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Audience {
    /// One intended recipient.
    Single(String),
    /// Several intended recipients, order preserved.
    List(Vec<String>),
}

impl Audience {
    fn to_value(&self) -> Value {
        match self {
            Self::Single(audience) => Value::from(audience.as_str()),
            Self::List(audiences) => Value::from(audiences.clone()),
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(audience) => Some(Self::Single(audience.clone())),
            Value::Array(entries) => entries
                .iter()
                .map(|entry| entry.as_str().map(str::to_owned))
                .collect::<Option<Vec<String>>>()
                .map(Self::List),
            _ => None,
        }
    }
}

impl From<&str> for Audience {
    fn from(audience: &str) -> Self {
        Self::Single(audience.to_owned())
    }
}

impl From<String> for Audience {
    fn from(audience: String) -> Self {
        Self::Single(audience)
    }
}

impl From<Vec<String>> for Audience {
    fn from(audiences: Vec<String>) -> Self {
        Self::List(audiences)
    }
}

impl From<Vec<&str>> for Audience {
    fn from(audiences: Vec<&str>) -> Self {
        Self::List(audiences.into_iter().map(str::to_owned).collect())
    }
}

/// Token payload assertions carried in the second compact segment.
///
/// Claims keep their insertion order through serialization, so the same
/// logical content always produces the same signing-input bytes. Setters
/// consume and return the claims for chaining; setting a claim to JSON
/// null removes it, and only currently-set claims appear in serialized
/// output.
///
/// Time-valued claims are stored as integer Unix timestamps and exposed
/// as [`DateTime<Utc>`]; the conversion is lossless at one-second
/// granularity (sub-second precision is truncated on set).
///
/// # Examples
///
/// ```
/// use jose_compact::jose::{Audience, Claims};
///
/// let claims = Claims::new()
///     .set_issuer("issuer.example.com")
///     .set_audience(vec!["reader", "writer"])
///     .set_claim("name", "test");
///
/// assert_eq!(claims.issuer(), Some("issuer.example.com"));
/// assert_eq!(claims.audience(), Some(Audience::List(vec!["reader".into(), "writer".into()])));
/// assert_eq!(claims.claim("name").and_then(|value| value.as_str()), Some("test"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    claims: Map<String, Value>,
}

impl Claims {
    /// Creates an empty claims set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `iss` (Issuer) claim.
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.claim(ISSUER).and_then(Value::as_str)
    }

    /// Sets the `iss` (Issuer) claim.
    #[must_use]
    pub fn set_issuer(self, issuer: impl Into<String>) -> Self {
        self.set_claim(ISSUER, issuer.into())
    }

    /// Returns the `sub` (Subject) claim.
    ///
    /// The subject may be any JSON value, not only a string.
    #[must_use]
    pub fn subject(&self) -> Option<&Value> {
        self.claim(SUBJECT)
    }

    /// Sets the `sub` (Subject) claim.
    #[must_use]
    pub fn set_subject(self, subject: impl Into<Value>) -> Self {
        self.set_claim(SUBJECT, subject)
    }

    /// Returns the `aud` (Audience) claim in the shape it was given.
    ///
    /// Reads as absent when the stored value is neither a string nor a
    /// list of strings.
    #[must_use]
    pub fn audience(&self) -> Option<Audience> {
        self.claim(AUDIENCE).and_then(Audience::from_value)
    }

    /// Sets the `aud` (Audience) claim from a single recipient or a list.
    #[must_use]
    pub fn set_audience(self, audience: impl Into<Audience>) -> Self {
        self.set_claim(AUDIENCE, audience.into().to_value())
    }

    /// Returns the `exp` (Expiration Time) claim as an instant.
    #[must_use]
    pub fn expiration_time(&self) -> Option<DateTime<Utc>> {
        self.time_claim(EXPIRATION_TIME)
    }

    /// Sets the `exp` (Expiration Time) claim, stored as Unix seconds.
    #[must_use]
    pub fn set_expiration_time(self, expiration_time: DateTime<Utc>) -> Self {
        self.set_claim(EXPIRATION_TIME, expiration_time.timestamp())
    }

    /// Returns the `nbf` (Not Before) claim as an instant.
    #[must_use]
    pub fn not_before(&self) -> Option<DateTime<Utc>> {
        self.time_claim(NOT_BEFORE)
    }

    /// Sets the `nbf` (Not Before) claim, stored as Unix seconds.
    #[must_use]
    pub fn set_not_before(self, not_before: DateTime<Utc>) -> Self {
        self.set_claim(NOT_BEFORE, not_before.timestamp())
    }

    /// Returns the `iat` (Issued At) claim as an instant.
    #[must_use]
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.time_claim(ISSUED_AT)
    }

    /// Sets the `iat` (Issued At) claim, stored as Unix seconds.
    #[must_use]
    pub fn set_issued_at(self, issued_at: DateTime<Utc>) -> Self {
        self.set_claim(ISSUED_AT, issued_at.timestamp())
    }

    /// Returns the `jti` (JWT ID) claim.
    #[must_use]
    pub fn jwt_id(&self) -> Option<&str> {
        self.claim(JWT_ID).and_then(Value::as_str)
    }

    /// Sets the `jti` (JWT ID) claim.
    #[must_use]
    pub fn set_jwt_id(self, jwt_id: impl Into<String>) -> Self {
        self.set_claim(JWT_ID, jwt_id.into())
    }

    /// Returns a claim by name, standard or custom.
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// Sets a claim by name, standard or custom.
    ///
    /// Setting JSON null removes the claim, so it never appears in
    /// serialized output. An explicit `0` or `false` is a set value and
    /// is kept.
    #[must_use]
    pub fn set_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        match value.into() {
            Value::Null => {
                self.claims.shift_remove(&name);
            }
            value => {
                self.claims.insert(name, value);
            }
        }
        self
    }

    fn time_claim(&self, name: &str) -> Option<DateTime<Utc>> {
        self.claim(name)
            .and_then(Value::as_i64)
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
    }
}
