//! Token header model.
//!
//! The header is the first compact segment: an ordered mapping of
//! parameter names to JSON values describing token metadata, per
//! [RFC 7519 Section 5](https://datatracker.ietf.org/doc/html/rfc7519#section-5).
//! Standard parameters get typed accessors; anything else goes through the
//! generic parameter accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::jose::SignatureAlgorithm;

/// `typ` (Type) header parameter name.
pub const TYPE: &str = "typ";

/// `typ` value for unsigned tokens.
pub const TYPE_JWT: &str = "JWT";

/// `typ` value for signed tokens.
pub const TYPE_JWS: &str = "JWS";

/// `cty` (Content Type) header parameter name.
pub const CONTENT_TYPE: &str = "cty";

/// `alg` (Algorithm) header parameter name, present only on signed
/// headers, per
/// [RFC 7515 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7515#section-4.1).
pub const ALGORITHM: &str = "alg";

/// Token metadata carried in the first compact segment.
///
/// Parameters keep their insertion order through serialization, so the
/// same logical content always produces the same signing-input bytes.
/// Setters consume and return the header for chaining; setting a
/// parameter to JSON null removes it instead of storing it.
///
/// # Examples
///
/// ```
/// use jose_compact::jose::{header, Header, SignatureAlgorithm};
///
/// let signed = Header::jws(SignatureAlgorithm::Hs256);
/// assert_eq!(signed.token_type(), Some(header::TYPE_JWS));
///
/// let unsigned = Header::jwt().set_content_type("example");
/// assert_eq!(unsigned.content_type(), Some("example"));
/// assert_eq!(unsigned.parameter(header::ALGORITHM), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header {
    parameters: Map<String, Value>,
}

impl Header {
    /// Creates an empty header with no parameters set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a header for an unsigned token, with `typ` preset to
    /// `"JWT"`.
    #[must_use]
    pub fn jwt() -> Self {
        Self::new().set_token_type(TYPE_JWT)
    }

    /// Creates a header for a signed token, with `typ` preset to `"JWS"`
    /// and `alg` carrying the algorithm identifier.
    #[must_use]
    pub fn jws(algorithm: SignatureAlgorithm) -> Self {
        Self::new().set_token_type(TYPE_JWS).set_algorithm(algorithm)
    }

    /// Returns the `typ` (Type) parameter.
    #[must_use]
    pub fn token_type(&self) -> Option<&str> {
        self.parameter(TYPE).and_then(Value::as_str)
    }

    /// Sets the `typ` (Type) parameter.
    #[must_use]
    pub fn set_token_type(self, token_type: &str) -> Self {
        self.set_parameter(TYPE, token_type)
    }

    /// Returns the `cty` (Content Type) parameter.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.parameter(CONTENT_TYPE).and_then(Value::as_str)
    }

    /// Sets the `cty` (Content Type) parameter.
    #[must_use]
    pub fn set_content_type(self, content_type: &str) -> Self {
        self.set_parameter(CONTENT_TYPE, content_type)
    }

    /// Resolves the `alg` (Algorithm) parameter to a signature algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`JoseError::AlgorithmNotFound`](crate::error::JoseError::AlgorithmNotFound)
    /// if the parameter is absent, is not a string, or names an algorithm
    /// with no registered implementation.
    pub fn algorithm(&self) -> Result<SignatureAlgorithm> {
        let name = self.parameter(ALGORITHM).and_then(Value::as_str).unwrap_or_default();
        SignatureAlgorithm::from_name(name)
    }

    /// Sets the `alg` (Algorithm) parameter to the algorithm's identifier.
    #[must_use]
    pub fn set_algorithm(self, algorithm: SignatureAlgorithm) -> Self {
        self.set_parameter(ALGORITHM, algorithm.name())
    }

    /// Returns a parameter by name, standard or custom.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Value> {
        self.parameters.get(name)
    }

    /// Sets a parameter by name, standard or custom.
    ///
    /// Setting JSON null removes the parameter, so it never appears in
    /// serialized output.
    #[must_use]
    pub fn set_parameter(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        match value.into() {
            Value::Null => {
                self.parameters.shift_remove(&name);
            }
            value => {
                self.parameters.insert(name, value);
            }
        }
        self
    }
}
