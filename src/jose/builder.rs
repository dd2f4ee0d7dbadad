//! Compact token assembly.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::instrument;
use zeroize::Zeroizing;

use crate::error::{JoseError, Result};
use crate::jose::{self, encoding, Audience, Claims, Header, SignatureAlgorithm};

/// Assembles a header and claims into a compact token string.
///
/// Every setter consumes and returns the builder, so configuration chains
/// into the terminal [`compact`](JoseBuilder::compact) call. The builder
/// is a single-use value holder: it performs no I/O and keeps no state
/// beyond what the chain sets, so independent builds can run on any
/// number of threads without coordination.
///
/// Without a [`sign_with`](JoseBuilder::sign_with) call the builder uses
/// the no-op algorithm with an empty secret, producing an unsigned,
/// unauthenticated token. Do not rely on such tokens for origin or
/// integrity guarantees.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use jose_compact::jose::{self, SignatureAlgorithm};
///
/// # fn example() -> jose_compact::error::Result<()> {
/// let compact = jose::builder()
///     .claim("name", "test")
///     .expiration_time(Utc::now() + Duration::days(1))
///     .sign_with(SignatureAlgorithm::Hs256, b"123")
///     .compact()?;
///
/// assert_eq!(compact.split('.').count(), 3);
/// # Ok(())
/// # }
/// ```
pub struct JoseBuilder {
    header: Option<Header>,
    claims: Option<Claims>,
    algorithm: SignatureAlgorithm,
    secret: Zeroizing<Vec<u8>>,
}

impl Default for JoseBuilder {
    fn default() -> Self {
        Self {
            header: None,
            claims: None,
            algorithm: SignatureAlgorithm::None,
            secret: Zeroizing::new(Vec::new()),
        }
    }
}

impl fmt::Debug for JoseBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoseBuilder")
            .field("header", &self.header)
            .field("claims", &self.claims)
            .field("algorithm", &self.algorithm)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl JoseBuilder {
    /// Creates a builder with no header, no claims, and the no-op
    /// algorithm selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the header wholesale.
    ///
    /// When no header is supplied, [`compact`](JoseBuilder::compact)
    /// synthesizes one from the selected algorithm.
    #[must_use]
    pub fn header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Replaces the claims wholesale.
    #[must_use]
    pub fn claims(mut self, claims: Claims) -> Self {
        self.claims = Some(claims);
        self
    }

    /// Sets the `iss` (Issuer) claim.
    #[must_use]
    pub fn issuer(self, issuer: impl Into<String>) -> Self {
        self.update_claims(|claims| claims.set_issuer(issuer))
    }

    /// Sets the `sub` (Subject) claim.
    #[must_use]
    pub fn subject(self, subject: impl Into<Value>) -> Self {
        self.update_claims(|claims| claims.set_subject(subject))
    }

    /// Sets the `aud` (Audience) claim from a single recipient or a list.
    #[must_use]
    pub fn audience(self, audience: impl Into<Audience>) -> Self {
        self.update_claims(|claims| claims.set_audience(audience))
    }

    /// Sets the `exp` (Expiration Time) claim.
    #[must_use]
    pub fn expiration_time(self, expiration_time: DateTime<Utc>) -> Self {
        self.update_claims(|claims| claims.set_expiration_time(expiration_time))
    }

    /// Sets the `nbf` (Not Before) claim.
    #[must_use]
    pub fn not_before(self, not_before: DateTime<Utc>) -> Self {
        self.update_claims(|claims| claims.set_not_before(not_before))
    }

    /// Sets the `iat` (Issued At) claim.
    #[must_use]
    pub fn issued_at(self, issued_at: DateTime<Utc>) -> Self {
        self.update_claims(|claims| claims.set_issued_at(issued_at))
    }

    /// Sets the `jti` (JWT ID) claim.
    #[must_use]
    pub fn jwt_id(self, jwt_id: impl Into<String>) -> Self {
        self.update_claims(|claims| claims.set_jwt_id(jwt_id))
    }

    /// Sets a claim by name, standard or custom.
    ///
    /// Setting JSON null removes the claim.
    #[must_use]
    pub fn claim(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.update_claims(|claims| claims.set_claim(name, value))
    }

    /// Selects the signing algorithm and secret.
    ///
    /// The secret is copied into the builder and zeroized when the
    /// builder is dropped.
    #[must_use]
    pub fn sign_with(mut self, algorithm: SignatureAlgorithm, secret: &[u8]) -> Self {
        self.algorithm = algorithm;
        self.secret = Zeroizing::new(secret.to_vec());
        self
    }

    /// Produces the compact token string. Terminal: consumes the builder.
    ///
    /// A missing header is synthesized from the selected algorithm
    /// (`typ` `"JWT"` for the no-op algorithm, `"JWS"` with `alg` set
    /// otherwise); missing claims become an empty claims set. The header
    /// and claims segments are encoded, joined with the separator, signed,
    /// and the encoded signature is appended. The no-op algorithm yields
    /// an empty third segment.
    ///
    /// # Errors
    ///
    /// Returns [`JoseError::AlgorithmNotFound`] if the signing primitive
    /// is unavailable for the selected algorithm.
    #[instrument(skip(self), fields(algorithm = self.algorithm.name()))]
    pub fn compact(self) -> Result<String> {
        let header = self.header.unwrap_or_else(|| match self.algorithm {
            SignatureAlgorithm::None => Header::jwt(),
            algorithm => Header::jws(algorithm),
        });
        let claims = self.claims.unwrap_or_default();

        let header_json =
            serde_json::to_vec(&header).map_err(|e| JoseError::MalformedHeader(e.to_string()))?;
        let claims_json =
            serde_json::to_vec(&claims).map_err(|e| JoseError::MalformedPayload(e.to_string()))?;

        let mut token = format!(
            "{}{}{}",
            encoding::encode(&header_json),
            jose::SEPARATOR,
            encoding::encode(&claims_json)
        );

        let signature = self.algorithm.sign(token.as_bytes(), &self.secret)?;
        token.push(jose::SEPARATOR);
        token.push_str(&encoding::encode(&signature));

        Ok(token)
    }

    fn update_claims(mut self, set: impl FnOnce(Claims) -> Claims) -> Self {
        self.claims = Some(set(self.claims.take().unwrap_or_default()));
        self
    }
}
