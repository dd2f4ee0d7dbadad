//! Error types for compact token processing.
//!
//! This module defines all error types that can occur while building or
//! parsing compact tokens. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Structural errors** ([`JoseError::MalformedToken`],
//!   [`JoseError::MalformedEncoding`], [`JoseError::MalformedHeader`],
//!   [`JoseError::MalformedPayload`]): the compact string does not decode
//!   into three well-formed segments
//! - **Dispatch errors** ([`JoseError::UnsupportedHeaderType`],
//!   [`JoseError::AlgorithmNotFound`]): the header names a token type or
//!   algorithm with no registered implementation
//! - **Verification errors** ([`JoseError::InvalidSignature`]): the
//!   signature does not match the signing input
//! - **Temporal errors** ([`JoseError::TokenExpired`],
//!   [`JoseError::TokenNotYetValid`]): the token is outside its validity
//!   window
//!
//! Every failure is terminal for the call that produced it: no partial
//! token is ever returned, and no fallback value is guessed.
//!
//! # Examples
//!
//! ```
//! use jose_compact::error::{JoseError, Result};
//!
//! fn require_three_segments(compact: &str) -> Result<()> {
//!     let count = compact.split('.').count();
//!     if count != 3 {
//!         return Err(JoseError::MalformedToken(count));
//!     }
//!     Ok(())
//! }
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for token operations.
///
/// This is a convenience type that uses [`JoseError`] as the error type.
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, JoseError>;

/// Errors that can occur while building or parsing compact tokens.
///
/// All variants are terminal and non-retryable: the input that produced
/// them must be rejected, not coerced. Signature mismatch and the two
/// temporal failures are distinct variants so callers can give users
/// different remediation advice for each.
///
/// This type implements `#[must_use]` to ensure errors are not silently
/// ignored. Always handle errors by checking, propagating, or explicitly
/// panicking.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum JoseError {
    /// The algorithm identifier has no registered implementation.
    ///
    /// This error occurs when a header's `alg` parameter (or an identifier
    /// passed to resolution) does not name a supported algorithm, or when
    /// the underlying keyed-hash primitive is unavailable.
    ///
    /// # Recovery
    ///
    /// Re-issue the token with a supported algorithm identifier
    /// (`"NONE"`, `"HS256"`).
    #[error("algorithm {0:?} is not supported")]
    AlgorithmNotFound(String),

    /// The compact string does not have exactly three segments.
    ///
    /// Compact tokens are always `header.claims.signature`. Fewer or more
    /// separator-delimited segments (including JWE-style five-segment
    /// strings) are rejected outright rather than re-interpreted.
    ///
    /// # Recovery
    ///
    /// Verify the token was transmitted intact and is a compact JWT/JWS,
    /// not some other serialization.
    #[error("compact token must have exactly 3 segments, found {0}")]
    MalformedToken(usize),

    /// A segment contains invalid base64url text.
    ///
    /// Segments use the URL-safe base64 alphabet without padding. Any
    /// character outside that alphabet fails the whole parse.
    #[error("invalid base64url encoding: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// The header segment decoded to invalid JSON.
    ///
    /// The first segment must deserialize into a JSON object.
    #[error("failed to parse JSON in header: {0}")]
    MalformedHeader(String),

    /// The claims segment decoded to invalid JSON.
    ///
    /// The second segment must deserialize into a JSON object.
    #[error("failed to parse JSON in payload: {0}")]
    MalformedPayload(String),

    /// The header's `typ` parameter is not a recognized token type.
    ///
    /// Only `"JWT"` (unsigned) and `"JWS"` (signed) are dispatched; any
    /// other value, including an absent `typ`, is fatal and not retried.
    #[error("unsupported header type {0:?}")]
    UnsupportedHeaderType(String),

    /// Signature verification failed.
    ///
    /// The recomputed signature over the first two segments does not match
    /// the third segment. Claims from such a token are never returned.
    ///
    /// # Recovery
    ///
    /// The bearer must re-authenticate; the token cannot be trusted.
    #[error("signature invalid")]
    InvalidSignature,

    /// The token's expiration time (`exp`) has passed.
    ///
    /// Carries the instant at which the token expired.
    ///
    /// # Recovery
    ///
    /// Obtain a freshly issued token.
    #[error("token has expired (expired at {0})")]
    TokenExpired(DateTime<Utc>),

    /// The token's not-before time (`nbf`) is still in the future.
    ///
    /// Carries the instant from which the token becomes valid.
    ///
    /// # Recovery
    ///
    /// Retry once the not-before instant has passed; also check clock
    /// synchronization between issuer and consumer.
    #[error("token is not yet valid (valid from {0})")]
    TokenNotYetValid(DateTime<Utc>),
}
