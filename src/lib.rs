//! Compact JWT/JWS tokens: build, sign, parse, verify.
//!
//! A small library for producing and consuming compact security tokens
//! following [RFC 7519](https://www.rfc-editor.org/rfc/rfc7519.html)
//! (JSON Web Token) and [RFC 7515](https://www.rfc-editor.org/rfc/rfc7515.html)
//! (JSON Web Signature): a metadata header, a claims payload, and an
//! optional HMAC signature binding the two into a three-segment string.
//!
//! # Token Anatomy
//!
//! ```text
//! ┌──────────────────────┐ ┌──────────────────────┐ ┌───────────────────┐
//! │ base64url(header)    │.│ base64url(claims)    │.│ base64url(sig)    │
//! │ {"typ":"JWS",        │ │ {"iss":"...",        │ │ HMAC-SHA256 over  │
//! │  "alg":"HS256"}      │ │  "exp":1700000000}   │ │ the first two     │
//! └──────────────────────┘ └──────────────────────┘ │ segments          │
//!                                                   └───────────────────┘
//! ```
//!
//! The header's `typ` decides everything: `"JWT"` tokens are unsigned
//! (empty third segment, no authentication value), `"JWS"` tokens carry
//! an `alg` identifier and a signature that is verified before any claim
//! is surfaced.
//!
//! # Quick Start
//!
//! ## Build a signed token
//!
//! ```
//! use chrono::{Duration, Utc};
//! use jose_compact::jose::{self, SignatureAlgorithm};
//!
//! # fn example() -> jose_compact::error::Result<()> {
//! let compact = jose::builder()
//!     .issuer("auth.example.com")
//!     .subject("user-456")
//!     .claim("name", "test")
//!     .expiration_time(Utc::now() + Duration::days(1))
//!     .sign_with(SignatureAlgorithm::Hs256, b"123")
//!     .compact()?;
//!
//! assert!(compact.starts_with("eyJ")); // base64url JSON header
//! # Ok(())
//! # }
//! ```
//!
//! ## Parse and verify it back
//!
//! ```
//! use jose_compact::jose::{self, SignatureAlgorithm, Token};
//!
//! # fn example() -> jose_compact::error::Result<()> {
//! # let compact = jose::builder()
//! #     .claim("name", "test")
//! #     .sign_with(SignatureAlgorithm::Hs256, b"123")
//! #     .compact()?;
//! let token = jose::parser().secret(b"123").parse(&compact)?;
//!
//! assert!(matches!(token, Token::Jws { .. }));
//! assert_eq!(token.claims().claim("name").and_then(|v| v.as_str()), Some("test"));
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`jose`]: the token codec (builder, parser, header/claims models,
//!   algorithms, segment encoding)
//! - [`error`]: error types with recovery guidance
//!
//! # Security Considerations
//!
//! - **Unsigned tokens are unauthenticated.** Building without
//!   [`sign_with`](jose::JoseBuilder::sign_with) selects the no-op
//!   algorithm; the result proves nothing about its origin.
//! - **Verification is constant-time.** HS256 signatures are compared
//!   without short-circuiting, so mismatch position does not leak.
//! - **Secrets are wiped.** Builders and parsers zeroize their copy of
//!   the secret on drop.
//! - **No guessing.** Malformed input of any kind is rejected with a
//!   specific error; the parser never coerces or re-interprets it.
//!
//! # Error Handling
//!
//! All operations return [`Result<T, JoseError>`](error::Result). The
//! taxonomy distinguishes signature failure from temporal failure so
//! callers can react differently:
//!
//! ```
//! use jose_compact::{jose, JoseError};
//!
//! let result = jose::parser().secret(b"123").parse("not-a-token");
//!
//! match result {
//!     Ok(token) => println!("claims: {:?}", token.claims()),
//!     Err(JoseError::InvalidSignature) => {
//!         eprintln!("token is forged or corrupted; re-authenticate");
//!     }
//!     Err(JoseError::TokenExpired(at)) => {
//!         eprintln!("token expired at {at}; refresh it");
//!     }
//!     Err(JoseError::TokenNotYetValid(from)) => {
//!         eprintln!("token becomes valid at {from}; wait");
//!     }
//!     Err(e) => eprintln!("rejected: {e}"),
//! }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod jose;

pub use error::{JoseError, Result};
pub use jose::{Audience, Claims, Header, JoseBuilder, JoseParser, SignatureAlgorithm, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify public API is accessible
        let _ = std::marker::PhantomData::<JoseError>;
        let _ = std::marker::PhantomData::<Token>;
    }
}
