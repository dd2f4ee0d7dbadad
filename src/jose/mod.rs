//! Compact JWT/JWS token codec.
//!
//! This module implements the compact serialization of JSON Web Tokens:
//! building a token from header and claims, and parsing a token back with
//! signature verification and temporal validity enforcement.
//!
//! # Compact Format
//!
//! A compact token is three base64url segments joined by [`SEPARATOR`]:
//!
//! ```text
//! base64url(JSON(header)) . base64url(JSON(claims)) . base64url(signature)
//! ```
//!
//! - the header always carries `typ` (`"JWT"` unsigned, `"JWS"` signed)
//!   and carries `alg` only when signed;
//! - the claims object contains every currently-set claim and nothing
//!   else (no null or empty fields);
//! - the signature covers the first two segments verbatim and is empty
//!   for the no-op algorithm.
//!
//! Segment encoding uses the URL-safe base64 alphabet without padding,
//! and JSON object keys keep their insertion order, so the same logical
//! content always produces the same bytes.
//!
//! # Key Components
//!
//! - [`JoseBuilder`]: assembles header + claims + algorithm into a
//!   compact string
//! - [`JoseParser`]: decomposes a compact string, verifies it, and yields
//!   a [`Token`]
//! - [`Header`] / [`Claims`]: ordered-map models with typed accessors for
//!   the registered fields
//! - [`SignatureAlgorithm`]: the closed set of signing algorithms
//! - [`encoding`]: the base64url segment codec
//!
//! The builder and parser depend on the models, the algorithm set, and
//! the codec; they do not depend on each other.
//!
//! # Security Considerations
//!
//! - **Unsigned tokens carry no authentication value.** The no-op
//!   algorithm exists to model the unsigned token class; treat its
//!   claims as unverified input.
//! - **Verification comes first.** A signed token's claims are not even
//!   decoded until its signature verifies, and a failed verification
//!   never yields a token.
//! - **Constant-time comparison.** HS256 verification never
//!   short-circuits on the first mismatched byte.
//! - **Strict rejection.** Any structural ambiguity (segment count,
//!   alphabet, JSON shape, unknown `typ` or `alg`) is an error, never a
//!   guess.
//!
//! # Examples
//!
//! ```
//! use chrono::{Duration, Utc};
//! use jose_compact::jose::{self, SignatureAlgorithm};
//!
//! # fn example() -> jose_compact::error::Result<()> {
//! let compact = jose::builder()
//!     .issuer("issuer.example.com")
//!     .claim("name", "test")
//!     .expiration_time(Utc::now() + Duration::days(1))
//!     .sign_with(SignatureAlgorithm::Hs256, b"123")
//!     .compact()?;
//!
//! let token = jose::parser().secret(b"123").parse(&compact)?;
//! assert_eq!(token.claims().issuer(), Some("issuer.example.com"));
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod builder;
pub mod claims;
pub mod encoding;
pub mod header;
pub mod parser;
pub mod token;

#[cfg(test)]
mod tests;

pub use algorithm::SignatureAlgorithm;
pub use builder::JoseBuilder;
pub use claims::{Audience, Claims};
pub use header::Header;
pub use parser::JoseParser;
pub use token::Token;

/// Separator between the three compact segments.
pub const SEPARATOR: char = '.';

/// Creates a builder for a new compact token.
///
/// Equivalent to [`JoseBuilder::new`].
#[must_use]
pub fn builder() -> JoseBuilder {
    JoseBuilder::new()
}

/// Creates a parser for compact tokens.
///
/// Equivalent to [`JoseParser::new`].
#[must_use]
pub fn parser() -> JoseParser {
    JoseParser::new()
}
