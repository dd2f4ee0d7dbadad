//! Compact token consumption and verification.

use std::fmt;

use chrono::Utc;
use tracing::{debug, instrument, warn};
use zeroize::Zeroizing;

use crate::error::{JoseError, Result};
use crate::jose::{self, encoding, header, Claims, Header, Token};

/// Parses compact token strings into verified [`Token`] values.
///
/// The parser holds only the verification secret. Each
/// [`parse`](JoseParser::parse) call is an independent, bounded
/// computation over the input string with a single read of the current
/// time, so one parser can serve any number of threads.
///
/// # Examples
///
/// ```
/// use jose_compact::jose::{self, SignatureAlgorithm};
///
/// # fn example() -> jose_compact::error::Result<()> {
/// let compact = jose::builder()
///     .claim("name", "test")
///     .sign_with(SignatureAlgorithm::Hs256, b"123")
///     .compact()?;
///
/// let token = jose::parser().secret(b"123").parse(&compact)?;
/// assert_eq!(token.claims().claim("name").and_then(|v| v.as_str()), Some("test"));
/// # Ok(())
/// # }
/// ```
pub struct JoseParser {
    secret: Zeroizing<Vec<u8>>,
}

impl Default for JoseParser {
    fn default() -> Self {
        Self { secret: Zeroizing::new(Vec::new()) }
    }
}

impl fmt::Debug for JoseParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoseParser").field("secret", &"<redacted>").finish()
    }
}

impl JoseParser {
    /// Creates a parser with an empty verification secret.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the secret used for signature verification.
    ///
    /// The secret is copied into the parser and zeroized when the parser
    /// is dropped.
    #[must_use]
    pub fn secret(mut self, secret: &[u8]) -> Self {
        self.secret = Zeroizing::new(secret.to_vec());
        self
    }

    /// Parses and verifies a compact token.
    ///
    /// The input must be exactly three separator-joined segments. The
    /// header segment is decoded first and its `typ` parameter selects
    /// the variant. For signed tokens the signature is verified over the
    /// first two segments, verbatim as transmitted, before the claims
    /// segment is even decoded; claims from a token that fails
    /// verification are never returned. Temporal validity (`exp`, `nbf`)
    /// is enforced against a single reading of the current time, and only
    /// for claims that are present.
    ///
    /// # Errors
    ///
    /// - [`JoseError::MalformedToken`]: segment count is not three
    /// - [`JoseError::MalformedEncoding`]: a segment is not valid
    ///   base64url
    /// - [`JoseError::MalformedHeader`] / [`JoseError::MalformedPayload`]:
    ///   a segment is not a JSON object
    /// - [`JoseError::UnsupportedHeaderType`]: `typ` is neither `"JWT"`
    ///   nor `"JWS"`
    /// - [`JoseError::AlgorithmNotFound`]: a signed header's `alg` is
    ///   absent or unknown
    /// - [`JoseError::InvalidSignature`]: signature verification failed
    /// - [`JoseError::TokenExpired`] / [`JoseError::TokenNotYetValid`]:
    ///   the token is outside its validity window
    #[instrument(skip(self, compact), fields(len = compact.len()))]
    pub fn parse(&self, compact: &str) -> Result<Token> {
        let segments: Vec<&str> = compact.split(jose::SEPARATOR).collect();
        let (header_encoded, claims_encoded, signature_encoded) = match segments.as_slice() {
            [header, claims, signature] => (*header, *claims, *signature),
            parts => return Err(JoseError::MalformedToken(parts.len())),
        };

        let header_json = encoding::decode(header_encoded)?;
        let header: Header = serde_json::from_slice(&header_json)
            .map_err(|e| JoseError::MalformedHeader(e.to_string()))?;

        let signature = match header.token_type() {
            Some(header::TYPE_JWT) => None,
            Some(header::TYPE_JWS) => {
                let signing_input =
                    format!("{header_encoded}{separator}{claims_encoded}", separator = jose::SEPARATOR);
                let signature = encoding::decode(signature_encoded)?;
                let algorithm = header.algorithm()?;
                if !algorithm.verify(signing_input.as_bytes(), &signature, &self.secret)? {
                    warn!(algorithm = algorithm.name(), "signature verification failed");
                    return Err(JoseError::InvalidSignature);
                }
                Some(signature)
            }
            other => {
                return Err(JoseError::UnsupportedHeaderType(other.unwrap_or_default().to_owned()))
            }
        };

        let claims_json = encoding::decode(claims_encoded)?;
        let claims: Claims = serde_json::from_slice(&claims_json)
            .map_err(|e| JoseError::MalformedPayload(e.to_string()))?;

        // One reading of the clock covers both temporal checks.
        let now = Utc::now();

        if let Some(expiration) = claims.expiration_time() {
            if now > expiration {
                warn!(%expiration, "token has expired");
                return Err(JoseError::TokenExpired(expiration));
            }
        }

        if let Some(not_before) = claims.not_before() {
            if now < not_before {
                warn!(%not_before, "token is not yet valid");
                return Err(JoseError::TokenNotYetValid(not_before));
            }
        }

        debug!(token_type = ?header.token_type(), "token parsed");
        Ok(match signature {
            None => Token::Jwt { header, claims },
            Some(signature) => Token::Jws { header, claims, signature },
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::jose::{builder::JoseBuilder, SignatureAlgorithm};

    fn signed(secret: &[u8]) -> String {
        JoseBuilder::new()
            .claim("name", "test")
            .sign_with(SignatureAlgorithm::Hs256, secret)
            .compact()
            .unwrap()
    }

    #[test]
    fn test_parse_signed_roundtrip() {
        let token = JoseParser::new().secret(b"123").parse(&signed(b"123")).unwrap();

        assert!(matches!(token, Token::Jws { .. }));
        assert_eq!(token.header().token_type(), Some(header::TYPE_JWS));
        assert_eq!(token.claims().claim("name").and_then(|v| v.as_str()), Some("test"));
        assert_eq!(token.signature().map(<[u8]>::len), Some(32));
    }

    #[test]
    fn test_parse_rejects_wrong_secret() {
        let result = JoseParser::new().secret(b"wrong").parse(&signed(b"123"));
        assert!(matches!(result, Err(JoseError::InvalidSignature)));
    }

    #[test]
    fn test_parse_unsigned_token_without_secret() {
        let compact = JoseBuilder::new().claim("name", "test").compact().unwrap();
        let token = JoseParser::new().parse(&compact).unwrap();

        assert!(matches!(token, Token::Jwt { .. }));
        assert_eq!(token.signature(), None);
        assert_eq!(token.claims().claim("name").and_then(|v| v.as_str()), Some("test"));
    }

    #[test]
    fn test_parse_rejects_two_segments() {
        let result = JoseParser::new().parse("eyJ0eXAiOiJKV1QifQ.e30");
        assert!(matches!(result, Err(JoseError::MalformedToken(2))));
    }

    #[test]
    fn test_parse_rejects_four_segments() {
        let compact = format!("{}.extra", signed(b"123"));
        let result = JoseParser::new().secret(b"123").parse(&compact);
        assert!(matches!(result, Err(JoseError::MalformedToken(4))));
    }

    #[test]
    fn test_parse_rejects_invalid_header_encoding() {
        let result = JoseParser::new().parse("not!base64.e30.");
        assert!(matches!(result, Err(JoseError::MalformedEncoding(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_header_json() {
        let garbage = encoding::encode(b"not json");
        let result = JoseParser::new().parse(&format!("{garbage}.e30."));
        assert!(matches!(result, Err(JoseError::MalformedHeader(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_payload_json() {
        let header = encoding::encode(br#"{"typ":"JWT"}"#);
        let garbage = encoding::encode(b"not json");
        let result = JoseParser::new().parse(&format!("{header}.{garbage}."));
        assert!(matches!(result, Err(JoseError::MalformedPayload(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_header_type() {
        let header = encoding::encode(br#"{"typ":"JWE"}"#);
        let result = JoseParser::new().parse(&format!("{header}.e30."));
        assert!(matches!(result, Err(JoseError::UnsupportedHeaderType(t)) if t == "JWE"));
    }

    #[test]
    fn test_parse_rejects_missing_header_type() {
        let header = encoding::encode(b"{}");
        let result = JoseParser::new().parse(&format!("{header}.e30."));
        assert!(matches!(result, Err(JoseError::UnsupportedHeaderType(t)) if t.is_empty()));
    }

    #[test]
    fn test_parse_rejects_jws_without_algorithm() {
        let header = encoding::encode(br#"{"typ":"JWS"}"#);
        let result = JoseParser::new().parse(&format!("{header}.e30."));
        assert!(matches!(result, Err(JoseError::AlgorithmNotFound(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_algorithm() {
        let header = encoding::encode(br#"{"typ":"JWS","alg":"ES256"}"#);
        let result = JoseParser::new().parse(&format!("{header}.e30."));
        assert!(matches!(result, Err(JoseError::AlgorithmNotFound(name)) if name == "ES256"));
    }

    #[test]
    fn test_signature_checked_before_payload_decoding() {
        // Tampered payload on a signed token must surface as a signature
        // failure, not as a payload JSON error.
        let compact = signed(b"123");
        let parts: Vec<&str> = compact.split('.').collect();
        let garbage = encoding::encode(b"not json");
        let tampered = format!("{}.{}.{}", parts[0], garbage, parts[2]);

        let result = JoseParser::new().secret(b"123").parse(&tampered);
        assert!(matches!(result, Err(JoseError::InvalidSignature)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let compact = JoseBuilder::new()
            .expiration_time(Utc::now() - Duration::seconds(1))
            .sign_with(SignatureAlgorithm::Hs256, b"123")
            .compact()
            .unwrap();

        let result = JoseParser::new().secret(b"123").parse(&compact);
        assert!(matches!(result, Err(JoseError::TokenExpired(_))));
    }

    #[test]
    fn test_future_expiration_accepted() {
        let compact = JoseBuilder::new()
            .expiration_time(Utc::now() + Duration::hours(1))
            .sign_with(SignatureAlgorithm::Hs256, b"123")
            .compact()
            .unwrap();

        assert!(JoseParser::new().secret(b"123").parse(&compact).is_ok());
    }

    #[test]
    fn test_not_yet_valid_token_rejected() {
        let compact = JoseBuilder::new()
            .not_before(Utc::now() + Duration::hours(1))
            .sign_with(SignatureAlgorithm::Hs256, b"123")
            .compact()
            .unwrap();

        let result = JoseParser::new().secret(b"123").parse(&compact);
        assert!(matches!(result, Err(JoseError::TokenNotYetValid(_))));
    }

    #[test]
    fn test_passed_not_before_accepted() {
        let compact = JoseBuilder::new()
            .not_before(Utc::now() - Duration::hours(1))
            .sign_with(SignatureAlgorithm::Hs256, b"123")
            .compact()
            .unwrap();

        assert!(JoseParser::new().secret(b"123").parse(&compact).is_ok());
    }

    #[test]
    fn test_absent_temporal_claims_skip_checks() {
        assert!(JoseParser::new().secret(b"123").parse(&signed(b"123")).is_ok());
    }

    #[test]
    fn test_expiry_checked_only_after_signature() {
        // An expired token presented with the wrong secret must fail on
        // the signature, not leak its expiry state.
        let compact = JoseBuilder::new()
            .expiration_time(Utc::now() - Duration::seconds(1))
            .sign_with(SignatureAlgorithm::Hs256, b"123")
            .compact()
            .unwrap();

        let result = JoseParser::new().secret(b"wrong").parse(&compact);
        assert!(matches!(result, Err(JoseError::InvalidSignature)));
    }
}
