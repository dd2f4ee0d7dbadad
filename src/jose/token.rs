//! Parsed token variants.

use crate::jose::{Claims, Header};

/// A parsed compact token.
///
/// The variant mirrors the header's `typ` parameter and nothing else:
/// [`Token::Jwt`] for unsigned tokens, [`Token::Jws`] for signed tokens
/// carrying the raw signature bytes from the third segment. The header
/// and claims are owned by the token and exposed through read accessors.
///
/// A [`Token::Jws`] only exists after its signature verified; a token
/// whose signature failed verification is never constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Unsigned token (`typ` = `"JWT"`).
    ///
    /// Carries no authentication value; treat its claims as unverified
    /// input.
    Jwt {
        /// Token metadata from the first segment.
        header: Header,
        /// Payload assertions from the second segment.
        claims: Claims,
    },
    /// Signed token (`typ` = `"JWS"`).
    Jws {
        /// Token metadata from the first segment.
        header: Header,
        /// Payload assertions from the second segment.
        claims: Claims,
        /// Raw signature bytes decoded from the third segment.
        signature: Vec<u8>,
    },
}

impl Token {
    /// Returns the token's header.
    #[must_use]
    pub fn header(&self) -> &Header {
        match self {
            Self::Jwt { header, .. } | Self::Jws { header, .. } => header,
        }
    }

    /// Returns the token's claims.
    #[must_use]
    pub fn claims(&self) -> &Claims {
        match self {
            Self::Jwt { claims, .. } | Self::Jws { claims, .. } => claims,
        }
    }

    /// Returns the raw signature bytes for signed tokens, `None` for
    /// unsigned tokens.
    #[must_use]
    pub fn signature(&self) -> Option<&[u8]> {
        match self {
            Self::Jwt { .. } => None,
            Self::Jws { signature, .. } => Some(signature),
        }
    }
}
