//! Signing algorithms for compact tokens.
//!
//! Each supported algorithm identifier maps to exactly one implementation,
//! resolved by a plain match with no shared state. Resolution is
//! deterministic and side-effect-free, so builders and parsers on any
//! number of threads can resolve concurrently without coordination.
//! Adding an algorithm means adding a variant here; the builder and parser
//! call [`sign`](SignatureAlgorithm::sign) and
//! [`verify`](SignatureAlgorithm::verify) generically and never change.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{JoseError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Signature algorithms supported for compact tokens.
///
/// The identifier returned by [`name`](Self::name) is the exact string
/// stored in the header's `alg` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    /// No-op algorithm: signs to an empty byte sequence and accepts any
    /// signature on verification.
    ///
    /// Tokens produced with this algorithm are unauthenticated. Callers
    /// must not treat them as proof of origin or integrity.
    #[default]
    None,
    /// HMAC with SHA-256 over the signing input.
    Hs256,
}

impl SignatureAlgorithm {
    /// Returns the identifier stored in the `alg` header parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use jose_compact::jose::SignatureAlgorithm;
    ///
    /// assert_eq!(SignatureAlgorithm::Hs256.name(), "HS256");
    /// assert_eq!(SignatureAlgorithm::None.name(), "NONE");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Hs256 => "HS256",
        }
    }

    /// Resolves an `alg` identifier to its implementation.
    ///
    /// # Errors
    ///
    /// Returns [`JoseError::AlgorithmNotFound`] for identifiers with no
    /// registered implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use jose_compact::jose::SignatureAlgorithm;
    ///
    /// let algorithm = SignatureAlgorithm::from_name("HS256").unwrap();
    /// assert_eq!(algorithm, SignatureAlgorithm::Hs256);
    /// assert!(SignatureAlgorithm::from_name("ES256").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "NONE" => Ok(Self::None),
            "HS256" => Ok(Self::Hs256),
            other => Err(JoseError::AlgorithmNotFound(other.to_owned())),
        }
    }

    /// Signs `data` with `secret`, returning raw signature bytes.
    ///
    /// The no-op algorithm returns an empty byte sequence; HS256 returns
    /// the 32-byte HMAC-SHA-256 tag, not a text encoding of it.
    ///
    /// # Errors
    ///
    /// Returns [`JoseError::AlgorithmNotFound`] if the keyed-hash
    /// primitive rejects the key. HMAC accepts keys of any length, so
    /// this does not happen in practice.
    pub fn sign(&self, data: &[u8], secret: &[u8]) -> Result<Vec<u8>> {
        match self {
            Self::None => Ok(Vec::new()),
            Self::Hs256 => {
                let mut mac = HmacSha256::new_from_slice(secret)
                    .map_err(|_| JoseError::AlgorithmNotFound(self.name().to_owned()))?;
                mac.update(data);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }

    /// Verifies `signature` over `data` with `secret`.
    ///
    /// HS256 recomputes the tag and compares it in constant time, never
    /// with a short-circuiting byte comparison. The no-op algorithm
    /// accepts any signature, including a non-empty one.
    ///
    /// # Errors
    ///
    /// Returns [`JoseError::AlgorithmNotFound`] under the same conditions
    /// as [`sign`](Self::sign).
    pub fn verify(&self, data: &[u8], signature: &[u8], secret: &[u8]) -> Result<bool> {
        match self {
            Self::None => Ok(true),
            Self::Hs256 => {
                let mut mac = HmacSha256::new_from_slice(secret)
                    .map_err(|_| JoseError::AlgorithmNotFound(self.name().to_owned()))?;
                mac.update(data);
                Ok(mac.verify_slice(signature).is_ok())
            }
        }
    }
}
