use chrono::{Duration, Utc};
use proptest::prelude::*;

use crate::error::JoseError;
use crate::jose::{self, SignatureAlgorithm, Token};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_signed_roundtrip(
        secret in any::<Vec<u8>>(),
        issuer in "[a-zA-Z0-9-_]{1,64}",
        name in "[a-zA-Z0-9 ]{0,32}",
        count in any::<i64>(),
        exp_offset in 60i64..86_400,
    ) {
        let compact = jose::builder()
            .issuer(issuer.as_str())
            .claim("name", name.as_str())
            .claim("count", count)
            .expiration_time(Utc::now() + Duration::seconds(exp_offset))
            .sign_with(SignatureAlgorithm::Hs256, &secret)
            .compact()
            .expect("compaction failed");

        let token = jose::parser()
            .secret(&secret)
            .parse(&compact)
            .expect("parse of a freshly built token failed");

        prop_assert!(matches!(token, Token::Jws { .. }), "expected Token::Jws");
        prop_assert_eq!(token.claims().issuer(), Some(issuer.as_str()));
        prop_assert_eq!(
            token.claims().claim("name").and_then(|v| v.as_str()),
            Some(name.as_str())
        );
        prop_assert_eq!(
            token.claims().claim("count").and_then(|v| v.as_i64()),
            Some(count)
        );
    }

    #[test]
    fn test_unsigned_roundtrip(
        name in "[a-zA-Z0-9 ]{0,32}",
    ) {
        let compact = jose::builder()
            .claim("name", name.as_str())
            .compact()
            .expect("compaction failed");

        let token = jose::parser().parse(&compact).expect("parse failed");

        prop_assert!(matches!(token, Token::Jwt { .. }), "expected Token::Jwt");
        prop_assert_eq!(
            token.claims().claim("name").and_then(|v| v.as_str()),
            Some(name.as_str())
        );
    }

    #[test]
    fn test_tampering_never_yields_a_token(
        secret in any::<Vec<u8>>(),
        name in "[a-zA-Z0-9]{1,32}",
        position in any::<prop::sample::Index>(),
    ) {
        let compact = jose::builder()
            .claim("name", name.as_str())
            .sign_with(SignatureAlgorithm::Hs256, &secret)
            .compact()
            .expect("compaction failed");

        // Flip one character anywhere in the compact string.
        let index = position.index(compact.len());
        let original = compact.as_bytes()[index];
        let replacement = if original == b'A' { b'B' } else { b'A' };
        let mut tampered = compact.into_bytes();
        tampered[index] = replacement;
        let tampered = String::from_utf8(tampered).expect("ascii stays ascii");

        let result = jose::parser().secret(&secret).parse(&tampered);
        prop_assert!(
            matches!(
                result,
                Err(JoseError::InvalidSignature
                    | JoseError::MalformedToken(_)
                    | JoseError::MalformedEncoding(_)
                    | JoseError::MalformedHeader(_)
                    | JoseError::UnsupportedHeaderType(_)
                    | JoseError::AlgorithmNotFound(_))
            ),
            "tampered token must never parse: {:?}",
            result
        );
    }

    #[test]
    fn test_wrong_secret_never_verifies(
        // HMAC zero-pads keys to the block size, so byte vectors that
        // differ only in trailing zero bytes are the same key. Keys drawn
        // from this alphabet never collide unless equal.
        secret in "[a-zA-Z0-9]{1,32}",
        other in "[a-zA-Z0-9]{1,32}",
    ) {
        prop_assume!(secret != other);

        let compact = jose::builder()
            .claim("name", "test")
            .sign_with(SignatureAlgorithm::Hs256, secret.as_bytes())
            .compact()
            .expect("compaction failed");

        let result = jose::parser().secret(other.as_bytes()).parse(&compact);
        prop_assert!(
            matches!(result, Err(JoseError::InvalidSignature)),
            "expected Err(JoseError::InvalidSignature)"
        );
    }
}
