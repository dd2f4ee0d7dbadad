//! Error handling example showing how to handle different error types.
//!
//! This example demonstrates proper error handling patterns for compact
//! token parsing, including malformed input, signature failures, and
//! temporal failures, with recovery guidance for each.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example error_handling
//! ```

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    reason = "examples are allowed to use println and simple formatting"
)]

use chrono::{Duration, Utc};
use jose_compact::{
    jose::{self, SignatureAlgorithm, Token},
    JoseError,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("jose-compact: Error Handling Example\n");

    // Example 1: wrong segment count
    println!("Example 1: Parsing a two-segment string (should fail)");
    match jose::parser().parse("header.claims") {
        Ok(_) => println!("   Unexpected success"),
        Err(JoseError::MalformedToken(count)) => {
            println!("   ✓ Caught structural error: {count} segments instead of 3");
            println!("   Recovery: check the token was transmitted intact");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    // Example 2: wrong secret
    println!("\nExample 2: Verifying with the wrong secret (should fail)");
    let compact = jose::builder()
        .claim("name", "test")
        .sign_with(SignatureAlgorithm::Hs256, b"123")
        .compact()?;

    match jose::parser().secret(b"wrong").parse(&compact) {
        Ok(_) => println!("   Unexpected success"),
        Err(JoseError::InvalidSignature) => {
            println!("   ✓ Caught signature failure");
            println!("   Recovery: the bearer must re-authenticate");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    // Example 3: expired token
    println!("\nExample 3: Parsing an expired token (should fail)");
    let expired = jose::builder()
        .expiration_time(Utc::now() - Duration::seconds(1))
        .sign_with(SignatureAlgorithm::Hs256, b"123")
        .compact()?;

    match jose::parser().secret(b"123").parse(&expired) {
        Ok(_) => println!("   Unexpected success"),
        Err(JoseError::TokenExpired(at)) => {
            println!("   ✓ Caught expiry: token expired at {at}");
            println!("   Recovery: obtain a freshly issued token");
        }
        Err(e) => println!("   Unexpected error: {e}"),
    }

    // Example 4: comprehensive error matching
    println!("\nExample 4: Comprehensive error pattern matching");
    let result = jose::parser().secret(b"123").parse(&compact);
    handle_parse_result(result);

    println!("\n✓ Error handling examples complete");
    Ok(())
}

/// Demonstrates comprehensive error handling with recovery guidance.
fn handle_parse_result(result: Result<Token, JoseError>) {
    match result {
        Ok(token) => {
            println!("   ✓ Token accepted");
            println!("   Type: {:?}", token.header().token_type());
            println!("   Signed: {}", token.signature().is_some());
        }

        // Structural errors: the input is not a compact token
        Err(JoseError::MalformedToken(count)) => {
            eprintln!("   ✗ Wrong segment count: {count}");
            eprintln!("   → Fix: transmit the token unmodified, three segments");
        }

        Err(JoseError::MalformedEncoding(e)) => {
            eprintln!("   ✗ Invalid base64url: {e}");
            eprintln!("   → Fix: segments must use the URL-safe alphabet, no padding");
        }

        Err(JoseError::MalformedHeader(msg)) => {
            eprintln!("   ✗ Header is not a JSON object: {msg}");
            eprintln!("   → Fix: check the issuer's serialization");
        }

        Err(JoseError::MalformedPayload(msg)) => {
            eprintln!("   ✗ Payload is not a JSON object: {msg}");
            eprintln!("   → Fix: check the issuer's serialization");
        }

        // Dispatch errors: the header names something unknown
        Err(JoseError::UnsupportedHeaderType(typ)) => {
            eprintln!("   ✗ Unknown token type: {typ:?}");
            eprintln!("   → Fix: only JWT and JWS tokens are accepted");
        }

        Err(JoseError::AlgorithmNotFound(alg)) => {
            eprintln!("   ✗ Unknown algorithm: {alg:?}");
            eprintln!("   → Fix: re-issue with a supported algorithm (NONE, HS256)");
        }

        // Verification failure: reject outright
        Err(JoseError::InvalidSignature) => {
            eprintln!("   ✗ Signature does not verify");
            eprintln!("   → Fix: the bearer must re-authenticate");
            eprintln!("   → Note: claims of such a token are never surfaced");
        }

        // Temporal failures: different remediation each
        Err(JoseError::TokenExpired(at)) => {
            eprintln!("   ✗ Token expired at {at}");
            eprintln!("   → Fix: obtain a freshly issued token");
        }

        Err(JoseError::TokenNotYetValid(from)) => {
            eprintln!("   ✗ Token becomes valid at {from}");
            eprintln!("   → Fix: wait until the activation instant");
            eprintln!("   → Fix: check clock synchronization with the issuer");
        }
    }
}
