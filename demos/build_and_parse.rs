//! Basic example: build a signed token, parse it back, read a claim.
//!
//! # Running this example
//!
//! ```bash
//! cargo run --example build_and_parse
//! ```

#![allow(
    clippy::print_stdout,
    clippy::use_debug,
    reason = "examples are allowed to use println and simple formatting"
)]

use chrono::{Duration, Utc};
use jose_compact::jose::{self, SignatureAlgorithm};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("jose-compact: Build and Parse Example\n");

    // Build a token signed with HS256 that expires in one day.
    let compact = jose::builder()
        .claim("name", "test")
        .expiration_time(Utc::now() + Duration::days(1))
        .sign_with(SignatureAlgorithm::Hs256, b"123")
        .compact()?;

    println!("Compact token:\n  {compact}\n");

    // Parse it back with the same secret.
    let token = jose::parser().secret(b"123").parse(&compact)?;

    println!("Token type: {:?}", token.header().token_type());
    println!("Algorithm:  {:?}", token.header().algorithm()?);
    println!("Claim name: {:?}", token.claims().claim("name"));
    println!("Expires at: {:?}", token.claims().expiration_time());

    // The wrong secret is rejected before any claim is surfaced.
    match jose::parser().secret(b"wrong").parse(&compact) {
        Ok(_) => println!("\nUnexpected success with wrong secret"),
        Err(e) => println!("\nWrong secret rejected: {e}"),
    }

    Ok(())
}
