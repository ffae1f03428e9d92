//! cipherpad - Password-based text encryption with self-contained envelopes
//!
//! This library turns a password and a per-record salt into a derived key,
//! uses that key to produce a base64-encoded ciphertext envelope, and
//! reverses the process to recover plaintext. Envelopes decode to
//! `IV || ciphertext` where the IV is one 32-byte cipher block.
//!
//! The cipher parameters are historical and kept for wire compatibility:
//! PBKDF2-HMAC-SHA1 at 4958 iterations, and Rijndael with a 256-bit block
//! (not AES, which fixes the block at 128 bits) in CBC mode with PKCS#7
//! padding. Treat them as a preserved data format, not a recommendation.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `crypto`: Secret holding, key derivation, and the cipher envelope
//! - `cli`: Command handlers for the `cipherpad` binary
//!
//! # Example
//!
//! ```rust
//! use cipherpad::crypto::{encrypt, decrypt, SecretHolder};
//!
//! let salt = "AAAAAAAAAAAAAAAAAAAAAA==";
//! let secret = SecretHolder::new("correct horse").unwrap();
//! let envelope = encrypt("hello world", &secret, salt).unwrap();
//! assert_eq!(decrypt(&envelope, &secret, salt).unwrap(), "hello world");
//! ```
//!
//! Callers are responsible for persisting the salt next to the ciphertext;
//! decryption requires the exact salt used at encryption time.

pub mod cli;
pub mod crypto;
pub mod error;

pub use error::{CipherPadError, CipherPadResult};
