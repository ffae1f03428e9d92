//! Custom error types for cipherpad
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.
//!
//! Every failure mode is a distinct, inspectable variant so callers can tell
//! a wrong password apart from corrupted input. Callers that only care about
//! the legacy "worked or didn't" contract can collapse any result with
//! [`Result::ok`].

use thiserror::Error;

/// The main error type for cipherpad operations
#[derive(Error, Debug)]
pub enum CipherPadError {
    /// No password was supplied when constructing a secret holder
    #[error("Invalid input: a non-empty password is required")]
    InvalidInput,

    /// The salt string was not valid standard base64
    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    /// The ciphertext string was not valid base64, or the decoded envelope
    /// was too short to contain an IV and a whole number of cipher blocks
    #[error("Invalid ciphertext: {0}")]
    InvalidCiphertext(String),

    /// The envelope decoded cleanly but decryption produced garbage,
    /// typically a wrong password or a corrupted body
    #[error("Decryption failed: wrong password or corrupted data")]
    DecryptionFailure,

    /// An underlying cryptographic primitive reported an error; not expected
    /// to occur with well-formed inputs
    #[error("Key derivation failed: {0}")]
    KeyDerivationFailure(String),
}

impl CipherPadError {
    /// Check if this error means the envelope itself was malformed
    pub fn is_invalid_ciphertext(&self) -> bool {
        matches!(self, Self::InvalidCiphertext(_))
    }

    /// Check if this error means decryption ran but did not verify
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, Self::DecryptionFailure)
    }
}

/// Result type alias for cipherpad operations
pub type CipherPadResult<T> = Result<T, CipherPadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CipherPadError::InvalidSalt("bad symbol".into());
        assert_eq!(err.to_string(), "Invalid salt: bad symbol");
    }

    #[test]
    fn test_error_predicates() {
        assert!(CipherPadError::DecryptionFailure.is_decryption_failure());
        assert!(CipherPadError::InvalidCiphertext("truncated".into()).is_invalid_ciphertext());
        assert!(!CipherPadError::InvalidInput.is_decryption_failure());
    }
}
