//! Key derivation using PBKDF2-HMAC-SHA1
//!
//! Derives the symmetric key from a password and a per-record salt. The
//! iteration count and digest are fixed historical parameters: changing
//! either would change every derived key and orphan existing ciphertext,
//! so they are kept as explicit constants rather than silently upgraded.
//! HMAC-SHA1 at ~5k iterations is weak by modern standards; see the crate
//! docs before reusing these parameters for new data.

use base64::{engine::general_purpose::STANDARD, Engine};
use pbkdf2::pbkdf2_hmac;
use sha1::Sha1;
use zeroize::Zeroize;

use crate::error::{CipherPadError, CipherPadResult};

use super::SecretHolder;

/// Size of the derived key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// Fixed PBKDF2 iteration count; a compatibility constant, not a tunable
pub const PBKDF2_ROUNDS: u32 = 4958;

/// A derived encryption key
///
/// Ephemeral: intended to live for one encrypt/decrypt call. Zeroed on drop.
pub struct DerivedKey {
    key: [u8; KEY_SIZE],
}

impl DerivedKey {
    /// Wrap raw key bytes, for callers that cache a key across calls
    pub fn from_bytes(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// Don't print the contents in Debug output
impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey").finish_non_exhaustive()
    }
}

/// Derive a key from a password and a base64-encoded salt
///
/// The password's UTF-8 bytes are fed to PBKDF2; this matches the original
/// data format, so the same (password, salt) pair reproduces the same key
/// byte-for-byte. Deterministic: no randomness is involved.
pub fn derive_key(secret: &SecretHolder, salt_b64: &str) -> CipherPadResult<DerivedKey> {
    let salt = STANDARD
        .decode(salt_b64)
        .map_err(|e| CipherPadError::InvalidSalt(e.to_string()))?;

    let mut key = [0u8; KEY_SIZE];
    secret.reveal_scoped(|password| {
        pbkdf2_hmac::<Sha1>(password.as_bytes(), &salt, PBKDF2_ROUNDS, &mut key);
    });

    Ok(DerivedKey { key })
}
