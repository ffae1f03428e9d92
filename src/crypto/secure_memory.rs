//! Secure memory handling for sensitive data
//!
//! Provides the holder type that owns a password's plaintext bytes between
//! entry and use, and the transient view type handed out during key
//! derivation. Both zero their memory on drop so plaintext secrets never
//! linger after their scope ends, including on panic/unwind paths.

use std::fmt;
use std::ops::Deref;

use zeroize::Zeroize;

use crate::error::{CipherPadError, CipherPadResult};

/// Owns a password's plaintext bytes for the minimum necessary lifetime
///
/// The holder is read-only after creation: there is no mutation API, and the
/// internal buffer is zero-filled before deallocation. Access to the plaintext
/// goes through [`SecretHolder::reveal_scoped`], which guarantees the exposed
/// copy is overwritten on every exit path.
pub struct SecretHolder {
    bytes: Vec<u8>,
}

impl SecretHolder {
    /// Create a holder from a password string, taking ownership and zeroing
    /// the source
    ///
    /// Fails with [`CipherPadError::InvalidInput`] if the password is empty,
    /// the nearest analogue of a missing argument.
    pub fn new(password: impl Into<String>) -> CipherPadResult<Self> {
        let mut password = password.into();
        if password.is_empty() {
            return Err(CipherPadError::InvalidInput);
        }
        let bytes = password.as_bytes().to_vec();
        password.zeroize();
        Ok(Self { bytes })
    }

    /// Expose the password bytes to a closure via a transient view
    ///
    /// The [`SecretBytes`] view is zeroized when the closure returns, whether
    /// it returns normally, early, or unwinds. Callers must not copy the
    /// bytes out of the closure.
    pub fn reveal_scoped<R>(&self, f: impl FnOnce(&SecretBytes) -> R) -> R {
        let view = SecretBytes::new(self.bytes.clone());
        f(&view)
    }

    /// Length of the held password in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A holder is never empty; construction rejects empty passwords
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Drop for SecretHolder {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecretHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretHolder")
            .field("len", &self.bytes.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for SecretHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.bytes.len())
    }
}

/// A transient plaintext view of a password, zeroed on drop
///
/// Only created by [`SecretHolder::reveal_scoped`]; lives exactly as long as
/// the closure it is passed to.
pub struct SecretBytes {
    inner: Vec<u8>,
}

impl SecretBytes {
    fn new(bytes: Vec<u8>) -> Self {
        Self { inner: bytes }
    }

    /// Get the plaintext bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    /// Get the length
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl Deref for SecretBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<[u8]> for SecretBytes {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretBytes")
            .field("len", &self.inner.len())
            .finish()
    }
}
