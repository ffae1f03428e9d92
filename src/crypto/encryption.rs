//! Cipher envelope encryption/decryption
//!
//! Produces and consumes the transportable representation of an encrypted
//! text record: base64(`IV || ciphertext`), where the IV is one cipher block
//! (32 bytes) and the body is Rijndael-256/CBC with PKCS#7 padding. Each
//! encryption generates a fresh random IV, so identical inputs never produce
//! identical envelopes.

use base64::{engine::general_purpose::STANDARD, Engine};
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cipher::generic_array::GenericArray;
use rand::{rngs::OsRng, RngCore};

use crate::error::{CipherPadError, CipherPadResult};

use super::key_derivation::derive_key;
use super::rijndael::{Rijndael256, RIJNDAEL_BLOCK_SIZE};
use super::{DerivedKey, SecretHolder};

/// Envelope IV length in bytes; equal to the cipher block size
pub const BLOCK_SIZE: usize = RIJNDAEL_BLOCK_SIZE;

type Rijndael256CbcEnc = cbc::Encryptor<Rijndael256>;
type Rijndael256CbcDec = cbc::Decryptor<Rijndael256>;

/// Encrypt text under a password and salt, returning a base64 envelope
///
/// Derives the key, generates a random 32-byte IV, and CBC-encrypts the
/// UTF-8 plaintext bytes with PKCS#7 padding. The returned string decodes
/// to `IV || ciphertext`.
pub fn encrypt(plaintext: &str, secret: &SecretHolder, salt_b64: &str) -> CipherPadResult<String> {
    let key = derive_key(secret, salt_b64)?;

    let mut iv = [0u8; BLOCK_SIZE];
    OsRng.fill_bytes(&mut iv);

    let cipher = Rijndael256CbcEnc::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(&iv),
    );
    let body = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut envelope = Vec::with_capacity(BLOCK_SIZE + body.len());
    envelope.extend_from_slice(&iv);
    envelope.extend_from_slice(&body);

    Ok(STANDARD.encode(envelope))
}

/// Decrypt a base64 envelope under a password and salt
pub fn decrypt(cipher_text: &str, secret: &SecretHolder, salt_b64: &str) -> CipherPadResult<String> {
    let key = derive_key(secret, salt_b64)?;
    decrypt_with_key(cipher_text, &key)
}

/// Decrypt a base64 envelope with an already-derived key
///
/// Skips key derivation; used when the caller has cached the key across
/// several records encrypted under the same (password, salt) pair.
pub fn decrypt_with_key(cipher_text: &str, key: &DerivedKey) -> CipherPadResult<String> {
    let envelope = STANDARD
        .decode(cipher_text)
        .map_err(|e| CipherPadError::InvalidCiphertext(e.to_string()))?;

    if envelope.len() < BLOCK_SIZE {
        return Err(CipherPadError::InvalidCiphertext(format!(
            "envelope is {} bytes, shorter than the {}-byte IV",
            envelope.len(),
            BLOCK_SIZE
        )));
    }

    let (iv, body) = envelope.split_at(BLOCK_SIZE);
    if body.is_empty() || body.len() % BLOCK_SIZE != 0 {
        return Err(CipherPadError::InvalidCiphertext(format!(
            "ciphertext body is {} bytes, not a whole number of {}-byte blocks",
            body.len(),
            BLOCK_SIZE
        )));
    }

    let cipher = Rijndael256CbcDec::new(
        GenericArray::from_slice(key.as_bytes()),
        GenericArray::from_slice(iv),
    );
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(body)
        .map_err(|_| CipherPadError::DecryptionFailure)?;

    String::from_utf8(plaintext).map_err(|_| CipherPadError::DecryptionFailure)
}
