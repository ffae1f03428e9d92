//! Command handlers for the cipherpad binary
//!
//! Thin wrappers over the crypto core: source a password, call one
//! operation, print one line. Salt and ciphertext persistence is on the
//! user; the core never stores anything.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use rand::{rngs::OsRng, RngCore};

use crate::crypto::{decrypt, encrypt, SecretHolder};

/// Handle the `encrypt` command
pub fn handle_encrypt(text: &str, salt: &str, password: Option<String>) -> Result<()> {
    let secret = obtain_secret(password)?;
    let envelope = encrypt(text, &secret, salt)?;
    println!("{}", envelope);
    Ok(())
}

/// Handle the `decrypt` command
pub fn handle_decrypt(cipher_text: &str, salt: &str, password: Option<String>) -> Result<()> {
    let secret = obtain_secret(password)?;
    let plaintext = decrypt(cipher_text, &secret, salt)?;
    println!("{}", plaintext);
    Ok(())
}

/// Handle the `gen-salt` command
///
/// Salts are caller-side data: the core consumes them but never mints them,
/// so the convenience lives here.
pub fn handle_gen_salt(bytes: usize) -> Result<()> {
    let mut salt = vec![0u8; bytes];
    OsRng.fill_bytes(&mut salt);
    println!("{}", STANDARD.encode(salt));
    Ok(())
}

/// Build a secret holder from a flag value or an interactive prompt
fn obtain_secret(password: Option<String>) -> Result<SecretHolder> {
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ").context("Failed to read password")?,
    };
    Ok(SecretHolder::new(password)?)
}
