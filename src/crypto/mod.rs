//! Cryptographic core for cipherpad
//!
//! Three components composed linearly: a secret holder that owns password
//! plaintext for the minimum necessary lifetime, PBKDF2-HMAC-SHA1 key
//! derivation, and a Rijndael-256/CBC cipher envelope. The holder feeds
//! derivation; derivation feeds the envelope; nothing here touches the CLI.

pub mod encryption;
pub mod key_derivation;
pub mod rijndael;
pub mod secure_memory;

pub use encryption::{decrypt, decrypt_with_key, encrypt, BLOCK_SIZE};
pub use key_derivation::{derive_key, DerivedKey, KEY_SIZE, PBKDF2_ROUNDS};
pub use rijndael::Rijndael256;
pub use secure_memory::{SecretBytes, SecretHolder};
