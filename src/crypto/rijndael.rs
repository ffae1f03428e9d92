//! Rijndael block cipher with a 256-bit block
//!
//! The envelope format predates this crate and uses Rijndael with both the
//! block and the key at 256 bits. AES fixes the block at 128 bits, so no
//! off-the-shelf AES implementation can read that format; this module
//! implements the generalized cipher (Nb = 8, Nk = 8, Nr = 14) behind the
//! RustCrypto `cipher` traits so the `cbc` mode crate can drive it.
//!
//! The only differences from AES-256 are the number of state columns, the
//! ShiftRows offsets ({0, 1, 3, 4} for a 256-bit block) and the key schedule
//! length; S-box, MixColumns and the round structure are identical.

use cipher::{consts::U32, AlgorithmName, BlockCipher, Key, KeyInit, KeySizeUser};
use core::fmt;
use zeroize::Zeroize;

/// Cipher block size in bytes (256 bits)
pub const RIJNDAEL_BLOCK_SIZE: usize = 32;

const COLUMNS: usize = 8;
const ROUNDS: usize = 14;
const KEY_WORDS: usize = 8;
const SCHEDULE_WORDS: usize = COLUMNS * (ROUNDS + 1);

// Row shift offsets for the 256-bit block; AES (128-bit block) uses {0,1,2,3}.
const ROW_SHIFTS: [usize; 4] = [0, 1, 3, 4];

const SBOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab,
    0x76, 0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4,
    0x72, 0xc0, 0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71,
    0xd8, 0x31, 0x15, 0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2,
    0xeb, 0x27, 0xb2, 0x75, 0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6,
    0xb3, 0x29, 0xe3, 0x2f, 0x84, 0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb,
    0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf, 0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45,
    0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8, 0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5,
    0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2, 0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44,
    0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73, 0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a,
    0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb, 0xe0, 0x32, 0x3a, 0x0a, 0x49,
    0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79, 0xe7, 0xc8, 0x37, 0x6d,
    0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08, 0xba, 0x78, 0x25,
    0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a, 0x70, 0x3e,
    0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e, 0xe1,
    0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb,
    0x16,
];

// Built from the forward table so the pair cannot drift apart.
const INV_SBOX: [u8; 256] = {
    let mut inv = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        inv[SBOX[i] as usize] = i as u8;
        i += 1;
    }
    inv
};

#[inline(always)]
fn xtime(x: u8) -> u8 {
    (x << 1) ^ (((x >> 7) & 1) * 0x1b)
}

// Multiplication in GF(2^8) with the AES reduction polynomial.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0;
    for _ in 0..8 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}

type State = [u8; RIJNDAEL_BLOCK_SIZE];
type RoundKeys = [[u8; RIJNDAEL_BLOCK_SIZE]; ROUNDS + 1];

fn expand_key(key: &[u8; 32]) -> RoundKeys {
    let mut w = [[0u8; 4]; SCHEDULE_WORDS];
    for (i, word) in w.iter_mut().enumerate().take(KEY_WORDS) {
        word.copy_from_slice(&key[4 * i..4 * i + 4]);
    }

    let mut rcon: u8 = 1;
    for i in KEY_WORDS..SCHEDULE_WORDS {
        let prev = w[i - 1];
        let mut t = prev;
        if i % KEY_WORDS == 0 {
            // RotWord then SubWord, with the round constant on the first byte
            t = [
                SBOX[prev[1] as usize] ^ rcon,
                SBOX[prev[2] as usize],
                SBOX[prev[3] as usize],
                SBOX[prev[0] as usize],
            ];
            rcon = xtime(rcon);
        } else if i % KEY_WORDS == 4 {
            // Extra SubWord step, as in the AES-256 schedule
            for b in t.iter_mut() {
                *b = SBOX[*b as usize];
            }
        }
        for j in 0..4 {
            w[i][j] = w[i - KEY_WORDS][j] ^ t[j];
        }
    }

    let mut round_keys = [[0u8; RIJNDAEL_BLOCK_SIZE]; ROUNDS + 1];
    for (r, rk) in round_keys.iter_mut().enumerate() {
        for c in 0..COLUMNS {
            rk[4 * c..4 * c + 4].copy_from_slice(&w[r * COLUMNS + c]);
        }
    }
    w.zeroize();
    round_keys
}

fn add_round_key(state: &mut State, rk: &[u8; RIJNDAEL_BLOCK_SIZE]) {
    for (s, k) in state.iter_mut().zip(rk.iter()) {
        *s ^= k;
    }
}

fn sub_bytes(state: &mut State) {
    for b in state.iter_mut() {
        *b = SBOX[*b as usize];
    }
}

fn inv_sub_bytes(state: &mut State) {
    for b in state.iter_mut() {
        *b = INV_SBOX[*b as usize];
    }
}

// State byte order is column-major: state[4*c + r] is row r of column c.
fn shift_rows(state: &mut State) {
    let mut out = [0u8; RIJNDAEL_BLOCK_SIZE];
    for c in 0..COLUMNS {
        for (r, shift) in ROW_SHIFTS.iter().enumerate() {
            out[4 * c + r] = state[4 * ((c + shift) % COLUMNS) + r];
        }
    }
    *state = out;
}

fn inv_shift_rows(state: &mut State) {
    let mut out = [0u8; RIJNDAEL_BLOCK_SIZE];
    for c in 0..COLUMNS {
        for (r, shift) in ROW_SHIFTS.iter().enumerate() {
            out[4 * ((c + shift) % COLUMNS) + r] = state[4 * c + r];
        }
    }
    *state = out;
}

fn mix_columns(state: &mut State) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        let t = a0 ^ a1 ^ a2 ^ a3;
        col[0] = a0 ^ t ^ xtime(a0 ^ a1);
        col[1] = a1 ^ t ^ xtime(a1 ^ a2);
        col[2] = a2 ^ t ^ xtime(a2 ^ a3);
        col[3] = a3 ^ t ^ xtime(a3 ^ a0);
    }
}

fn inv_mix_columns(state: &mut State) {
    for col in state.chunks_exact_mut(4) {
        let (a0, a1, a2, a3) = (col[0], col[1], col[2], col[3]);
        col[0] = gmul(a0, 14) ^ gmul(a1, 11) ^ gmul(a2, 13) ^ gmul(a3, 9);
        col[1] = gmul(a0, 9) ^ gmul(a1, 14) ^ gmul(a2, 11) ^ gmul(a3, 13);
        col[2] = gmul(a0, 13) ^ gmul(a1, 9) ^ gmul(a2, 14) ^ gmul(a3, 11);
        col[3] = gmul(a0, 11) ^ gmul(a1, 13) ^ gmul(a2, 9) ^ gmul(a3, 14);
    }
}

/// Rijndael with a 256-bit block and 256-bit key
pub struct Rijndael256 {
    round_keys: RoundKeys,
}

impl Rijndael256 {
    fn encrypt_state(&self, state: &mut State) {
        add_round_key(state, &self.round_keys[0]);
        for round in 1..ROUNDS {
            sub_bytes(state);
            shift_rows(state);
            mix_columns(state);
            add_round_key(state, &self.round_keys[round]);
        }
        sub_bytes(state);
        shift_rows(state);
        add_round_key(state, &self.round_keys[ROUNDS]);
    }

    fn decrypt_state(&self, state: &mut State) {
        add_round_key(state, &self.round_keys[ROUNDS]);
        for round in (1..ROUNDS).rev() {
            inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, &self.round_keys[round]);
            inv_mix_columns(state);
        }
        inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, &self.round_keys[0]);
    }
}

impl BlockCipher for Rijndael256 {}

impl KeySizeUser for Rijndael256 {
    type KeySize = U32;
}

impl KeyInit for Rijndael256 {
    fn new(key: &Key<Self>) -> Self {
        let mut raw = [0u8; 32];
        raw.copy_from_slice(key);
        let round_keys = expand_key(&raw);
        raw.zeroize();
        Self { round_keys }
    }
}

impl AlgorithmName for Rijndael256 {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Rijndael256")
    }
}

impl Drop for Rijndael256 {
    fn drop(&mut self) {
        for rk in self.round_keys.iter_mut() {
            rk.zeroize();
        }
    }
}

cipher::impl_simple_block_encdec!(
    Rijndael256, U32, c, block,
    encrypt: {
        let mut state = [0u8; RIJNDAEL_BLOCK_SIZE];
        state.copy_from_slice(block.get_in());
        c.encrypt_state(&mut state);
        block.get_out().copy_from_slice(&state);
    }
    decrypt: {
        let mut state = [0u8; RIJNDAEL_BLOCK_SIZE];
        state.copy_from_slice(block.get_in());
        c.decrypt_state(&mut state);
        block.get_out().copy_from_slice(&state);
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use cipher::{BlockDecrypt, BlockEncrypt};

    fn cipher_with_key(key: [u8; 32]) -> Rijndael256 {
        Rijndael256::new(&key.into())
    }

    #[test]
    fn test_inv_sbox_inverts_sbox() {
        for i in 0..=255u8 {
            assert_eq!(INV_SBOX[SBOX[i as usize] as usize], i);
        }
    }

    #[test]
    fn test_gmul_identities() {
        assert_eq!(gmul(0x57, 0x01), 0x57);
        assert_eq!(gmul(0x57, 0x02), xtime(0x57));
        // well-known GF(2^8) product: {57} x {13} = {fe}
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }

    #[test]
    fn test_key_schedule_starts_with_raw_key() {
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let rks = expand_key(&key);
        assert_eq!(rks[0], key);
    }

    #[test]
    fn test_shift_rows_round_trip() {
        let mut state: State = core::array::from_fn(|i| i as u8);
        let original = state;
        shift_rows(&mut state);
        assert_ne!(state, original);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn test_mix_columns_round_trip() {
        let mut state: State = core::array::from_fn(|i| (i * 7 + 3) as u8);
        let original = state;
        mix_columns(&mut state);
        assert_ne!(state, original);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn test_known_answer_block() {
        // Pinned output for key = plaintext = 00..1f. Round-trip tests alone
        // would keep passing if the row shifts or the key schedule drifted,
        // since encrypt and decrypt would share the bug; this vector pins
        // the wire format existing ciphertext depends on.
        let key: [u8; 32] = core::array::from_fn(|i| i as u8);
        let plaintext: [u8; 32] = core::array::from_fn(|i| i as u8);
        let expected: [u8; 32] = [
            0x62, 0x3d, 0x2b, 0xd4, 0xca, 0x37, 0x96, 0xdc, 0x3d, 0x02, 0xec, 0xf2, 0xf3, 0x7f,
            0xb6, 0x37, 0xfd, 0x3d, 0xa5, 0x85, 0x09, 0xce, 0xbb, 0x67, 0xab, 0x92, 0x65, 0xb0,
            0x4d, 0xb5, 0x1e, 0x7d,
        ];

        let cipher = cipher_with_key(key);
        let mut block = plaintext.into();
        cipher.encrypt_block(&mut block);
        assert_eq!(block.as_slice(), &expected[..]);

        cipher.decrypt_block(&mut block);
        assert_eq!(block.as_slice(), &plaintext[..]);
    }

    #[test]
    fn test_block_round_trip() {
        let cipher = cipher_with_key([0x42; 32]);
        let plaintext: [u8; 32] = core::array::from_fn(|i| i as u8);
        let mut block = plaintext.into();
        cipher.encrypt_block(&mut block);
        assert_ne!(block.as_slice(), &plaintext[..]);
        cipher.decrypt_block(&mut block);
        assert_eq!(block.as_slice(), &plaintext[..]);
    }

    #[test]
    fn test_different_keys_different_ciphertext() {
        let plaintext: [u8; 32] = [0xA5; 32];
        let mut b1 = plaintext.into();
        let mut b2 = plaintext.into();
        cipher_with_key([1; 32]).encrypt_block(&mut b1);
        cipher_with_key([2; 32]).encrypt_block(&mut b2);
        assert_ne!(b1, b2);
    }

    #[test]
    fn test_encryption_deterministic() {
        let plaintext: [u8; 32] = [0x5A; 32];
        let mut b1 = plaintext.into();
        let mut b2 = plaintext.into();
        cipher_with_key([9; 32]).encrypt_block(&mut b1);
        cipher_with_key([9; 32]).encrypt_block(&mut b2);
        assert_eq!(b1, b2);
    }
}
