//! The keyed XOR transform itself.

use crate::error::{GostError, Result};
use crate::padding::{pkcs7_pad, pkcs7_unpad};
use crate::{BLOCK_LEN, IV_LEN, KEY_LEN};
use rand::RngCore;

fn check_lengths(key: &[u8], iv: &[u8]) -> Result<()> {
    if key.len() != KEY_LEN {
        return Err(GostError::InvalidKeyLength {
            actual: key.len(),
            expected: KEY_LEN,
        });
    }
    if iv.len() != IV_LEN {
        return Err(GostError::InvalidIvLength {
            actual: iv.len(),
            expected: IV_LEN,
        });
    }
    Ok(())
}

fn xor_keystream(data: &mut [u8], key: &[u8], iv: &[u8]) {
    for (i, byte) in data.iter_mut().enumerate() {
        *byte ^= key[i % KEY_LEN] ^ iv[i % IV_LEN];
    }
}

/// Encrypt: PKCS#7-pad to the 8-byte block, then XOR with the repeating
/// key and IV. Output length is always a multiple of [`BLOCK_LEN`].
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_lengths(key, iv)?;

    let mut data = plaintext.to_vec();
    pkcs7_pad(&mut data, BLOCK_LEN);
    xor_keystream(&mut data, key, iv);
    Ok(data)
}

/// Decrypt: XOR with the repeating key and IV, then strip PKCS#7 padding.
///
/// A wrong key or IV usually surfaces as [`GostError::InvalidPadding`],
/// but the transform carries no authenticator, so a padding-valid result
/// is not proof of the right key.
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    check_lengths(key, iv)?;

    let mut data = ciphertext.to_vec();
    xor_keystream(&mut data, key, iv);
    pkcs7_unpad(&mut data, BLOCK_LEN)?;
    Ok(data)
}

/// Generate a random IV for encryption.
pub fn random_iv() -> [u8; IV_LEN] {
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);
    iv
}
