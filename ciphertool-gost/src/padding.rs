//! PKCS#7 padding for the 8-byte block size.

use crate::error::{GostError, Result};

/// Pad `data` up to a multiple of `block_len`.
///
/// Already-aligned input gains a full block of padding, so unpadding is
/// always unambiguous.
pub(crate) fn pkcs7_pad(data: &mut Vec<u8>, block_len: usize) {
    let mut pad = block_len - (data.len() % block_len);
    if pad == 0 {
        pad = block_len;
    }
    data.extend(std::iter::repeat_n(pad as u8, pad));
}

/// Strip and validate PKCS#7 padding in place.
pub(crate) fn pkcs7_unpad(data: &mut Vec<u8>, block_len: usize) -> Result<()> {
    let pad = *data.last().ok_or(GostError::InvalidPadding)? as usize;
    if pad == 0 || pad > data.len() || pad > block_len {
        return Err(GostError::InvalidPadding);
    }
    if data[data.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(GostError::InvalidPadding);
    }
    data.truncate(data.len() - pad);
    Ok(())
}
