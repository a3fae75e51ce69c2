use pinocchio::pubkey::Pubkey;

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Longest base58 rendering of 32 bytes.
pub const MAX_ENCODED_PUBKEY_LEN: usize = 44;

/// Encode `key` as base58 into `out` without allocating. Leading zero bytes
/// become `'1'`, so the all-zero key renders as 32 ones.
pub fn encode_pubkey<'a>(key: &Pubkey, out: &'a mut [u8; MAX_ENCODED_PUBKEY_LEN]) -> &'a str {
    // little-endian base58 digits of the big-endian input
    let mut digits = [0u8; MAX_ENCODED_PUBKEY_LEN];
    let mut len = 0usize;

    for &byte in key.iter() {
        let mut carry = byte as u32;
        for digit in digits[..len].iter_mut() {
            carry += (*digit as u32) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits[len] = (carry % 58) as u8;
            len += 1;
            carry /= 58;
        }
    }

    let zeros = key.iter().take_while(|b| **b == 0).count();
    let total = zeros + len;

    out[..zeros].fill(b'1');
    for (i, slot) in out[zeros..total].iter_mut().enumerate() {
        *slot = ALPHABET[digits[len - 1 - i] as usize];
    }

    // alphabet is ASCII
    core::str::from_utf8(&out[..total]).unwrap_or("")
}
