use crate::Base32Error;

/// Characters needed to encode a `u64`: `ceil(64 / 5)`.
pub const BASE32_LEN: usize = 13;

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: u32 = 5;
const MASK: u64 = 0x1F;

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[c.to_ascii_lowercase() as usize] = i;
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

/// Encodes `value` as big-endian Crockford base32, most significant
/// character first. The leading character carries only the top 4 bits.
pub(crate) fn encode_u64(value: u64) -> [u8; BASE32_LEN] {
    let mut buf = [0_u8; BASE32_LEN];
    let mut shift = (BASE32_LEN as u32 - 1) * BITS_PER_CHAR;
    for slot in &mut buf {
        // `shift` tops out at 60, so the leading chunk is bits 60..64.
        *slot = ALPHABET[((value >> shift) & MASK) as usize];
        shift = shift.saturating_sub(BITS_PER_CHAR);
    }
    buf
}

/// Decodes a [`BASE32_LEN`]-character Crockford string.
///
/// The 65th bit carried by the leading character does not fit a `u64` and is
/// discarded.
pub(crate) fn decode_u64(encoded: &str) -> Result<u64, Base32Error> {
    if encoded.len() != BASE32_LEN {
        return Err(Base32Error::InvalidLength { len: encoded.len() });
    }
    let mut acc = 0_u64;
    for (index, byte) in encoded.bytes().enumerate() {
        let val = LOOKUP[usize::from(byte)];
        if val == NO_VALUE {
            return Err(Base32Error::InvalidAscii { byte, index });
        }
        acc = (acc << BITS_PER_CHAR) | u64::from(val);
    }
    Ok(acc)
}
