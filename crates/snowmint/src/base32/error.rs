/// Errors produced while decoding a Crockford Base32 ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base32Error {
    /// The input is not exactly [`BASE32_LEN`](crate::BASE32_LEN) characters.
    #[error("invalid base32 length: {len}")]
    InvalidLength { len: usize },

    /// The input contains a byte outside the Crockford alphabet.
    #[error("invalid base32 byte {byte:#04x} at index {index}")]
    InvalidAscii { byte: u8, index: usize },

    /// The decoded value sets reserved bits of the target layout.
    #[error("decoded value {raw} sets reserved bits")]
    Overflow {
        /// The raw decoded value that failed validation.
        raw: u64,
    },
}
