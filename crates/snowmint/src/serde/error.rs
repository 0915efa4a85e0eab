/// Errors that can occur while deserializing an ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum SerdeError {
    /// The decoded integer sets reserved bits of the target layout.
    #[error("decoded value {raw} sets reserved bits")]
    Overflow {
        /// The raw value which failed validation.
        raw: u64,
    },

    /// An error occurred during Crockford Base32 decoding.
    #[cfg_attr(docsrs, doc(cfg(feature = "base32")))]
    #[cfg(feature = "base32")]
    #[error(transparent)]
    Base32(#[from] crate::Base32Error),
}
