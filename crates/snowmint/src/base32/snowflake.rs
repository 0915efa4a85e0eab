use super::{decode_u64, encode_u64};
use crate::{Base32Error, SnowflakeId};

/// Extension trait for Crockford Base32 encoding and decoding of ID types.
///
/// IDs encode to a fixed 13-character string using the [Crockford
/// Base32](https://www.crockford.com/base32.html) alphabet. The width is fixed,
/// so sorting the strings sorts the IDs.
pub trait Base32SnowExt: SnowflakeId {
    /// Returns the Crockford Base32 representation of the ID.
    ///
    /// # Example
    /// ```
    /// use snowmint::{Base32SnowExt, SnowflakeClassicId, SnowflakeId};
    ///
    /// let id = SnowflakeClassicId::from_raw(2_424_242_424_242_424_242);
    /// assert_eq!(id.encode(), "23953MG16DJDJ");
    /// ```
    fn encode(&self) -> String {
        encode_u64(self.to_raw()).iter().map(|&b| char::from(b)).collect()
    }

    /// Decodes a Base32-encoded string back into an ID.
    ///
    /// Lower case and the Crockford aliases (`O` for `0`, `I`/`L` for `1`)
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the input string:
    /// - is not exactly 13 characters long
    /// - contains a character outside the Crockford alphabet
    /// - decodes to a value with reserved bits set
    ///
    /// # Example
    /// ```
    /// use snowmint::{Base32Error, Base32SnowExt, SnowflakeClassicId, SnowflakeId};
    ///
    /// let id = SnowflakeClassicId::decode("23953mg16djdj")?;
    /// assert_eq!(id.to_raw(), 2_424_242_424_242_424_242);
    ///
    /// // 'F' = 0b01111: the reserved sign bit would be set.
    /// assert_eq!(
    ///     SnowflakeClassicId::decode("FZZZZZZZZZZZZ"),
    ///     Err(Base32Error::Overflow { raw: u64::MAX })
    /// );
    /// # Ok::<(), Base32Error>(())
    /// ```
    fn decode(s: impl AsRef<str>) -> Result<Self, Base32Error> {
        let raw = decode_u64(s.as_ref())?;
        let id = Self::from_raw(raw);
        if !id.is_valid() {
            return Err(Base32Error::Overflow { raw });
        }
        Ok(id)
    }
}

impl<ID: SnowflakeId> Base32SnowExt for ID {}
