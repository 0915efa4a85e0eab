use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize a Snowflake ID as its raw `u64`.
///
/// Use with `#[serde(with = "snowmint::as_native_snow")]`.
pub mod as_native_snow {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::{SerdeError, SnowflakeId};

    /// Serialize a snowflake ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: SnowflakeId,
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake ID from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The value sets reserved bits of `ID`'s layout
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: SnowflakeId,
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        let id = ID::from_raw(raw);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(SerdeError::Overflow { raw }));
        }
        Ok(id)
    }
}

/// Serialize a Snowflake ID as its 13-character Crockford Base32 string.
///
/// Use with `#[serde(with = "snowmint::as_base32_snow")]`.
#[cfg_attr(docsrs, doc(cfg(all(feature = "serde", feature = "base32"))))]
#[cfg(feature = "base32")]
pub mod as_base32_snow {
    use super::{Deserializer, Serializer};
    use crate::{Base32SnowExt, SerdeError};

    /// Serialize a snowflake ID as a Crockford base32 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<ID, S>(id: &ID, s: S) -> Result<S::Ok, S::Error>
    where
        ID: Base32SnowExt,
        S: Serializer,
    {
        s.serialize_str(&id.encode())
    }

    /// Deserialize a snowflake ID from a Crockford base32 encoded string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not valid Crockford base32 (invalid length or ascii)
    /// - The decoded value sets reserved bits
    pub fn deserialize<'de, ID, D>(d: D) -> Result<ID, D::Error>
    where
        ID: Base32SnowExt,
        D: Deserializer<'de>,
    {
        struct Base32Visitor<ID>(core::marker::PhantomData<ID>);

        impl<ID> serde::de::Visitor<'_> for Base32Visitor<ID>
        where
            ID: Base32SnowExt,
        {
            type Value = ID;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a Crockford base32 encoded string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                ID::decode(v).map_err(|e| E::custom(SerdeError::from(e)))
            }
        }

        d.deserialize_str(Base32Visitor(core::marker::PhantomData))
    }
}
