/// Declares a Snowflake ID type with a custom bit layout.
///
/// The ID is packed from **MSB to LSB**:
///
/// ```text
///  +--------------+---------------+-------------------+----------------+--------------+
///  | reserved (R) | timestamp (T) | datacenter ID (D) | machine ID (M) | sequence (S) |
///  +--------------+---------------+-------------------+----------------+--------------+
///  |<--------------------------- MSB ---- 64 bits ---- LSB --------------------------->|
/// ```
///
/// All 64 bits must be accounted for and at least one reserved bit must
/// remain, so the sign bit of every ID is clear. Both conditions are checked
/// at compile time.
///
/// ## Example
///
/// ```
/// use snowmint::{define_snowflake_id, SnowflakeId};
///
/// define_snowflake_id!(
///     /// 1024 machines in a single data center.
///     WideMachineId,
///     reserved: 1,
///     timestamp: 41,
///     datacenter_id: 0,
///     machine_id: 10,
///     sequence: 12
/// );
///
/// let id = WideMachineId::from_components(5, 0, 1023, 7);
/// assert_eq!(id.machine_id(), 1023);
/// assert_eq!(WideMachineId::max_datacenter_id(), 0);
/// ```
#[macro_export]
macro_rules! define_snowflake_id {
    (
        $(#[$meta:meta])*
        $name:ident,
        reserved: $reserved_bits:expr,
        timestamp: $timestamp_bits:expr,
        datacenter_id: $datacenter_bits:expr,
        machine_id: $machine_bits:expr,
        sequence: $sequence_bits:expr
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            id: u64,
        }

        const _: () = {
            assert!(
                $reserved_bits + $timestamp_bits + $datacenter_bits + $machine_bits + $sequence_bits
                    == 64,
                "Snowflake layout must account for exactly 64 bits"
            );
            assert!(
                $reserved_bits >= 1,
                "Snowflake layout must keep the sign bit reserved"
            );
        };

        impl $name {
            pub const RESERVED_BITS: u32 = $reserved_bits;
            pub const TIMESTAMP_BITS: u32 = $timestamp_bits;
            pub const DATACENTER_ID_BITS: u32 = $datacenter_bits;
            pub const MACHINE_ID_BITS: u32 = $machine_bits;
            pub const SEQUENCE_BITS: u32 = $sequence_bits;

            pub const SEQUENCE_SHIFT: u32 = 0;
            pub const MACHINE_ID_SHIFT: u32 = Self::SEQUENCE_SHIFT + Self::SEQUENCE_BITS;
            pub const DATACENTER_ID_SHIFT: u32 = Self::MACHINE_ID_SHIFT + Self::MACHINE_ID_BITS;
            pub const TIMESTAMP_SHIFT: u32 = Self::DATACENTER_ID_SHIFT + Self::DATACENTER_ID_BITS;

            pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
            pub const DATACENTER_ID_MASK: u64 = (1 << Self::DATACENTER_ID_BITS) - 1;
            pub const MACHINE_ID_MASK: u64 = (1 << Self::MACHINE_ID_BITS) - 1;
            pub const SEQUENCE_MASK: u64 = (1 << Self::SEQUENCE_BITS) - 1;

            /// Every bit below the reserved field.
            pub const VALID_MASK: u64 = u64::MAX >> Self::RESERVED_BITS;

            /// Packs the components, silently truncating each to its field
            /// width.
            pub const fn from_parts(
                timestamp: u64,
                datacenter_id: u64,
                machine_id: u64,
                sequence: u64,
            ) -> Self {
                let t = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
                let d = (datacenter_id & Self::DATACENTER_ID_MASK) << Self::DATACENTER_ID_SHIFT;
                let m = (machine_id & Self::MACHINE_ID_MASK) << Self::MACHINE_ID_SHIFT;
                let s = (sequence & Self::SEQUENCE_MASK) << Self::SEQUENCE_SHIFT;
                Self { id: t | d | m | s }
            }

            /// Extracts the timestamp from the packed ID.
            pub const fn timestamp(&self) -> u64 {
                (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
            }

            /// Extracts the data-center ID from the packed ID.
            pub const fn datacenter_id(&self) -> u64 {
                (self.id >> Self::DATACENTER_ID_SHIFT) & Self::DATACENTER_ID_MASK
            }

            /// Extracts the machine ID from the packed ID.
            pub const fn machine_id(&self) -> u64 {
                (self.id >> Self::MACHINE_ID_SHIFT) & Self::MACHINE_ID_MASK
            }

            /// Extracts the sequence number from the packed ID.
            pub const fn sequence(&self) -> u64 {
                (self.id >> Self::SEQUENCE_SHIFT) & Self::SEQUENCE_MASK
            }

            /// Returns the raw value as a signed integer.
            ///
            /// Never negative for IDs that pass [`is_valid`](Self::is_valid),
            /// since the sign bit is always reserved.
            #[allow(clippy::cast_possible_wrap)]
            pub const fn to_i64(&self) -> i64 {
                self.id as i64
            }

            /// Returns the ID as a zero-padded 20-digit string.
            pub fn to_padded_string(&self) -> ::std::string::String {
                ::std::format!("{:020}", self.id)
            }
        }

        impl $crate::SnowflakeId for $name {
            fn timestamp(&self) -> u64 {
                self.timestamp()
            }

            fn max_timestamp() -> u64 {
                Self::TIMESTAMP_MASK
            }

            fn datacenter_id(&self) -> u64 {
                self.datacenter_id()
            }

            fn max_datacenter_id() -> u64 {
                Self::DATACENTER_ID_MASK
            }

            fn machine_id(&self) -> u64 {
                self.machine_id()
            }

            fn max_machine_id() -> u64 {
                Self::MACHINE_ID_MASK
            }

            fn sequence(&self) -> u64 {
                self.sequence()
            }

            fn max_sequence() -> u64 {
                Self::SEQUENCE_MASK
            }

            fn from_components(
                timestamp: u64,
                datacenter_id: u64,
                machine_id: u64,
                sequence: u64,
            ) -> Self {
                debug_assert!(timestamp <= Self::TIMESTAMP_MASK, "timestamp overflow");
                debug_assert!(
                    datacenter_id <= Self::DATACENTER_ID_MASK,
                    "datacenter_id overflow"
                );
                debug_assert!(machine_id <= Self::MACHINE_ID_MASK, "machine_id overflow");
                debug_assert!(sequence <= Self::SEQUENCE_MASK, "sequence overflow");
                Self::from_parts(timestamp, datacenter_id, machine_id, sequence)
            }

            fn to_raw(&self) -> u64 {
                self.id
            }

            fn from_raw(raw: u64) -> Self {
                Self { id: raw }
            }

            fn is_valid(&self) -> bool {
                self.id & !Self::VALID_MASK == 0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{}", self.id)
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_struct(::core::stringify!($name))
                    .field("id", &self.id)
                    .field("timestamp", &self.timestamp())
                    .field("datacenter_id", &self.datacenter_id())
                    .field("machine_id", &self.machine_id())
                    .field("sequence", &self.sequence())
                    .finish()
            }
        }

        impl ::core::convert::From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.id
            }
        }
    };
}

define_snowflake_id!(
    /// A 64-bit Snowflake ID using the classic data-center/machine split.
    ///
    /// - 1 bit reserved
    /// - 41 bits timestamp (ms since [`DEFAULT_EPOCH`])
    /// - 5 bits data-center ID
    /// - 5 bits machine ID
    /// - 12 bits sequence
    ///
    /// ```text
    ///  Bit Index:  63           63 62            22 21               17 16            12 11             0
    ///              +--------------+----------------+-------------------+----------------+---------------+
    ///  Field:      | reserved (1) | timestamp (41) | datacenter ID (5) | machine ID (5) | sequence (12) |
    ///              +--------------+----------------+-------------------+----------------+---------------+
    ///              |<--------------------------- MSB ---- 64 bits ---- LSB ---------------------------->|
    /// ```
    ///
    /// [`DEFAULT_EPOCH`]: crate::DEFAULT_EPOCH
    SnowflakeClassicId,
    reserved: 1,
    timestamp: 41,
    datacenter_id: 5,
    machine_id: 5,
    sequence: 12
);

#[cfg(test)]
mod tests {
    use crate::{SnowflakeClassicId, SnowflakeId};

    define_snowflake_id!(
        NarrowId,
        reserved: 1,
        timestamp: 55,
        datacenter_id: 2,
        machine_id: 2,
        sequence: 4
    );

    #[test]
    fn classic_layout_constants() {
        assert_eq!(SnowflakeClassicId::TIMESTAMP_SHIFT, 22);
        assert_eq!(SnowflakeClassicId::DATACENTER_ID_SHIFT, 17);
        assert_eq!(SnowflakeClassicId::MACHINE_ID_SHIFT, 12);
        assert_eq!(SnowflakeClassicId::max_datacenter_id(), 31);
        assert_eq!(SnowflakeClassicId::max_machine_id(), 31);
        assert_eq!(SnowflakeClassicId::max_sequence(), 4095);
        assert_eq!(SnowflakeClassicId::max_timestamp(), (1 << 41) - 1);
    }

    #[test]
    fn classic_id_fields_and_bounds() {
        let ts = SnowflakeClassicId::max_timestamp();
        let dc = SnowflakeClassicId::max_datacenter_id();
        let mid = SnowflakeClassicId::max_machine_id();
        let seq = SnowflakeClassicId::max_sequence();

        let id = SnowflakeClassicId::from_components(ts, dc, mid, seq);
        assert_eq!(id.timestamp(), ts);
        assert_eq!(id.datacenter_id(), dc);
        assert_eq!(id.machine_id(), mid);
        assert_eq!(id.sequence(), seq);
        assert_eq!(id.to_raw(), u64::MAX >> 1);
        assert!(id.is_valid());
        assert!(id.to_i64() > 0);
    }

    #[test]
    fn packing_matches_shift_formula() {
        let id = SnowflakeClassicId::from_components(1234, 1, 1, 2);
        let expected = (1234 << 22) | (1 << 17) | (1 << 12) | 2;
        assert_eq!(id.to_raw(), expected);
        assert_eq!(u64::from(id), expected);
        assert_eq!(id.to_string(), expected.to_string());
        assert_eq!(id.to_padded_string().len(), 20);
    }

    #[test]
    fn narrow_layout_round_trips() {
        let id = NarrowId::from_components(99, 3, 2, 15);
        assert_eq!(NarrowId::TIMESTAMP_SHIFT, 8);
        assert_eq!(id.timestamp(), 99);
        assert_eq!(id.datacenter_id(), 3);
        assert_eq!(id.machine_id(), 2);
        assert_eq!(id.sequence(), 15);
        assert!(!id.has_sequence_room());
    }

    #[test]
    fn reserved_bit_makes_id_invalid() {
        let id = SnowflakeClassicId::from_raw(1 << 63);
        assert!(!id.is_valid());
        assert!(SnowflakeClassicId::from_raw(0).is_valid());
    }

    #[test]
    fn sequence_helpers() {
        let id = SnowflakeClassicId::from_components(10, 4, 5, 0);
        let next = id.increment_sequence();
        assert_eq!(next.sequence(), 1);
        assert_eq!(next.timestamp(), 10);
        assert!(id < next);

        let rolled = next.rollover_to_timestamp(11);
        assert_eq!(rolled.timestamp(), 11);
        assert_eq!(rolled.sequence(), 0);
        assert_eq!(rolled.datacenter_id(), 4);
        assert_eq!(rolled.machine_id(), 5);
        assert!(next < rolled);
    }

    #[test]
    fn check_node_rejects_out_of_range() {
        assert!(SnowflakeClassicId::check_node(0, 0).is_ok());
        assert!(SnowflakeClassicId::check_node(31, 31).is_ok());
        let err = SnowflakeClassicId::check_node(32, 0).unwrap_err();
        assert_eq!(err.field, crate::ConfigField::DatacenterId);
        assert_eq!(err.max, 31);
        let err = SnowflakeClassicId::check_node(0, 32).unwrap_err();
        assert_eq!(err.field, crate::ConfigField::MachineId);
    }

    #[test]
    fn debug_lists_fields() {
        let id = SnowflakeClassicId::from_components(1, 2, 3, 4);
        let dbg = format!("{id:?}");
        assert!(dbg.starts_with("SnowflakeClassicId"));
        assert!(dbg.contains("datacenter_id: 2"));
        assert!(dbg.contains("sequence: 4"));
    }

    #[test]
    #[should_panic(expected = "timestamp overflow")]
    fn timestamp_overflow_panics() {
        let ts = SnowflakeClassicId::max_timestamp() + 1;
        SnowflakeClassicId::from_components(ts, 0, 0, 0);
    }

    #[test]
    #[should_panic(expected = "datacenter_id overflow")]
    fn datacenter_id_overflow_panics() {
        let dc = SnowflakeClassicId::max_datacenter_id() + 1;
        SnowflakeClassicId::from_components(0, dc, 0, 0);
    }

    #[test]
    #[should_panic(expected = "machine_id overflow")]
    fn machine_id_overflow_panics() {
        let mid = SnowflakeClassicId::max_machine_id() + 1;
        SnowflakeClassicId::from_components(0, 0, mid, 0);
    }

    #[test]
    #[should_panic(expected = "sequence overflow")]
    fn sequence_overflow_panics() {
        let seq = SnowflakeClassicId::max_sequence() + 1;
        SnowflakeClassicId::from_components(0, 0, 0, seq);
    }
}
