//! Canonical GATT UUID strings
//!
//! A GATT UUID identifies a service, characteristic, or descriptor within a
//! GATT server. The Bluetooth Specification maps two shortened forms, sized
//! at 16 and 32 bits, into the Bluetooth Base UUID
//! `00000000-0000-1000-8000-00805f9b34fb`, so in practice identifiers show
//! up as short hex strings ("2901"), assigned-number integers, or full
//! 128-bit strings in a variety of hand-written formats.
//!
//! [`GattUuid`] accepts all of those and produces one canonical rendering:
//! the fully expanded, dash-separated, lowercase 128-bit string. Textual
//! input is sanitized first, so dots, dashes, or stray characters in the
//! source text are fine:
//!
//! ```
//! use gatt_uuid::GattUuid;
//!
//! let from_text = GattUuid::from_hex_str("0000180A/0000.1000_8000+00805f9b34fb");
//!
//! assert_eq!(from_text.uuid_128(), "0000180a-0000-1000-8000-00805f9b34fb");
//!
//! let from_assigned_number = GattUuid::from_u16(0x180a);
//!
//! assert_eq!(from_text.uuid_128(), from_assigned_number.uuid_128());
//! ```
//!
//! Construction never fails. Text whose sanitized form is not 4, 8, or 32
//! hex digits produces an *invalid* `GattUuid` with a [`bit_count`] of zero
//! that renders as the empty string; callers taking identifiers from
//! fallible sources must check [`is_valid`] before use.
//!
//! [`bit_count`]: GattUuid::bit_count
//! [`is_valid`]: GattUuid::is_valid

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod assigned;

use alloc::format;
use alloc::string::String;

/// A GATT service, characteristic, or descriptor UUID
///
/// The identifier is stored in its canonical form: the dash-separated,
/// lowercase 128-bit hex string, with 16 and 32 bit shortened values already
/// embedded into the Bluetooth Base UUID. Alongside it the bit count of the
/// construction input is recorded, which drives the [`Display`] rendering
/// and the shortened accessors.
///
/// Instances are immutable once constructed and the fields are owned, so a
/// `GattUuid` can be freely shared between threads and used as a map key.
///
/// [`Display`]: core::fmt::Display
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct GattUuid {
    uuid: String,
    bit_count: usize,
}

impl GattUuid {
    /// Leading zeros placed before a 16 bit value to fill the first field of
    /// the Bluetooth Base UUID.
    const BASE_UUID_PREFIX: &'static str = "0000";

    /// Everything of the Bluetooth Base UUID after its first field. See
    /// Vol 3 part B sec 2.5.1 of the Bluetooth Specification.
    const BASE_UUID_SUFFIX: &'static str = "-0000-1000-8000-00805f9b34fb";

    /// Create a `GattUuid` from a partial or complete UUID string
    ///
    /// This does the best it can with the input it is given. The string is
    /// first reduced with [`clean`] and the remaining hex digits are
    /// interpreted by their count:
    ///
    /// * 4 digits is a 16 bit shortened UUID
    /// * 8 digits is a 32 bit shortened UUID
    /// * 32 digits is a full 128 bit UUID
    ///
    /// Shortened values are expanded into the Bluetooth Base UUID, and the
    /// result is put through [`dashify`]. Any other digit count produces the
    /// invalid `GattUuid`, which has a bit count of zero and renders as the
    /// empty string.
    ///
    /// [`clean`]: GattUuid::clean
    /// [`dashify`]: GattUuid::dashify
    pub fn from_hex_str(uuid_str: &str) -> Self {
        let cleaned = Self::clean(uuid_str);

        // hex, so every character is four bits
        let bit_count = cleaned.len() * 4;

        let expanded = match bit_count {
            16 => format!("{}{}{}", Self::BASE_UUID_PREFIX, cleaned, Self::BASE_UUID_SUFFIX),
            32 => format!("{}{}", cleaned, Self::BASE_UUID_SUFFIX),
            128 => cleaned,
            _ => {
                log::warn!(
                    "cannot interpret {:?} as a UUID, it has {} hex digits where 4, 8, or 32 \
                    are expected",
                    uuid_str,
                    cleaned.len()
                );

                return GattUuid::default();
            }
        };

        GattUuid {
            uuid: Self::dashify(&expanded),
            bit_count,
        }
    }

    /// Create a `GattUuid` from a 16 bit assigned number
    ///
    /// The result takes the form `0000????-0000-1000-8000-00805f9b34fb`
    /// where `????` is the hex value of `part`.
    pub fn from_u16(part: u16) -> Self {
        GattUuid {
            uuid: format!("{}{:04x}{}", Self::BASE_UUID_PREFIX, part, Self::BASE_UUID_SUFFIX),
            bit_count: 16,
        }
    }

    /// Create a `GattUuid` from a 32 bit value
    ///
    /// The result takes the form `????????-0000-1000-8000-00805f9b34fb`
    /// where `????????` is the hex value of `part`, rendered with a minimum
    /// of four digits.
    pub fn from_u32(part: u32) -> Self {
        GattUuid {
            uuid: format!("{:04x}{}", part, Self::BASE_UUID_SUFFIX),
            bit_count: 32,
        }
    }

    /// Create a `GattUuid` from the five fields of a full UUID
    ///
    /// The result takes the form `11111111-2222-3333-4444-555555555555`
    /// where each digit marks the part its hex digits are pulled from.
    /// `part5` is a 48 bit value carried in a `u64`; its upper bits are
    /// ignored.
    ///
    /// The split of `part5` into its rendered halves uses a 4 bit shift
    /// where a clean 32/16 split of a 48 bit value would use a 16 bit one,
    /// so bits 36..48 never reach the output and bits 4..16 appear in both
    /// halves. This matches the long-standing output of this constructor
    /// and is deliberately left untouched.
    pub fn from_parts(part1: u32, part2: u16, part3: u16, part4: u16, part5: u64) -> Self {
        let part5_high = ((part5 >> 4) & 0xffff_ffff) as u32;
        let part5_low = (part5 & 0xffff) as u16;

        GattUuid {
            uuid: format!(
                "{:08x}-{:04x}-{:04x}-{:04x}-{:08x}{:04x}",
                part1, part2, part3, part4, part5_high, part5_low
            ),
            bit_count: 128,
        }
    }

    /// Get the bit count of the input this `GattUuid` was created from
    ///
    /// This is 16, 32, or 128 for a valid `GattUuid` and 0 for an invalid
    /// one.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Check that this `GattUuid` was created from interpretable input
    pub fn is_valid(&self) -> bool {
        self.bit_count != 0
    }

    /// Get the 16 bit portion of this UUID
    ///
    /// This is the four hex digits at the position a 16 bit shortened value
    /// occupies within the Bluetooth Base UUID, or the empty string for an
    /// invalid `GattUuid`. The surrounding digits are not checked, so this
    /// is only meaningful for a UUID built on the Bluetooth Base UUID.
    pub fn uuid_16(&self) -> &str {
        if self.uuid.is_empty() {
            return "";
        }

        &self.uuid[4..8]
    }

    /// Get the 32 bit portion of this UUID
    ///
    /// This is the leading eight hex digits, or the empty string for an
    /// invalid `GattUuid`. The rest of the string is not checked, so this is
    /// only meaningful for a UUID built on the Bluetooth Base UUID.
    pub fn uuid_32(&self) -> &str {
        if self.uuid.is_empty() {
            return "";
        }

        &self.uuid[..8]
    }

    /// Get the full 128 bit UUID string
    ///
    /// This is the canonical dash-separated form, or the empty string for an
    /// invalid `GattUuid`.
    pub fn uuid_128(&self) -> &str {
        &self.uuid
    }

    /// Reduce `uuid_str` to its hex digits
    ///
    /// The returned string contains the characters of `uuid_str` in the
    /// range `[0-9a-fA-F]`, lowercased, in their original order. Everything
    /// else is dropped.
    pub fn clean(uuid_str: &str) -> String {
        uuid_str
            .chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }

    /// Clean `uuid_str` and insert the canonical dashes
    ///
    /// Dashes go in at offsets 8, 13, 18, and 23 of the progressively
    /// modified string. When the input is shorter than a full UUID each
    /// insertion only happens if the string has grown past that offset, so a
    /// short input comes back partially dashed rather than being an error.
    ///
    /// ```
    /// use gatt_uuid::GattUuid;
    ///
    /// assert_eq!(
    ///     GattUuid::dashify("0000180A00001000800000805f9b34fb"),
    ///     "0000180a-0000-1000-8000-00805f9b34fb"
    /// );
    ///
    /// assert_eq!(GattUuid::dashify("0000180A.0000.100"), "0000180a-0000-100");
    ///
    /// assert_eq!(GattUuid::dashify("rqzp"), "");
    /// ```
    pub fn dashify(uuid_str: &str) -> String {
        let mut dashed = Self::clean(uuid_str);

        for offset in [8, 13, 18, 23] {
            if dashed.len() > offset {
                dashed.insert(offset, '-');
            }
        }

        dashed
    }
}

impl core::fmt::Debug for GattUuid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(self, f)
    }
}

/// Renders the form matching the bit count of the construction input
///
/// A 16 bit `GattUuid` displays as its four hex digits and a 32 bit one as
/// its leading eight. Anything else displays the full canonical string,
/// which for an invalid `GattUuid` is empty.
impl core::fmt::Display for GattUuid {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.bit_count {
            16 => f.write_str(self.uuid_16()),
            32 => f.write_str(self.uuid_32()),
            _ => f.write_str(self.uuid_128()),
        }
    }
}

impl From<&str> for GattUuid {
    fn from(uuid_str: &str) -> GattUuid {
        Self::from_hex_str(uuid_str)
    }
}

impl From<String> for GattUuid {
    fn from(uuid_str: String) -> GattUuid {
        Self::from_hex_str(&uuid_str)
    }
}

impl From<u16> for GattUuid {
    fn from(part: u16) -> GattUuid {
        Self::from_u16(part)
    }
}

impl From<u32> for GattUuid {
    fn from(part: u32) -> GattUuid {
        Self::from_u32(part)
    }
}

#[cfg(feature = "uuid-crate")]
impl From<uuid::Uuid> for GattUuid {
    fn from(uuid: uuid::Uuid) -> GattUuid {
        GattUuid {
            uuid: Self::dashify(&format!("{:032x}", uuid.as_u128())),
            bit_count: 128,
        }
    }
}

#[cfg(feature = "uuid-crate")]
impl TryFrom<&GattUuid> for uuid::Uuid {
    type Error = ();

    /// Try to convert into a [uuid::Uuid]. This fails for a `GattUuid` whose
    /// stored string is not a full canonical UUID.
    fn try_from(uuid: &GattUuid) -> Result<uuid::Uuid, ()> {
        uuid::Uuid::try_parse(uuid.uuid_128()).map_err(|_| ())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for GattUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.uuid_128())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for GattUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let uuid_str = <String as serde::Deserialize>::deserialize(deserializer)?;

        let uuid = GattUuid::from_hex_str(&uuid_str);

        if uuid.is_valid() {
            Ok(uuid)
        } else {
            Err(serde::de::Error::custom(format!(
                "{:?} does not clean up to 4, 8, or 32 hex digits",
                uuid_str
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_keeps_only_lowercased_hex() {
        assert_eq!(GattUuid::clean(""), "");

        assert_eq!(GattUuid::clean("rqzp"), "");

        assert_eq!(GattUuid::clean("0000180A.0000.100"), "0000180a0000100");

        assert_eq!(
            GattUuid::clean("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb"),
            "0000180a00001000800000805f9b34fb"
        );
    }

    #[test]
    fn dashify_inserts_as_many_dashes_as_fit() {
        assert_eq!(
            GattUuid::dashify("0000180A-0000-1000-8000-00805f9b34fb"),
            "0000180a-0000-1000-8000-00805f9b34fb"
        );

        assert_eq!(
            GattUuid::dashify("0000180A00001000800000805f9b34fb"),
            "0000180a-0000-1000-8000-00805f9b34fb"
        );

        assert_eq!(GattUuid::dashify("0000180A"), "0000180a");

        // too short for the third dash, so only two go in
        assert_eq!(GattUuid::dashify("0000180A.0000.100"), "0000180a-0000-100");

        assert_eq!(GattUuid::dashify("rqzp"), "");
    }

    #[test]
    fn dashify_adds_no_hex_content() {
        let inputs = [
            "",
            "rqzp",
            "2901",
            "0000180A",
            "0000180A.0000.100",
            "0000180A/0000.1000_zzzzzz_8000+00805f9b34fb",
            "68d82662-0305-4e6f-a679-6be1475f5e04",
        ];

        for input in inputs {
            assert_eq!(
                GattUuid::clean(&GattUuid::dashify(input)),
                GattUuid::clean(input),
                "for input {:?}",
                input
            );
        }
    }

    #[test]
    fn from_hex_str_16_bit() {
        let uuid = GattUuid::from_hex_str("2901");

        assert_eq!(uuid.bit_count(), 16);

        assert_eq!(uuid.uuid_128(), "00002901-0000-1000-8000-00805f9b34fb");

        assert_eq!(uuid.uuid_16(), "2901");

        assert_eq!(format!("{}", uuid), "2901");
    }

    #[test]
    fn from_hex_str_32_bit() {
        let uuid = GattUuid::from_hex_str("0000180A");

        assert_eq!(uuid.bit_count(), 32);

        assert_eq!(uuid.uuid_128(), "0000180a-0000-1000-8000-00805f9b34fb");

        assert_eq!(uuid.uuid_32(), "0000180a");

        assert_eq!(format!("{}", uuid), "0000180a");
    }

    #[test]
    fn from_hex_str_128_bit() {
        let uuid = GattUuid::from_hex_str("0000180A/0000.1000_zzzzzz_8000+00805f9b34fb");

        assert_eq!(uuid.bit_count(), 128);

        assert_eq!(uuid.uuid_128(), "0000180a-0000-1000-8000-00805f9b34fb");

        let custom = GattUuid::from_hex_str("68d82662-0305-4e6f-a679-6be1475f5e04");

        assert_eq!(custom.bit_count(), 128);

        assert_eq!(custom.uuid_128(), "68d82662-0305-4e6f-a679-6be1475f5e04");

        assert_eq!(format!("{}", custom), "68d82662-0305-4e6f-a679-6be1475f5e04");
    }

    #[test]
    fn from_hex_str_unsupported_lengths_are_invalid() {
        for input in ["", "rqzp", "1", "290", "29011", "0000180", "0000180A0", "68d82662-0305"] {
            let uuid = GattUuid::from_hex_str(input);

            assert_eq!(uuid.bit_count(), 0, "for input {:?}", input);

            assert!(!uuid.is_valid(), "for input {:?}", input);

            assert_eq!(uuid.uuid_128(), "", "for input {:?}", input);

            assert_eq!(uuid.uuid_16(), "", "for input {:?}", input);

            assert_eq!(uuid.uuid_32(), "", "for input {:?}", input);

            assert_eq!(format!("{}", uuid), "", "for input {:?}", input);
        }
    }

    #[test]
    fn default_is_invalid() {
        let uuid = GattUuid::default();

        assert!(!uuid.is_valid());

        assert_eq!(uuid.bit_count(), 0);

        assert_eq!(uuid.uuid_128(), "");
    }

    #[test]
    fn from_u16_matches_text_construction() {
        let from_int = GattUuid::from_u16(0x2901);

        let from_text = GattUuid::from_hex_str("2901");

        assert_eq!(from_int, from_text);

        assert_eq!(from_int.bit_count(), 16);

        assert_eq!(from_int.uuid_128(), "00002901-0000-1000-8000-00805f9b34fb");

        assert_eq!(GattUuid::from(0x2901u16), from_int);
    }

    #[test]
    fn from_u32_matches_text_construction() {
        let from_int = GattUuid::from_u32(0x12345678);

        let from_text = GattUuid::from_hex_str("12345678");

        assert_eq!(from_int, from_text);

        assert_eq!(from_int.bit_count(), 32);

        assert_eq!(from_int.uuid_128(), "12345678-0000-1000-8000-00805f9b34fb");

        assert_eq!(format!("{}", from_int), "12345678");

        assert_eq!(GattUuid::from(0x12345678u32), from_int);
    }

    #[test]
    fn from_u32_uses_minimum_width() {
        // values under 0x10000 render with four digits, not eight, so the
        // stored string comes out shorter than the canonical form
        let uuid = GattUuid::from_u32(0x180a);

        assert_eq!(uuid.bit_count(), 32);

        assert_eq!(uuid.uuid_128(), "180a-0000-1000-8000-00805f9b34fb");

        // and a value needing more than four digits is never truncated
        let wide = GattUuid::from_u32(0xabcdef);

        assert_eq!(wide.uuid_128(), "abcdef-0000-1000-8000-00805f9b34fb");
    }

    #[test]
    fn from_parts_48_bit_split_is_lossy() {
        let uuid = GattUuid::from_parts(0x11223344, 0x5566, 0x7788, 0x99aa, 0x1234_5678_9abc);

        assert_eq!(uuid.bit_count(), 128);

        // the 4 bit shift drops bits 36..48 of the fifth part (the leading
        // 0x123) and bits 4..16 (0x9ab) land in both rendered halves
        assert_eq!(uuid.uuid_128(), "11223344-5566-7788-99aa-456789ab9abc");

        // bits above the low 48 of the fifth part are ignored
        let masked = GattUuid::from_parts(0x11223344, 0x5566, 0x7788, 0x99aa, 0xffff_1234_5678_9abc);

        assert_eq!(uuid, masked);
    }

    #[test]
    fn text_construction_from_assigned_numbers() {
        let cud = GattUuid::from_u16(assigned::CHARACTERISTIC_USER_DESCRIPTION);

        assert_eq!(cud.uuid_128(), "00002901-0000-1000-8000-00805f9b34fb");

        let device_information = GattUuid::from_u16(assigned::DEVICE_INFORMATION_SERVICE);

        assert_eq!(device_information.uuid_128(), "0000180a-0000-1000-8000-00805f9b34fb");

        assert_eq!(
            GattUuid::from_u16(assigned::PRIMARY_SERVICE).uuid_16(),
            "2800"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let uuid = GattUuid::from_hex_str("0000180A");

        let json = serde_json::to_string(&uuid).unwrap();

        assert_eq!(json, "\"0000180a-0000-1000-8000-00805f9b34fb\"");

        let back: GattUuid = serde_json::from_str(&json).unwrap();

        assert_eq!(back.uuid_128(), uuid.uuid_128());

        assert_eq!(back.bit_count(), 128);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_unsupported_lengths() {
        assert!(serde_json::from_str::<GattUuid>("\"rqzp\"").is_err());

        assert!(serde_json::from_str::<GattUuid>("\"0000180\"").is_err());
    }

    #[cfg(feature = "uuid-crate")]
    #[test]
    fn uuid_crate_round_trip() {
        let source = uuid::Uuid::from_u128(0x68d82662_0305_4e6f_a679_6be1475f5e04);

        let gatt_uuid = GattUuid::from(source);

        assert_eq!(gatt_uuid.uuid_128(), "68d82662-0305-4e6f-a679-6be1475f5e04");

        assert_eq!(uuid::Uuid::try_from(&gatt_uuid), Ok(source));

        assert_eq!(uuid::Uuid::try_from(&GattUuid::default()), Err(()));
    }
}
