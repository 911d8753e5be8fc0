//! Assigned numbers for GATT
//!
//! The 16 bit values in this module are assigned by the Bluetooth SIG and
//! can be found in the *Assigned Numbers* document. They are the shortened
//! identifiers the declaration, descriptor, and standard service attributes
//! of a GATT server are keyed by, here as `u16` constants for use with
//! [`GattUuid::from_u16`].
//!
//! ```
//! use gatt_uuid::{assigned, GattUuid};
//!
//! let cccd = GattUuid::from_u16(assigned::CLIENT_CHARACTERISTIC_CONFIGURATION);
//!
//! assert_eq!(cccd.uuid_128(), "00002902-0000-1000-8000-00805f9b34fb");
//! ```
//!
//! [`GattUuid::from_u16`]: crate::GattUuid::from_u16

/// The assigned number of a *Primary Service* declaration
///
/// This is used as the UUID of a service declaration attribute. It marks the
/// service as a primary service and not a secondary service.
pub const PRIMARY_SERVICE: u16 = 0x2800;

/// The assigned number of a *Secondary Service* declaration
///
/// This is used as the UUID of a service declaration attribute. It marks the
/// service as a secondary service and not a primary service.
pub const SECONDARY_SERVICE: u16 = 0x2801;

/// The assigned number of an *Include* declaration
///
/// This is used as the UUID of an include definition attribute.
pub const INCLUDE_DEFINITION: u16 = 0x2802;

/// The assigned number of a *Characteristic* declaration
///
/// This is used as the UUID of a characteristic declaration attribute.
pub const CHARACTERISTIC: u16 = 0x2803;

/// The assigned number of the *Characteristic Extended Properties* descriptor
pub const CHARACTERISTIC_EXTENDED_PROPERTIES: u16 = 0x2900;

/// The assigned number of the *Characteristic User Description* descriptor
pub const CHARACTERISTIC_USER_DESCRIPTION: u16 = 0x2901;

/// The assigned number of the *Client Characteristic Configuration* descriptor
pub const CLIENT_CHARACTERISTIC_CONFIGURATION: u16 = 0x2902;

/// The assigned number of the *Server Characteristic Configuration* descriptor
pub const SERVER_CHARACTERISTIC_CONFIGURATION: u16 = 0x2903;

/// The assigned number of the *Characteristic Presentation Format* descriptor
pub const CHARACTERISTIC_PRESENTATION_FORMAT: u16 = 0x2904;

/// The assigned number of the *Characteristic Aggregate Format* descriptor
pub const CHARACTERISTIC_AGGREGATE_FORMAT: u16 = 0x2905;

/// The assigned number of the *Generic Access* service
pub const GENERIC_ACCESS_SERVICE: u16 = 0x1800;

/// The assigned number of the *Generic Attribute* service
pub const GENERIC_ATTRIBUTE_SERVICE: u16 = 0x1801;

/// The assigned number of the *Device Information* service
pub const DEVICE_INFORMATION_SERVICE: u16 = 0x180A;

/// The assigned number of the *Heart Rate* service
pub const HEART_RATE_SERVICE: u16 = 0x180D;

/// The assigned number of the *Battery* service
pub const BATTERY_SERVICE: u16 = 0x180F;

/// The assigned number of the *Device Name* characteristic
pub const DEVICE_NAME: u16 = 0x2A00;

/// The assigned number of the *Appearance* characteristic
pub const APPEARANCE: u16 = 0x2A01;

/// The assigned number of the *Battery Level* characteristic
pub const BATTERY_LEVEL: u16 = 0x2A19;

/// The assigned number of the *Heart Rate Measurement* characteristic
pub const HEART_RATE_MEASUREMENT: u16 = 0x2A37;
