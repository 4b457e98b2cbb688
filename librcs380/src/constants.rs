// librcs380/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame preamble: 0x00 0x00 0xFF
pub const FRAME_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const FRAME_POSTAMBLE: u8 = 0x00;

/// ACK frame sent by the chipset after accepting a command. Writing it to
/// the chipset aborts the command in progress.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Frame overhead around the payload: preamble(3) + len(1) + lcs(1) + dcs(1) + postamble(1)
pub const FRAME_OVERHEAD: usize = 7;

/// Maximum payload length (direction byte + code + data) of a normal frame
pub const MAX_PAYLOAD_LEN: usize = 255;

/// Maximum command data length: the direction byte and the code take two
/// bytes of the payload.
pub const MAX_COMMAND_DATA_LEN: usize = MAX_PAYLOAD_LEN - 2;

/// Default capacity of a single read from the transport
pub const DEFAULT_FRAME_CAPACITY: usize = 255;

/// Host->device (D6) and device->host (D7) direction bytes
pub const DIRECTION_HOST: u8 = 0xD6;
pub const DIRECTION_DEVICE: u8 = 0xD7;

/// Sony vendor id and RC-S380 product ids
pub const SONY_VENDOR_ID: u16 = 0x054C;
pub const RCS380_PRODUCT_ID: u16 = 0x06C3;
pub const RCS380S_PRODUCT_ID: u16 = 0x06C1;
