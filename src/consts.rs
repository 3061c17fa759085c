//! Wire protocol bytes and the defaults from the spec. Bit-exact; do not
//! change the values, only what they're named.

pub(crate) const SOH: u8 = 0x01;
pub(crate) const STX: u8 = 0x02;
pub(crate) const EOT: u8 = 0x04;
pub(crate) const ACK: u8 = 0x06;
pub(crate) const NAK: u8 = 0x15;
pub(crate) const CAN: u8 = 0x18;
pub(crate) const CRC: u8 = 0x43;

pub(crate) const PACKET_SIZE: usize = 128;
pub(crate) const PACKET_1K_SIZE: usize = 1024;

/// Default filename buffer length (`YM_FILE_NAME_LENGTH` in the C source).
pub const DEFAULT_FILENAME_LEN: usize = 256;

/// Default retry budget per protocol step (`MAX_RETRY`).
pub const DEFAULT_MAX_RETRY: u32 = 5;

/// Default timeout, in milliseconds, for the first byte of a packet.
pub const DEFAULT_PACKET_TIMEOUT_MS: u32 = 10_000;

/// Default timeout, in milliseconds, for every byte after the first
/// within a packet.
pub const DEFAULT_CHAR_TIMEOUT_MS: u32 = 1_000;
