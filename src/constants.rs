//! Protocol constants for FTDI chip communication.
//!
//! These constants define the USB vendor request codes and EEPROM layout
//! details this tool relies on. Most users should not need to use these
//! directly.

// ---- FTDI Vendor ID and known Product IDs ----

/// Default FTDI vendor ID.
pub const FTDI_VID: u16 = 0x0403;

/// Known FTDI product IDs.
pub mod pid {
    /// FT232AM, FT232BM, FT232R.
    pub const FT232: u16 = 0x6001;
    /// FT2232C/D/H.
    pub const FT2232: u16 = 0x6010;
    /// FT4232H.
    pub const FT4232: u16 = 0x6011;
    /// FT232H.
    pub const FT232H: u16 = 0x6014;
    /// FT230X.
    pub const FT230X: u16 = 0x6015;
}

// ---- SIO vendor request codes ----

/// Reset the port.
pub(crate) const SIO_RESET_REQUEST: u8 = 0x00;
/// Poll modem status.
pub(crate) const SIO_POLL_MODEM_STATUS_REQUEST: u8 = 0x05;
/// Set latency timer.
pub(crate) const SIO_SET_LATENCY_TIMER_REQUEST: u8 = 0x09;
/// Read EEPROM.
pub(crate) const SIO_READ_EEPROM_REQUEST: u8 = 0x90;
/// Write EEPROM.
pub(crate) const SIO_WRITE_EEPROM_REQUEST: u8 = 0x91;

// ---- Reset sub-commands ----

/// SIO reset (device reset).
pub(crate) const SIO_RESET_SIO: u16 = 0;

// ---- EEPROM layout ----

/// Maximum EEPROM size in bytes (93x66 and FT-X internal MTP).
pub const MAX_EEPROM_SIZE: usize = 1024;
/// Smallest EEPROM a chip reports (93x46 in 16-bit organization).
pub const MIN_EEPROM_SIZE: usize = 128;
/// Header bytes 0x00-0x13 plus the trailing checksum word.
pub(crate) const MIN_IMAGE_LEN: usize = 0x16;

// String descriptor headers: the byte at the address holds the descriptor
// offset (folded into the page), the byte after it the descriptor length.

/// Manufacturer string header address.
pub(crate) const MANUFACTURER_ADDR: usize = 0x0E;
/// Product description string header address.
pub(crate) const PRODUCT_ADDR: usize = 0x10;
/// Serial number string header address.
pub(crate) const SERIAL_ADDR: usize = 0x12;

/// USB string descriptor type tag.
pub(crate) const STRING_DESCRIPTOR_TYPE: u8 = 0x03;
/// Checksum accumulator seed.
pub(crate) const CHECKSUM_SEED: u16 = 0xAAAA;
