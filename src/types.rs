//! Type definitions for FTDI chip communication.

/// Supported FTDI chip types.
///
/// The chip type is auto-detected when a device is opened, based on the
/// USB `bcdDevice` descriptor field. This tool only uses it to pick the
/// EEPROM size detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipType {
    /// Original FTDI chip (FT8U232AM).
    Am,
    /// B-type chip (FT232BM, FT245BM).
    Bm,
    /// Dual-port chip (FT2232C/D/L).
    Ft2232C,
    /// FT232R / FT245R.
    Ft232R,
    /// Dual hi-speed chip (FT2232H).
    Ft2232H,
    /// Quad-port chip (FT4232H).
    Ft4232H,
    /// Single hi-speed chip (FT232H).
    Ft232H,
    /// FT230X / FT231X / FT234XD.
    Ft230X,
}

impl ChipType {
    /// Detect the chip type from the `bcdDevice` descriptor field.
    pub(crate) fn from_bcd(bcd: u16, has_serial: bool) -> Self {
        match bcd {
            0x0400 => Self::Bm,
            0x0200 if !has_serial => Self::Bm, // Bug in BM: bcdDevice=0x200 when serial==0
            0x0200 => Self::Am,
            0x0500 => Self::Ft2232C,
            0x0600 => Self::Ft232R,
            0x0700 => Self::Ft2232H,
            0x0800 => Self::Ft4232H,
            0x0900 => Self::Ft232H,
            0x1000 => Self::Ft230X,
            _ => Self::Bm, // Default fallback
        }
    }
}
