//! Read-only EEPROM access: string table, unused area, tailer, identifier.

use crate::constants::{MANUFACTURER_ADDR, PRODUCT_ADDR, SERIAL_ADDR};
use crate::error::{Error, Result};

use super::EepromImage;

impl EepromImage {
    /// Decode a string descriptor given its two-byte header address.
    ///
    /// `buf[addr]` holds the descriptor offset folded into the page,
    /// `buf[addr + 1]` its byte length including the 2-byte sub-header.
    /// Characters are the low bytes of UTF-16LE code units (ASCII subset).
    fn decode_string(&self, addr: usize) -> Option<String> {
        let char_count = (self.buf[addr + 1] as usize) / 2;
        if char_count <= 1 {
            return None;
        }

        let mask = self.len - 1;
        let start = (self.buf[addr] as usize) & mask;

        let mut s = String::with_capacity(char_count - 1);
        for j in 0..char_count - 1 {
            let idx = (start + 2 + j * 2) & mask;
            s.push(self.buf[idx] as char);
        }

        Some(s)
    }

    /// The manufacturer, product description, and serial number strings.
    ///
    /// `None` entries are empty descriptors.
    pub fn strings(&self) -> (Option<String>, Option<String>, Option<String>) {
        (
            self.decode_string(MANUFACTURER_ADDR),
            self.decode_string(PRODUCT_ADDR),
            self.decode_string(SERIAL_ADDR),
        )
    }

    /// The serial number string alone.
    pub fn serial(&self) -> Option<String> {
        self.decode_string(SERIAL_ADDR)
    }

    /// Size in bytes of the unused area between the end of the string
    /// table and the checksum word.
    ///
    /// The used area ends 4 bytes (PnP/legacy block) past the serial
    /// descriptor. Negative when the serial header describes a table
    /// extending past the image.
    pub fn unused_len(&self) -> isize {
        let mask = self.len - 1;
        let area_start =
            ((self.buf[SERIAL_ADDR] as usize) & mask) + self.buf[SERIAL_ADDR + 1] as usize + 4;
        self.len as isize - area_start as isize - 2
    }

    /// The 4 bytes immediately preceding the identifier slot.
    ///
    /// These sit at the end of the used area, so their absolute position
    /// moves when the serial string is resized;
    /// [`set_serial`](Self::set_serial) captures them through this
    /// accessor and carries them forward unchanged.
    pub fn tailer(&self) -> Result<[u8; 4]> {
        let unused = self.unused_len();
        if unused < 0 {
            return Err(Error::RegionTooSmall { unused });
        }

        let pos = self.len - unused as usize - 6;
        Ok([
            self.buf[pos],
            self.buf[pos + 1],
            self.buf[pos + 2],
            self.buf[pos + 3],
        ])
    }

    /// Read the custom 32-bit identifier stored big-endian in the last
    /// 4 bytes before the checksum.
    ///
    /// Fails with [`Error::RegionTooSmall`] when the unused area cannot
    /// hold an identifier; an image never tagged by this tool reads as
    /// whatever padding those bytes contain (zero on freshly built
    /// EEPROMs).
    pub fn id(&self) -> Result<i32> {
        let unused = self.unused_len();
        if unused < 4 {
            return Err(Error::RegionTooSmall { unused });
        }

        let pos = self.len - 6;
        Ok(i32::from_be_bytes([
            self.buf[pos],
            self.buf[pos + 1],
            self.buf[pos + 2],
            self.buf[pos + 3],
        ]))
    }
}
