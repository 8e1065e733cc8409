//! EEPROM mutation: checksum, serial string rewrite, identifier store.

use crate::constants::{CHECKSUM_SEED, SERIAL_ADDR, STRING_DESCRIPTOR_TYPE};
use crate::error::{Error, Result};

use super::EepromImage;

/// Compute the EEPROM checksum over `buf[0 .. len - 2]`.
///
/// The algorithm is: XOR each 16-bit little-endian word into the
/// accumulator, then rotate the accumulator left by 1 bit. Starting seed
/// is 0xAAAA. The final checksum word is excluded from its own
/// computation.
pub(crate) fn checksum(buf: &[u8], len: usize) -> u16 {
    let mut csum = CHECKSUM_SEED;
    for i in 0..len / 2 - 1 {
        let value = (buf[i * 2] as u16) | ((buf[i * 2 + 1] as u16) << 8);
        csum ^= value;
        csum = csum.rotate_left(1);
    }
    csum
}

impl EepromImage {
    /// Compute the checksum and store it little-endian in the final word.
    ///
    /// Must run after all other mutations, immediately before the image
    /// goes to a device. Idempotent.
    pub fn finalize(&mut self) {
        let csum = checksum(&self.buf, self.len);
        self.buf[self.len - 2] = csum as u8;
        self.buf[self.len - 1] = (csum >> 8) as u8;
    }

    /// Verify the stored checksum against a fresh computation.
    ///
    /// Useful for validating file-loaded images; device reads are
    /// trusted as-is.
    pub fn verify(&self) -> Result<()> {
        let computed = checksum(&self.buf, self.len);
        let stored = (self.buf[self.len - 2] as u16) | ((self.buf[self.len - 1] as u16) << 8);
        if stored != computed {
            return Err(Error::ChecksumMismatch { stored, computed });
        }
        Ok(())
    }

    /// Store the custom 32-bit identifier big-endian in the last 4 bytes
    /// before the checksum.
    ///
    /// Fails with [`Error::RegionTooSmall`] when the unused area is under
    /// 4 bytes, leaving the image byte-for-byte unchanged. Call
    /// [`finalize`](Self::finalize) afterward.
    pub fn set_id(&mut self, id: i32) -> Result<()> {
        let unused = self.unused_len();
        if unused < 4 {
            return Err(Error::RegionTooSmall { unused });
        }

        let pos = self.len - 6;
        self.buf[pos..pos + 4].copy_from_slice(&id.to_be_bytes());
        Ok(())
    }

    /// Rewrite the serial number string in place.
    ///
    /// The descriptor is re-encoded at its current offset with the new
    /// length, the tailer bytes are carried to their new position right
    /// after it, and everything beyond is zeroed up to the end of the
    /// image — including the checksum word, so the caller must
    /// [`finalize`](Self::finalize) before the image is used.
    ///
    /// Fails with [`Error::SerialTooLong`] when the encoded string plus
    /// tailer would reach the checksum word, leaving the image
    /// untouched.
    pub fn set_serial(&mut self, serial: &str) -> Result<()> {
        if !serial.is_ascii() {
            return Err(Error::InvalidArgument("serial must be ASCII"));
        }

        // Captured before any mutation: its position depends on the old
        // serial length.
        let tailer = self.tailer()?;

        let mask = self.len - 1;
        let serial_pos = (self.buf[SERIAL_ADDR] as usize) & mask;
        let encoded_len = serial.len() * 2 + 2;

        // Sub-header + characters + tailer must stop short of the checksum
        // word, and the descriptor length must fit its header byte.
        let needed = encoded_len + tailer.len();
        let available = (self.len - 2).saturating_sub(serial_pos);
        if needed > available || encoded_len > u8::MAX as usize {
            return Err(Error::SerialTooLong { needed, available });
        }

        self.buf[SERIAL_ADDR + 1] = encoded_len as u8;

        let mut pos = serial_pos;
        self.buf[pos] = encoded_len as u8;
        self.buf[pos + 1] = STRING_DESCRIPTOR_TYPE;
        pos += 2;
        for ch in serial.bytes() {
            self.buf[pos] = ch;
            self.buf[pos + 1] = 0x00;
            pos += 2;
        }
        self.buf[pos..pos + 4].copy_from_slice(&tailer);
        pos += 4;
        self.buf[pos..self.len].fill(0);

        Ok(())
    }
}
