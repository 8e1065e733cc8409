//! EEPROM image container.

use std::path::Path;

use crate::constants::{MAX_EEPROM_SIZE, MIN_IMAGE_LEN};
use crate::error::{Error, Result};

/// An owned FTDI EEPROM image: raw bytes plus the declared length.
///
/// The buffer has a fixed 1024-byte capacity; `len` is the size of the
/// connected EEPROM part, a power of two between 128 and 1024 bytes on
/// real chips. All codec operations (strings, identifier slot, checksum)
/// work on one of these, whether it came from a device or a file.
///
/// An image lives for one read-modify-write cycle: it is produced by
/// [`FtdiDevice::read_eeprom`](crate::FtdiDevice::read_eeprom) or
/// [`load`](Self::load), mutated in place, finalized, and then sent back
/// via [`FtdiDevice::write_eeprom`](crate::FtdiDevice::write_eeprom) or
/// [`save`](Self::save).
#[derive(Clone)]
pub struct EepromImage {
    pub(crate) buf: [u8; MAX_EEPROM_SIZE],
    pub(crate) len: usize,
}

impl std::fmt::Debug for EepromImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EepromImage")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl EepromImage {
    /// Create an image from raw bytes.
    ///
    /// The slice length becomes the declared EEPROM size. It must be a
    /// power of two (string descriptor offsets are folded into the page
    /// with a `len - 1` bitmask, which silently misbehaves otherwise)
    /// and must at least cover the header and the checksum word.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let len = data.len();
        if len < MIN_IMAGE_LEN || len > MAX_EEPROM_SIZE || !len.is_power_of_two() {
            return Err(Error::MalformedImage { len });
        }
        let mut buf = [0u8; MAX_EEPROM_SIZE];
        buf[..len].copy_from_slice(data);
        Ok(Self { buf, len })
    }

    /// Load a raw image from a flat file.
    ///
    /// The file holds the bare image bytes, with no wrapper or metadata;
    /// the file size becomes the declared EEPROM size.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Save the raw image to a flat file, byte-for-byte what the device
    /// exposes.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.as_bytes())?;
        Ok(())
    }

    /// The declared EEPROM size in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: validation rejects zero-length images.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The raw image content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The 16-bit little-endian word at word index `i`.
    pub(crate) fn word(&self, i: usize) -> u16 {
        (self.buf[i * 2] as u16) | ((self.buf[i * 2 + 1] as u16) << 8)
    }
}
