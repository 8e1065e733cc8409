//! EEPROM USB I/O operations: reading and writing the physical EEPROM.

use log::debug;

use crate::constants::*;
use crate::context::FtdiDevice;
use crate::error::{Error, Result};
use crate::types::ChipType;

use super::EepromImage;

impl FtdiDevice {
    /// Read the entire EEPROM from the device.
    ///
    /// Performs one USB control transfer (2 bytes) per 16-bit word. The
    /// EEPROM size is then auto-detected: reads past the end of an
    /// external 93xx part wrap around, so the declared size is halved
    /// while both halves of the buffer are identical. The FT232R's
    /// internal EEPROM is always 128 bytes.
    ///
    /// A blank (all-0xFF) EEPROM is rejected; it holds no string table
    /// or checksum to operate on.
    pub fn read_eeprom(&mut self) -> Result<EepromImage> {
        let mut buf = [0u8; MAX_EEPROM_SIZE];
        for i in 0..MAX_EEPROM_SIZE / 2 {
            let data = self.control_in(SIO_READ_EEPROM_REQUEST, 0, i as u16, 2)?;
            if data.len() < 2 {
                return Err(Error::Eeprom("EEPROM read failed: short transfer".into()));
            }
            buf[i * 2] = data[0];
            buf[i * 2 + 1] = data[1];
        }

        if buf.iter().all(|&b| b == 0xFF) {
            return Err(Error::Eeprom("EEPROM is blank or unprogrammed".into()));
        }

        let mut size = MAX_EEPROM_SIZE;
        if self.chip_type() == ChipType::Ft232R {
            size = 0x80;
        } else {
            while size > MIN_EEPROM_SIZE && buf[..size / 2] == buf[size / 2..size] {
                size /= 2;
            }
        }
        debug!("EEPROM size detected: {size} bytes");

        EepromImage::from_bytes(&buf[..size])
    }

    /// Write an image to the device EEPROM.
    ///
    /// The image checksum is verified first, so a caller that mutated
    /// the image must have called [`EepromImage::finalize`]. The
    /// device's current contents are read back and only differing words
    /// are written; if the current contents cannot be read (e.g. a blank
    /// part) or their size differs, every word is written.
    pub fn write_eeprom(&mut self, image: &EepromImage) -> Result<()> {
        image.verify()?;

        let current = match self.read_eeprom() {
            Ok(cur) if cur.len() == image.len() => Some(cur),
            _ => None,
        };

        // Initialization sequence (from MProg traces)
        self.usb_reset()?;
        let _ = self.poll_modem_status();
        let _ = self.set_latency_timer(0x77);

        let mut written = 0usize;
        for i in 0..image.len() / 2 {
            let value = image.word(i);
            if let Some(ref cur) = current {
                if cur.word(i) == value {
                    continue;
                }
            }
            self.write_eeprom_location(i as u16, value)?;
            written += 1;
        }
        debug!("EEPROM write: {written} of {} words changed", image.len() / 2);

        Ok(())
    }

    /// Read a single 16-bit EEPROM location.
    pub fn read_eeprom_location(&self, addr: u16) -> Result<u16> {
        let data = self.control_in(SIO_READ_EEPROM_REQUEST, 0, addr, 2)?;
        if data.len() < 2 {
            return Err(Error::Eeprom("EEPROM read location failed".into()));
        }
        Ok((data[0] as u16) | ((data[1] as u16) << 8))
    }

    /// Write a single 16-bit EEPROM location.
    pub fn write_eeprom_location(&self, addr: u16, value: u16) -> Result<()> {
        self.control_out(SIO_WRITE_EEPROM_REQUEST, value, addr)
    }
}
