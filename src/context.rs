//! Core FTDI device handle and operations.
//!
//! [`FtdiDevice`] represents an opened FTDI USB device and provides the
//! vendor control transfers the EEPROM operations are built on.

use std::time::Duration;

use nusb::transfer::{ControlIn, ControlOut, ControlType, Recipient};
use nusb::{self, DeviceInfo, MaybeFuture};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::types::ChipType;

/// Default control transfer timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// An opened FTDI USB device.
///
/// Owns the USB device and the claimed interface. EEPROM access is
/// device-wide, so interface A is always claimed, even on
/// multi-interface chips.
///
/// # Opening a device
///
/// ```no_run
/// use ftdi_id::{FtdiDevice, constants::{pid, FTDI_VID}};
///
/// let mut dev = FtdiDevice::open(FTDI_VID, pid::FT232H)?;
/// let image = dev.read_eeprom()?;
/// # Ok::<(), ftdi_id::Error>(())
/// ```
pub struct FtdiDevice {
    #[allow(dead_code)] // Kept to ensure the USB device stays open
    device: nusb::Device,
    interface: nusb::Interface,

    // Chip identification
    chip_type: ChipType,

    // Transfer configuration
    read_timeout: Duration,
    write_timeout: Duration,

    // USB index value used in control transfers (1-based interface)
    usb_index: u16,
}

impl std::fmt::Debug for FtdiDevice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FtdiDevice")
            .field("chip_type", &self.chip_type)
            .field("usb_index", &self.usb_index)
            .finish_non_exhaustive()
    }
}

// ---- Construction / Opening ----

impl FtdiDevice {
    /// Open the first FTDI device matching the given vendor and product IDs.
    pub fn open(vendor: u16, product: u16) -> Result<Self> {
        let dev_info = nusb::list_devices()
            .wait()?
            .find(|d| d.vendor_id() == vendor && d.product_id() == product)
            .ok_or(Error::DeviceNotFound)?;

        Self::from_device_info(dev_info)
    }

    /// Open a device matching a [`DeviceFilter`](crate::DeviceFilter).
    pub fn open_with_filter(filter: &crate::device_info::DeviceFilter) -> Result<Self> {
        let dev_info = crate::device_info::find_device(filter)?;
        Self::from_device_info(dev_info)
    }

    /// Open a device from an already-discovered [`nusb::DeviceInfo`].
    pub fn from_device_info(dev_info: DeviceInfo) -> Result<Self> {
        let device = dev_info.open().wait()?;

        // Detach kernel driver and claim interface A
        let interface = device.detach_and_claim_interface(0).wait()?;

        // Auto-detect chip type from bcdDevice
        let desc = device.device_descriptor();
        let bcd = desc.device_version();
        let has_serial = desc.serial_number_string_index().is_some();
        let chip_type = ChipType::from_bcd(bcd, has_serial);

        let ftdi = Self {
            device,
            interface,
            chip_type,
            read_timeout: DEFAULT_TIMEOUT,
            write_timeout: DEFAULT_TIMEOUT,
            usb_index: 1,
        };

        // Reset device
        ftdi.usb_reset()?;

        Ok(ftdi)
    }

    /// The detected FTDI chip type.
    pub fn chip_type(&self) -> ChipType {
        self.chip_type
    }
}

// ---- Internal USB helpers ----

impl FtdiDevice {
    /// Send a vendor OUT control transfer to the device.
    pub(crate) fn control_out(&self, request: u8, value: u16, index: u16) -> Result<()> {
        self.interface
            .control_out(
                ControlOut {
                    control_type: ControlType::Vendor,
                    recipient: Recipient::Device,
                    request,
                    value,
                    index,
                    data: &[],
                },
                self.write_timeout,
            )
            .wait()?;
        Ok(())
    }

    /// Send a vendor IN control transfer to the device.
    pub(crate) fn control_in(
        &self,
        request: u8,
        value: u16,
        index: u16,
        length: u16,
    ) -> Result<Vec<u8>> {
        let data = self
            .interface
            .control_in(
                ControlIn {
                    control_type: ControlType::Vendor,
                    recipient: Recipient::Device,
                    request,
                    value,
                    index,
                    length,
                },
                self.read_timeout,
            )
            .wait()?;
        Ok(data)
    }
}

// ---- Reset / status ----

impl FtdiDevice {
    /// Perform a USB reset on the FTDI device.
    ///
    /// This resets the device to its default state.
    pub fn usb_reset(&self) -> Result<()> {
        self.control_out(SIO_RESET_REQUEST, SIO_RESET_SIO, self.usb_index)
    }

    /// Poll the raw modem status word.
    ///
    /// Used as part of the EEPROM write preamble; the decoded line bits
    /// are of no interest here.
    pub(crate) fn poll_modem_status(&self) -> Result<u16> {
        let data = self.control_in(SIO_POLL_MODEM_STATUS_REQUEST, 0, self.usb_index, 2)?;
        if data.len() < 2 {
            return Err(Error::DeviceUnavailable);
        }
        Ok((data[0] as u16) | ((data[1] as u16) << 8))
    }

    /// Set the latency timer value (1-255 ms).
    pub(crate) fn set_latency_timer(&self, latency_ms: u8) -> Result<()> {
        if latency_ms < 1 {
            return Err(Error::InvalidArgument("latency must be between 1 and 255"));
        }
        self.control_out(
            SIO_SET_LATENCY_TIMER_REQUEST,
            latency_ms as u16,
            self.usb_index,
        )
    }
}
