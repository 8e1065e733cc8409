//! Device discovery and enumeration.
//!
//! Use [`find_known_devices`] to list connected FTDI devices, or
//! [`DeviceFilter`] for more precise matching by serial number or device
//! index.

use nusb::{self, DeviceInfo, MaybeFuture};
use std::time::Duration;

use crate::constants::{pid, FTDI_VID};
use crate::error::{Error, Result};

/// Filtering criteria for finding FTDI devices.
///
/// All fields beyond `vendor_id` and `product_id` are optional. When set,
/// they further restrict which devices match.
///
/// # Example
///
/// ```no_run
/// use ftdi_id::DeviceFilter;
///
/// let filter = DeviceFilter::new(0x0403, 0x6014)
///     .serial("FT123456")
///     .index(0);
/// ```
#[derive(Debug, Clone)]
pub struct DeviceFilter {
    /// USB vendor ID to match.
    pub vendor_id: u16,
    /// USB product ID to match.
    pub product_id: u16,
    /// If set, match against the USB serial number string.
    pub serial: Option<String>,
    /// Select the Nth matching device (0-based). Defaults to 0.
    pub index: usize,
}

impl DeviceFilter {
    /// Create a new filter matching the given vendor and product IDs.
    pub fn new(vendor_id: u16, product_id: u16) -> Self {
        Self {
            vendor_id,
            product_id,
            serial: None,
            index: 0,
        }
    }

    /// Require the serial number to match.
    pub fn serial(mut self, serial: impl Into<String>) -> Self {
        self.serial = Some(serial.into());
        self
    }

    /// Select the Nth matching device (0-based).
    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

/// USB string descriptor read timeout.
const STRING_TIMEOUT: Duration = Duration::from_secs(1);

/// List all connected FTDI devices matching the given vendor and product IDs.
pub fn find_devices(vendor: u16, product: u16) -> Result<Vec<DeviceInfo>> {
    let devices: Vec<DeviceInfo> = nusb::list_devices()
        .wait()?
        .filter(|d| d.vendor_id() == vendor && d.product_id() == product)
        .collect();
    Ok(devices)
}

/// List all connected devices with the FTDI vendor ID and a known
/// product ID.
pub fn find_known_devices() -> Result<Vec<DeviceInfo>> {
    const KNOWN_PIDS: [u16; 5] = [pid::FT232, pid::FT2232, pid::FT4232, pid::FT232H, pid::FT230X];

    let devices: Vec<DeviceInfo> = nusb::list_devices()
        .wait()?
        .filter(|d| d.vendor_id() == FTDI_VID && KNOWN_PIDS.contains(&d.product_id()))
        .collect();
    Ok(devices)
}

/// Find a single device matching the given filter criteria.
///
/// Each candidate is opened temporarily to read its serial number
/// descriptor when the `serial` filter is set.
pub fn find_device(filter: &DeviceFilter) -> Result<DeviceInfo> {
    let candidates: Vec<DeviceInfo> = nusb::list_devices()
        .wait()?
        .filter(|d| d.vendor_id() == filter.vendor_id && d.product_id() == filter.product_id)
        .collect();

    let mut match_count = 0usize;

    for dev_info in candidates {
        if let Some(ref expected_serial) = filter.serial {
            let device = dev_info.open().wait()?;
            let desc = device.device_descriptor();

            if let Some(idx) = desc.serial_number_string_index() {
                let serial = device
                    .get_string_descriptor(idx, 0x0409, STRING_TIMEOUT)
                    .wait()
                    .unwrap_or_default();
                if serial != *expected_serial {
                    continue;
                }
            } else {
                continue;
            }
        }

        if match_count == filter.index {
            return Ok(dev_info);
        }
        match_count += 1;
    }

    Err(Error::DeviceNotFound)
}

/// Read the manufacturer, product description, and serial number string
/// descriptors of a device.
///
/// Opens the device temporarily; descriptors a device does not carry
/// come back as empty strings.
pub fn device_strings(dev_info: &DeviceInfo) -> Result<(String, String, String)> {
    let device = dev_info.open().wait()?;
    let desc = device.device_descriptor();

    let read_string = |idx| match idx {
        Some(idx) => device
            .get_string_descriptor(idx, 0x0409, STRING_TIMEOUT)
            .wait()
            .unwrap_or_default(),
        None => String::new(),
    };

    let manufacturer = read_string(desc.manufacturer_string_index());
    let description = read_string(desc.product_string_index());
    let serial = read_string(desc.serial_number_string_index());

    Ok((manufacturer, description, serial))
}
