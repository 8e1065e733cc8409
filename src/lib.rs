//! Pure Rust library for the EEPROM of FTDI USB devices.
//!
//! FTDI USB-to-serial bridge chips keep their USB identity — vendor and
//! product IDs and the manufacturer/product/serial strings — in a small
//! EEPROM with a trailing XOR-rotate checksum. This crate decodes and
//! rewrites that image, and stashes a custom 4-byte identifier in the
//! unused padding between the string table and the checksum. It uses
//! [nusb](https://crates.io/crates/nusb) as the USB backend — no C
//! dependencies or `libusb` required.
//!
//! # Quick Start
//!
//! ```no_run
//! use ftdi_id::{FtdiDevice, constants::{pid, FTDI_VID}};
//!
//! // Tag the first FT232H connected
//! let mut dev = FtdiDevice::open(FTDI_VID, pid::FT232H)?;
//! let mut image = dev.read_eeprom()?;
//! image.set_id(42)?;
//! image.finalize();
//! dev.write_eeprom(&image)?;
//! # Ok::<(), ftdi_id::Error>(())
//! ```
//!
//! # Features
//!
//! - **Device discovery**: Enumerate connected FTDI devices and their
//!   string descriptors.
//! - **EEPROM image codec**: Checksum, packed string table, and the
//!   custom identifier slot ([`EepromImage`]).
//! - **EEPROM I/O**: Whole-image reads with size auto-detection and
//!   minimal-diff writes over USB control transfers.
//! - **Flat files**: Raw images round-trip to disk byte-for-byte.

pub mod constants;
pub mod context;
pub mod device_info;
pub mod eeprom;
pub mod error;
pub mod types;

// ---- Convenience re-exports ----

pub use constants::FTDI_VID;
pub use context::FtdiDevice;
pub use device_info::{
    device_strings, find_device, find_devices, find_known_devices, DeviceFilter,
};
pub use eeprom::EepromImage;
pub use error::{Error, Result};
pub use types::ChipType;
