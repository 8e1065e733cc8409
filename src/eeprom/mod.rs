//! FTDI EEPROM image codec: checksum, string table, and identifier slot.
//!
//! The EEPROM on FTDI chips stores device identification and USB
//! descriptor strings, followed by unused padding and a trailing checksum
//! word. This module provides:
//!
//! - [`EepromImage`] - An owned EEPROM image: raw bytes plus declared length.
//! - Read-only access: strings, unused area, tailer, identifier.
//! - Mutation: serial rewrite, identifier store, checksum finalization.
//! - I/O operations on [`FtdiDevice`](crate::FtdiDevice) for reading/writing
//!   the physical EEPROM.

mod build;
mod decode;
mod io;
mod types;

pub use types::EepromImage;
