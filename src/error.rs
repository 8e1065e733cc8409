//! Error types for the ftdi-id crate.

/// The error type for FTDI EEPROM operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An error from the nusb USB layer.
    #[error("USB error: {0}")]
    Usb(#[from] nusb::Error),

    /// A USB transfer error.
    #[error("USB transfer error: {0}")]
    Transfer(#[from] nusb::transfer::TransferError),

    /// A descriptor read failed.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] nusb::GetDescriptorError),

    /// An I/O error while loading or saving an image file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No matching device was found.
    #[error("device not found")]
    DeviceNotFound,

    /// The USB device is unavailable (not opened or disconnected).
    #[error("USB device unavailable")]
    DeviceUnavailable,

    /// Invalid argument(s) were provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The declared image length cannot describe an FTDI EEPROM.
    #[error("malformed EEPROM image: {len} bytes is not a valid size")]
    MalformedImage {
        /// The rejected length.
        len: usize,
    },

    /// The unused area between the string table and the checksum is too
    /// small for the requested operation.
    #[error("unused EEPROM area too small: {unused} bytes")]
    RegionTooSmall {
        /// Size of the unused area; negative when the string table
        /// overruns the image.
        unused: isize,
    },

    /// The encoded serial string would overrun the checksum word.
    #[error("serial string too long: {needed} bytes needed, {available} available")]
    SerialTooLong {
        /// Bytes the encoded string plus tailer would occupy.
        needed: usize,
        /// Bytes available before the checksum word.
        available: usize,
    },

    /// EEPROM checksum verification failed.
    #[error("EEPROM checksum mismatch: stored {stored:#06x}, computed {computed:#06x}")]
    ChecksumMismatch {
        /// The checksum word found in the image.
        stored: u16,
        /// The checksum computed over the image content.
        computed: u16,
    },

    /// An EEPROM transport error.
    #[error("EEPROM error: {0}")]
    Eeprom(String),
}

/// A specialized `Result` type for FTDI EEPROM operations.
pub type Result<T> = std::result::Result<T, Error>;
