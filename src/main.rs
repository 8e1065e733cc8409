//! ftdi-id - read and write the custom ID and EEPROM of FTDI chips
//!
//! FTDI chips store their USB descriptors in a small EEPROM with a
//! trailing checksum. This tool stashes a 4-byte identifier in the
//! unused padding between the string table and the checksum, dumps and
//! restores whole EEPROM images, and can rewrite the serial number
//! string while preserving everything else.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use ftdi_id::constants::{pid, FTDI_VID};
use ftdi_id::{device_strings, find_known_devices, DeviceFilter, EepromImage, Error, FtdiDevice};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Set log level based on verbosity
    match cli.verbose {
        0 => {} // default (info)
        1 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    }

    let serial = cli.serial.as_deref();
    let result = match cli.command {
        Commands::List => run_list(),
        Commands::GetId => run_get_id(serial),
        Commands::SetId { id } => run_set_id(serial, id),
        Commands::Read { file } => run_read(serial, &file),
        Commands::Write { file, new_serial } => run_write(serial, &file, new_serial.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

/// Open the target device: FT232H first, then the classic FT232 product
/// ID, matching the serial number when one was given.
fn open_device(serial: Option<&str>) -> ftdi_id::Result<FtdiDevice> {
    for product in [pid::FT232H, pid::FT232] {
        let mut filter = DeviceFilter::new(FTDI_VID, product);
        if let Some(s) = serial {
            filter = filter.serial(s);
        }
        match FtdiDevice::open_with_filter(&filter) {
            Ok(dev) => return Ok(dev),
            Err(Error::DeviceNotFound) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(Error::DeviceNotFound)
}

fn run_list() -> ftdi_id::Result<()> {
    for (i, dev) in find_known_devices()?.iter().enumerate() {
        let (manufacturer, description, serial) = device_strings(dev)?;
        println!("Device #{}:", i);
        println!("\tManufacturer:\t{}", manufacturer);
        println!("\tDescription:\t{}", description);
        println!("\tSerial:     \t{}", serial);
    }
    Ok(())
}

fn run_get_id(serial: Option<&str>) -> ftdi_id::Result<()> {
    let mut dev = open_device(serial)?;
    let image = dev.read_eeprom()?;
    println!("ID = {}", image.id()?);
    Ok(())
}

fn run_set_id(serial: Option<&str>, id: i32) -> ftdi_id::Result<()> {
    if id <= 0 {
        return Err(Error::InvalidArgument("id must be positive"));
    }

    let mut dev = open_device(serial)?;
    let mut image = dev.read_eeprom()?;
    image.set_id(id)?;
    image.finalize();
    dev.write_eeprom(&image)
}

fn run_read(serial: Option<&str>, file: &Path) -> ftdi_id::Result<()> {
    let mut dev = open_device(serial)?;
    let image = dev.read_eeprom()?;
    image.save(file)?;
    log::info!("wrote {} bytes to {}", image.len(), file.display());
    Ok(())
}

fn run_write(serial: Option<&str>, file: &Path, new_serial: Option<&str>) -> ftdi_id::Result<()> {
    let mut image = EepromImage::load(file)?;
    if let Err(e) = image.verify() {
        // Not fatal: the checksum is rebuilt below, like every write
        log::warn!("{}: {}", file.display(), e);
    }

    let (manufacturer, description, old_serial) = image.strings();
    log::debug!(
        "image strings: ({}) ({}) ({})",
        manufacturer.as_deref().unwrap_or(""),
        description.as_deref().unwrap_or(""),
        old_serial.as_deref().unwrap_or("")
    );

    if let Some(s) = new_serial {
        image.set_serial(s)?;
    }
    image.finalize();

    let mut dev = open_device(serial)?;
    dev.write_eeprom(&image)
}
