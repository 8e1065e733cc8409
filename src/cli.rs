//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse a string as a hex or decimal i32
fn parse_hex_i32(s: &str) -> Result<i32, String> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16).map_err(|e| format!("Invalid hex value: {}", e))
    } else {
        s.parse::<i32>().map_err(|e| format!("Invalid number: {}", e))
    }
}

#[derive(Parser)]
#[command(name = "ftdi-id")]
#[command(author, version, about = "Read and write the custom ID and EEPROM of FTDI chips", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Match the target device by its USB serial number
    #[arg(short, long, global = true)]
    pub serial: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List connected FTDI devices
    List,

    /// Print the custom identifier stored in the EEPROM
    GetId,

    /// Store a custom identifier in the EEPROM
    SetId {
        /// Identifier to store (decimal or 0x-prefixed hex, must be positive)
        #[arg(value_parser = parse_hex_i32)]
        id: i32,
    },

    /// Read the device's EEPROM to a file
    Read {
        /// Output file path
        file: PathBuf,
    },

    /// Write an EEPROM image file to the device
    Write {
        /// Input file path
        file: PathBuf,

        /// Rewrite the serial number string before writing
        #[arg(long)]
        new_serial: Option<String>,
    },
}
