use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use log::trace;

/// Granularity at which the host addresses a slave's memory.
///
/// The discriminant is the factor the slave address space is scaled by.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AddressingMode {
    Byte = 4,
    LWord = 2,
    Int = 1,
}

impl AddressingMode {
    pub fn scale(self) -> u64 {
        self as u64
    }

    pub fn label(self) -> &'static str {
        match self {
            AddressingMode::Byte => "byte",
            AddressingMode::LWord => "lword",
            AddressingMode::Int => "int",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AddressingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "byte" => Ok(AddressingMode::Byte),
            "lword" => Ok(AddressingMode::LWord),
            "int" => Ok(AddressingMode::Int),
            _ => bail!("unknown addressing mode {:?}", s),
        }
    }
}

const RANGE_BASE: u32 = 2;

/// Classifies a slave/host data width pair.
///
/// Only an 8 or 16 bit slave behind a 32 bit host gets a narrow mode, every
/// other pair falls back to `Int`.
pub fn addressing_mode(slave_data_width: u32, host_data_width: u32) -> AddressingMode {
    let mode = match (slave_data_width, host_data_width) {
        (8, 32) => AddressingMode::Byte,
        (16, 32) => AddressingMode::LWord,
        _ => AddressingMode::Int,
    };

    trace!(
        "addressing mode slave:{} host:{} => {}",
        slave_data_width,
        host_data_width,
        mode
    );

    mode
}

/// Size in bytes of the range a slave occupies on the host bus.
///
/// NOTE: the base is combined with the address width by XOR, not raised to
/// it, so this is `(2 ^ width) * scale` bitwise. A power of two is the likely
/// intent but existing configurations depend on the XOR result.
pub fn addr_range_bytes(slave_addr_width: u32, mode: AddressingMode) -> u64 {
    let base = (RANGE_BASE ^ slave_addr_width) as u64;

    base * mode.scale()
}
