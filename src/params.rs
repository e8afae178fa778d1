use std::fmt;

use log::debug;

use crate::addressing::{addr_range_bytes, addressing_mode, AddressingMode};

/// Widths describing one slave attached to the host bus.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BusConfig {
    pub slave_data_width: u32,
    pub host_data_width: u32,
    pub slave_addr_width: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BusParameters {
    pub mode: AddressingMode,
    pub range_bytes: u64,
}

impl BusConfig {
    pub fn new(slave_data_width: u32, host_data_width: u32, slave_addr_width: u32) -> Self {
        Self {
            slave_data_width,
            host_data_width,
            slave_addr_width,
        }
    }

    pub fn resolve(&self) -> BusParameters {
        let mode = addressing_mode(self.slave_data_width, self.host_data_width);
        let range_bytes = addr_range_bytes(self.slave_addr_width, mode);

        debug!("{:?} => mode {} range {:#x}", self, mode, range_bytes);

        BusParameters { mode, range_bytes }
    }
}

impl fmt::Display for BusParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode={} range={}", self.mode, self.range_bytes)
    }
}
