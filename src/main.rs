use anyhow::Result;
use clap::Parser;
use log::info;

use busmode::params::BusConfig;

/// Compute bus addressing parameters for a slave interface
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// Data bus width of the slave, in bits
    #[clap(short, long)]
    slave_data_width: u32,
    /// Data bus width of the host, in bits
    #[clap(short = 'H', long, default_value_t = 32)]
    host_data_width: u32,
    /// Address bus width of the slave, in bits
    #[clap(short = 'a', long)]
    slave_addr_width: u32,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    info!("{:?}", args);

    let config = BusConfig::new(
        args.slave_data_width,
        args.host_data_width,
        args.slave_addr_width,
    );

    println!("{}", config.resolve());

    Ok(())
}
