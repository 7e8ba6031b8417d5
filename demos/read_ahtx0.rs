//! Reads one temperature and humidity sample from an AHTx0 on a Linux I2C bus.
//!
//! ```
//! $ cargo run --example read_ahtx0 --features linux -- 38 1
//! 22.5 | 41.3
//! ```
//!
//! Both arguments are hexadecimal and optional (address 0x38, bus 1).
//! Any failure prints `-1 | -1`.

use ahtx0_sensor::{Ahtx0, BusId, Config, DEFAULT_ADDRESS, LinuxBus, Reading};
use linux_embedded_hal::Delay;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn setting(args: &[String], index: usize, default: u8) -> Result<u8> {
    match args.get(index) {
        Some(arg) => Ok(u8::from_str_radix(arg.trim_start_matches("0x"), 16)?),
        None => Ok(default),
    }
}

fn measure() -> Result<Reading> {
    let args: Vec<String> = std::env::args().collect();
    let address = setting(&args, 1, DEFAULT_ADDRESS)?;
    let bus = BusId(setting(&args, 2, BusId::default().0)?);

    let config = Config::default().with_address(address);
    let mut sensor = Ahtx0::new(LinuxBus::new(bus), Delay, config)?;
    Ok(sensor.get_measure()?)
}

fn main() {
    match measure() {
        Ok(reading) => println!(
            "{:.1} | {:.1}",
            reading.temperature, reading.relative_humidity
        ),
        Err(_) => println!("-1 | -1"),
    }
}
