//! AHTx0 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the AHT10/AHT20 (AHTx0)
//! temperature and humidity sensors, built on top of the [`embedded-hal`] traits.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Bounded polling: a sensor that never reports ready yields [`Error::Timeout`]
//! - Optional logging support via `defmt`
//!
//! # Protocol
//! ```text
//! [Uninitialized] --reset, 40 ms--> [Reset] --calibrated?--
//!     no  --> initialize, poll every 10 ms --> [Ready]
//!     yes --> [Ready]
//! [Ready] --trigger, 80 ms--> [Converting] --busy? poll every 80 ms--
//!     not busy --> read 7 bytes --> [Ready] (+ Reading)
//! ```
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//! - [`DelayNs`] for the datasheet wait times
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` and logs protocol steps
//! - `linux`: [`LinuxBus`], a `/dev/i2c-N` transport opened per transaction
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(any(test, feature = "linux")), no_std)]

pub mod ahtx0;
pub mod config;
pub mod error;
pub mod frame;
#[cfg(feature = "linux")]
pub mod linux;
pub mod status;

pub use ahtx0::Ahtx0;
pub use config::{Config, DEFAULT_ADDRESS};
pub use error::Error;
pub use frame::{RawFrame, Reading};
#[cfg(feature = "linux")]
pub use linux::{BusId, LinuxBus};
pub use status::Status;
