use embedded_hal::{delay::DelayNs, i2c::I2c};

use crate::config::Config;
use crate::error::Error;
use crate::frame::{RawFrame, Reading};
use crate::status::Status;

/// Every command and read goes through register 0.
const REGISTER: u8 = 0x00;

const CMD_SOFT_RESET: [u8; 2] = [REGISTER, 0xBA];
const CMD_INITIALIZE: [u8; 4] = [REGISTER, 0xBE, 0x08, 0x00];
const CMD_TRIGGER_MEASUREMENT: [u8; 4] = [REGISTER, 0xAC, 0x33, 0x00];

/// Settle time after a soft reset (or power on).
const RESET_DELAY_MS: u32 = 40;
/// Interval between calibration status polls.
const CALIBRATION_POLL_MS: u32 = 10;
/// Minimum conversion time, also used between busy polls.
const MEASUREMENT_DELAY_MS: u32 = 80;

/// Driver for the AHTx0 (AHT10/AHT20) temperature and humidity sensor.
pub struct Ahtx0<I2C, D> {
    i2c: I2C,
    delay: D,
    config: Config,
}

impl<I2C, DELAY, E> Ahtx0<I2C, DELAY>
where
    I2C: I2c<Error = E>,
    DELAY: DelayNs,
    E: core::fmt::Debug,
{
    /// Creates the driver and brings the sensor into the ready state.
    ///
    /// This soft-resets the sensor, waits for it to settle and, if it does
    /// not report itself calibrated, sends the initialize command and polls
    /// until calibration completes.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to.
    /// * `delay` - A delay provider implementing the `DelayNs` trait.
    /// * `config` - Device address and polling bounds.
    ///
    /// # Errors
    ///
    /// * `Error::InitializationFailed` if the initialize command cannot be written.
    /// * `Error::Timeout` if calibration does not finish within `config.calibration_polls`.
    /// * `Error::Transport` if a status read fails.
    pub fn new(i2c: I2C, delay: DELAY, config: Config) -> Result<Self, Error<E>> {
        let mut sensor = Ahtx0 { i2c, delay, config };
        sensor.soft_reset();
        sensor.ensure_calibrated()?;
        Ok(sensor)
    }

    /// Returns the configuration the driver was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gives back the bus and delay provider.
    pub fn release(self) -> (I2C, DELAY) {
        (self.i2c, self.delay)
    }

    /// Reads the status byte.
    pub fn get_status(&mut self) -> Result<Status, Error<E>> {
        let mut buf = [0; 1];
        self.i2c
            .write_read(self.config.address, &[REGISTER], &mut buf)?;
        Ok(Status::new(buf[0]))
    }

    /// Reads the status byte and reports the calibrated bit.
    pub fn status_calibrated(&mut self) -> Result<bool, Error<E>> {
        Ok(self.get_status()?.is_calibrated())
    }

    /// Reads the status byte and reports the busy bit.
    pub fn status_busy(&mut self) -> Result<bool, Error<E>> {
        Ok(self.get_status()?.is_busy())
    }

    /// Starts a conversion and waits the minimum conversion time.
    pub fn trigger_measurement(&mut self) -> Result<(), Error<E>> {
        self.i2c
            .write(self.config.address, &CMD_TRIGGER_MEASUREMENT)
            .map_err(Error::MeasurementFailed)?;
        #[cfg(feature = "defmt")]
        defmt::debug!("ahtx0: measurement triggered");
        self.delay.delay_ms(MEASUREMENT_DELAY_MS);
        Ok(())
    }

    /// Takes a temperature and humidity measurement.
    ///
    /// Triggers a conversion, polls the busy bit every 80 ms until the
    /// sensor is idle, then reads and decodes the 7-byte result frame.
    ///
    /// # Returns
    ///
    /// * `Ok(Reading)` once the sensor reports the conversion finished.
    /// * `Err(Error::Timeout)` if it stays busy for `config.busy_polls` polls.
    pub fn get_measure(&mut self) -> Result<Reading, Error<E>> {
        self.trigger_measurement()?;
        self.wait_until_idle()?;

        let mut frame = RawFrame([0; RawFrame::LEN]);
        self.i2c
            .write_read(self.config.address, &[REGISTER], &mut frame.0)?;

        let reading = frame.reading();
        #[cfg(feature = "defmt")]
        defmt::debug!("ahtx0: {} -> {}", frame, reading);
        Ok(reading)
    }

    /// Sends the soft reset command and waits for the sensor to settle.
    ///
    /// The sensor does not reliably acknowledge a reset, so a failed write
    /// is ignored.
    fn soft_reset(&mut self) {
        if let Err(_e) = self.i2c.write(self.config.address, &CMD_SOFT_RESET) {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "ahtx0: soft reset not acknowledged: {}",
                defmt::Debug2Format(&_e)
            );
        }
        self.delay.delay_ms(RESET_DELAY_MS);
    }

    /// Sends the initialize command unless the sensor is already calibrated,
    /// then waits for the calibrated bit.
    fn ensure_calibrated(&mut self) -> Result<(), Error<E>> {
        if self.status_calibrated()? {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("ahtx0: not calibrated, sending initialize");
        self.i2c
            .write(self.config.address, &CMD_INITIALIZE)
            .map_err(Error::InitializationFailed)?;

        let polls = self.config.calibration_polls;
        for poll in 1..=polls {
            if self.status_calibrated()? {
                return Ok(());
            }
            if poll < polls {
                self.delay.delay_ms(CALIBRATION_POLL_MS);
            }
        }
        Err(Error::Timeout)
    }

    /// Polls the busy bit until it clears.
    ///
    /// No wait follows the last allowed poll.
    fn wait_until_idle(&mut self) -> Result<(), Error<E>> {
        let polls = self.config.busy_polls;
        for poll in 1..=polls {
            if !self.status_busy()? {
                return Ok(());
            }
            if poll < polls {
                self.delay.delay_ms(MEASUREMENT_DELAY_MS);
            }
        }
        Err(Error::Timeout)
    }
}
