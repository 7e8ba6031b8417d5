/// Default 7-bit I2C address of the AHTx0 family.
pub const DEFAULT_ADDRESS: u8 = 0x38;

/// Construction parameters for [`Ahtx0`](crate::Ahtx0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// 7-bit device address.
    pub address: u8,
    /// Status reads allowed while waiting for calibration, 10 ms apart.
    pub calibration_polls: u32,
    /// Status reads allowed while waiting for a conversion, 80 ms apart.
    pub busy_polls: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address: DEFAULT_ADDRESS,
            calibration_polls: 100,
            busy_polls: 10,
        }
    }
}

impl Config {
    /// Uses a non-default device address.
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Sets how many status reads to allow while waiting for calibration.
    pub fn with_calibration_polls(mut self, polls: u32) -> Self {
        self.calibration_polls = polls;
        self
    }

    /// Sets how many status reads to allow while a conversion is running.
    pub fn with_busy_polls(mut self, polls: u32) -> Self {
        self.busy_polls = polls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.address, 0x38);
        assert_eq!(config.calibration_polls, 100);
        assert_eq!(config.busy_polls, 10);
    }

    #[test]
    fn test_builder() {
        let config = Config::default()
            .with_address(0x39)
            .with_calibration_polls(3)
            .with_busy_polls(1);
        assert_eq!(
            config,
            Config {
                address: 0x39,
                calibration_polls: 3,
                busy_polls: 1,
            }
        );
    }
}
