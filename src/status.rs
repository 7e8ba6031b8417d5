/// Status byte reported by the sensor.
///
/// Never cached by the driver: every query performs a fresh bus read.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status(u8);

const CALIBRATED_BIT: u8 = 3;
const BUSY_BIT: u8 = 7;

impl Status {
    /// Wraps a raw status byte.
    pub const fn new(bits: u8) -> Self {
        Status(bits)
    }

    /// The raw status byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bit 3: the sensor has completed its self-calibration.
    pub const fn is_calibrated(self) -> bool {
        (self.0 >> CALIBRATED_BIT) & 1 == 1
    }

    /// Bit 7: a conversion is in progress.
    pub const fn is_busy(self) -> bool {
        (self.0 >> BUSY_BIT) & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_and_calibrated() {
        // 0b1000_1000
        let status = Status::new(0x88);
        assert!(status.is_calibrated());
        assert!(status.is_busy());
    }

    #[test]
    fn test_all_clear() {
        let status = Status::new(0x00);
        assert!(!status.is_calibrated());
        assert!(!status.is_busy());
    }

    #[test]
    fn test_other_bits_ignored() {
        // 0x1C as seen in real frames: calibrated, idle, reserved bits set
        let status = Status::new(0x1C);
        assert!(status.is_calibrated());
        assert!(!status.is_busy());
        assert_eq!(status.bits(), 0x1C);

        let status = Status::new(0x77);
        assert!(!status.is_calibrated());
        assert!(!status.is_busy());
    }
}
