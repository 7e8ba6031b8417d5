use crate::status::Status;

/// Full scale of the 20-bit temperature and humidity fields (2^20).
const FULL_SCALE: f32 = 1_048_576.0;

/// Reading decoded from an AHTx0 measurement.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Converts raw 20-bit sensor values into physical units.
    ///
    /// No clamping is applied; values outside the datasheet range are
    /// passed through unchanged.
    pub fn from_raw(temperature_raw: u32, humidity_raw: u32) -> Self {
        Reading {
            temperature: temperature_raw as f32 / FULL_SCALE * 200.0 - 50.0,
            relative_humidity: humidity_raw as f32 * 100.0 / FULL_SCALE,
        }
    }
}

/// The 7 bytes returned after a measurement.
///
/// Byte 0 is the status byte, bytes 1..=3 carry humidity and bytes 3..=5
/// carry temperature, with byte 3 split by nibble. Byte 6 is a CRC which
/// the sensor sends but this driver does not check.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawFrame(pub [u8; RawFrame::LEN]);

impl RawFrame {
    /// Number of bytes read back for a measurement.
    pub const LEN: usize = 7;

    /// Status byte captured together with the data.
    pub fn status(&self) -> Status {
        Status::new(self.0[0])
    }

    /// Raw 20-bit temperature: low nibble of byte 3, then bytes 4 and 5.
    pub fn temperature_raw(&self) -> u32 {
        let [_, _, _, split, hi, lo, _] = self.0;
        ((split as u32 & 0x0F) << 16) | ((hi as u32) << 8) | lo as u32
    }

    /// Raw humidity: bytes 1 and 2 shifted above the high nibble of byte 3.
    pub fn humidity_raw(&self) -> u32 {
        let [_, hi, mid, split, _, _, _] = self.0;
        ((split as u32 & 0xF0) << 4) | ((hi as u32) << 12) | ((mid as u32) << 4)
    }

    /// Decodes the frame into physical units.
    pub fn reading(&self) -> Reading {
        Reading::from_raw(self.temperature_raw(), self.humidity_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_scale_frame() {
        let frame = RawFrame([0x1C, 0x80, 0x00, 0x08, 0x00, 0x00, 0x00]);

        assert_eq!(frame.temperature_raw(), 0x08_0000);
        assert_eq!(frame.humidity_raw(), 0x8_0000);
        assert_eq!(
            frame.reading(),
            Reading {
                temperature: 50.0,
                relative_humidity: 50.0,
            }
        );
    }

    #[test]
    fn test_from_raw_boundaries() {
        let low = Reading::from_raw(0, 0);
        assert_eq!(low.temperature, -50.0);
        assert_eq!(low.relative_humidity, 0.0);

        let high = Reading::from_raw(1 << 20, 1 << 20);
        assert_eq!(high.temperature, 150.0);
        assert_eq!(high.relative_humidity, 100.0);
    }

    #[test]
    fn test_nibble_split() {
        // Byte 3 = 0xA5: high nibble belongs to humidity, low nibble to temperature
        let frame = RawFrame([0x00, 0x00, 0x00, 0xA5, 0x12, 0x34, 0xFF]);

        assert_eq!(frame.temperature_raw(), 0x05_1234);
        assert_eq!(frame.humidity_raw(), 0xA00);
    }

    #[test]
    fn test_decode_is_deterministic() {
        // Captured from a real AHT20
        let frame = RawFrame([0x1C, 0x65, 0xB4, 0x25, 0xCD, 0x26, 0xC6]);

        let first = frame.reading();
        assert_eq!(first, frame.reading());
        assert_eq!(first, RawFrame(frame.0).reading());
        assert!(first.temperature > 20.0 && first.temperature < 30.0);
    }

    #[test]
    fn test_status_byte() {
        let frame = RawFrame([0x98, 0, 0, 0, 0, 0, 0]);
        assert!(frame.status().is_busy());
        assert!(frame.status().is_calibrated());
    }
}
