//! Linux `/dev/i2c-N` transport.

use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use linux_embedded_hal::{I2CError, I2cdev};

/// Number of a Linux I2C bus, as in `/dev/i2c-<n>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusId(pub u8);

impl Default for BusId {
    fn default() -> Self {
        BusId(1)
    }
}

impl BusId {
    /// Device node of this bus, e.g. `/dev/i2c-1`.
    pub fn device_path(self) -> String {
        format!("/dev/i2c-{}", self.0)
    }
}

/// I2C bus that opens the device node for each transaction.
///
/// The handle is dropped as soon as the transaction finishes, whether it
/// succeeded or not, so no file descriptor is held between driver calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxBus {
    bus: BusId,
}

impl LinuxBus {
    /// Creates a transport for the given bus number.
    pub fn new(bus: BusId) -> Self {
        LinuxBus { bus }
    }

    /// The bus this transport opens.
    pub fn bus(&self) -> BusId {
        self.bus
    }
}

impl ErrorType for LinuxBus {
    type Error = I2CError;
}

impl I2c<SevenBitAddress> for LinuxBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut dev = I2cdev::new(self.bus.device_path())?;
        dev.transaction(address, operations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bus() {
        assert_eq!(LinuxBus::default().bus(), BusId(1));
        assert_eq!(BusId::default().device_path(), "/dev/i2c-1");
    }

    #[test]
    fn test_device_path() {
        assert_eq!(LinuxBus::new(BusId(7)).bus().device_path(), "/dev/i2c-7");
    }
}
