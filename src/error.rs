use core::fmt;

/// Possible errors from the AHTx0 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Error from the I2C bus outside of a command write (status or data read).
    Transport(E),
    /// The initialize (calibrate) command could not be written.
    InitializationFailed(E),
    /// The trigger-measurement command could not be written.
    MeasurementFailed(E),
    /// The sensor did not report ready within the configured number of polls.
    Timeout,
}

impl<E> From<E> for Error<E> {
    fn from(value: E) -> Self {
        Self::Transport(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "i2c transport error: {e:?}"),
            Self::InitializationFailed(e) => {
                write!(f, "failed to initialize the AHTx0 sensor: {e:?}")
            }
            Self::MeasurementFailed(e) => {
                write!(f, "failed to measure with the AHTx0 sensor: {e:?}")
            }
            Self::Timeout => f.write_str("timed out waiting for the AHTx0 sensor"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;

    #[test]
    fn test_bus_error_maps_to_transport() {
        let err: Error<ErrorKind> = ErrorKind::Other.into();
        assert_eq!(err, Error::Transport(ErrorKind::Other));
    }

    #[test]
    fn test_display_names_failed_phase() {
        let err = Error::InitializationFailed(ErrorKind::Bus);
        assert_eq!(err.to_string(), "failed to initialize the AHTx0 sensor: Bus");
        assert_eq!(
            Error::<ErrorKind>::Timeout.to_string(),
            "timed out waiting for the AHTx0 sensor"
        );
    }
}
