use thiserror::Error;

use vista_engine::paint::ChannelOutOfRange;

/// Errors raised by the widget layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A widget was constructed with invalid parameters.
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// No widget carries the requested label.
    #[error("element '{0}' not found")]
    NotFound(String),
    /// The clipboard could not be read.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

impl From<ChannelOutOfRange> for UiError {
    fn from(err: ChannelOutOfRange) -> Self {
        UiError::Configuration(err.to_string())
    }
}

/// Rejects opacities outside `[0, 1]` (and NaN).
pub(crate) fn check_opacity(opacity: f32) -> Result<f32, UiError> {
    if (0.0..=1.0).contains(&opacity) {
        Ok(opacity)
    } else {
        Err(UiError::Configuration(format!("opacity {opacity} outside [0, 1]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_engine::paint::Rgb;

    #[test]
    fn channel_error_becomes_configuration() {
        let err: UiError = Rgb::try_from_channels(0, 300, 0).unwrap_err().into();
        assert!(matches!(err, UiError::Configuration(_)));
    }

    #[test]
    fn opacity_bounds_are_inclusive() {
        assert_eq!(check_opacity(0.0), Ok(0.0));
        assert_eq!(check_opacity(1.0), Ok(1.0));
        assert!(check_opacity(1.01).is_err());
        assert!(check_opacity(-0.1).is_err());
        assert!(check_opacity(f32::NAN).is_err());
    }
}
