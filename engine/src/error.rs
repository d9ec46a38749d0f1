use std::fmt;

/// Errors reported by the wheel engine. All of them are local, recoverable
/// conditions; none corrupts the current spin state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelError {
    /// A spin was requested while one is already running. The request is
    /// rejected, not queued.
    AlreadySpinning,
    /// The wheel has no segments, so there is nothing to land on.
    EmptyWheel,
    /// Segment count outside what the angle math accepts.
    InvalidConfiguration { segment_count: usize },
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadySpinning => write!(f, "wheel is already spinning"),
            Self::EmptyWheel => write!(f, "wheel has no segments"),
            Self::InvalidConfiguration { segment_count } => {
                write!(f, "invalid configuration: {segment_count} segments")
            }
        }
    }
}

impl std::error::Error for WheelError {}
