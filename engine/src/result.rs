use crate::angle;
use crate::config::WheelConfig;
use crate::error::WheelError;

/// The segment a completed spin landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinOutcome {
    pub index: usize,
}

/// Maps a final rotation to the winning segment. Pure and idempotent: the
/// same rotation and configuration always name the same winner. The caller
/// invokes this once per spin, on the frame that reported `done`.
pub fn resolve(
    final_rotation: f64,
    config: &WheelConfig,
    pointer_angle: f64,
) -> Result<SpinOutcome, WheelError> {
    if config.is_empty() {
        return Err(WheelError::EmptyWheel);
    }

    let index = angle::segment_at(final_rotation, config.segment_count(), pointer_angle)?;
    Ok(SpinOutcome { index })
}
