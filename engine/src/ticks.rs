use std::time::Duration;

use crate::angle;
use crate::config::WheelConfig;
use crate::error::WheelError;

/// Default sampling cadence while a spin is running. The caller owns the
/// clock; the scheduler only compares consecutive samples.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy)]
pub struct TickSample {
    pub segment: usize,
    /// True when the pointer moved into a different segment since the last
    /// sample. The first sample after a reset always counts as a crossing.
    pub crossed: bool,
}

/// Detects segment-boundary crossings for auxiliary cues (tick sounds,
/// pointer flashes). Never consulted for the final result; that goes through
/// [`crate::result::resolve`] on the exact target rotation.
#[derive(Debug, Default)]
pub struct TickScheduler {
    last_segment: Option<usize>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous sample, so the next one reports a crossing.
    pub fn reset(&mut self) {
        self.last_segment = None;
    }

    pub fn sample(
        &mut self,
        rotation: f64,
        config: &WheelConfig,
        pointer_angle: f64,
    ) -> Result<TickSample, WheelError> {
        let segment = angle::segment_at(rotation, config.segment_count(), pointer_angle)?;
        let crossed = self.last_segment != Some(segment);
        self.last_segment = Some(segment);
        Ok(TickSample { segment, crossed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::POINTER_ANGLE;
    use std::f64::consts::PI;

    fn four_segments() -> WheelConfig {
        WheelConfig::new(
            "letters",
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
        )
        .unwrap()
    }

    #[test]
    fn first_sample_counts_as_crossing() {
        let config = four_segments();
        let mut ticker = TickScheduler::new();
        let sample = ticker.sample(0.0, &config, POINTER_ANGLE).unwrap();
        assert!(sample.crossed);
    }

    #[test]
    fn no_crossing_within_one_segment() {
        let config = four_segments();
        let mut ticker = TickScheduler::new();
        ticker.sample(0.0, &config, POINTER_ANGLE).unwrap();

        // still inside the same quarter turn
        let sample = ticker.sample(0.1, &config, POINTER_ANGLE).unwrap();
        assert!(!sample.crossed);
    }

    #[test]
    fn crossing_detected_at_segment_boundary() {
        let config = four_segments();
        let mut ticker = TickScheduler::new();
        let before = ticker.sample(0.0, &config, POINTER_ANGLE).unwrap();
        let after = ticker
            .sample(PI / 2.0 + 0.01, &config, POINTER_ANGLE)
            .unwrap();

        assert!(after.crossed);
        assert_ne!(before.segment, after.segment);
    }

    #[test]
    fn reset_rearms_the_crossing() {
        let config = four_segments();
        let mut ticker = TickScheduler::new();
        ticker.sample(0.2, &config, POINTER_ANGLE).unwrap();
        assert!(!ticker.sample(0.2, &config, POINTER_ANGLE).unwrap().crossed);

        ticker.reset();
        assert!(ticker.sample(0.2, &config, POINTER_ANGLE).unwrap().crossed);
    }

    #[test]
    fn empty_wheel_cannot_be_sampled() {
        let config = WheelConfig {
            name: "empty".into(),
            labels: vec![],
        };
        let mut ticker = TickScheduler::new();
        assert!(ticker.sample(0.0, &config, POINTER_ANGLE).is_err());
    }
}
