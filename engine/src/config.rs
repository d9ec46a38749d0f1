use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::WheelError;

/// Ordered segment labels. Label order defines angular order: segment 0
/// starts at angle 0 and each segment spans 2π/N in the increasing-angle
/// direction. Loaded from JSON wheel files or built in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WheelConfig {
    pub name: String,
    pub labels: Vec<String>,
}

impl WheelConfig {
    pub fn new(name: impl Into<String>, labels: Vec<String>) -> Result<Self, WheelError> {
        if labels.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        Ok(Self {
            name: name.into(),
            labels,
        })
    }

    pub fn segment_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Angular width of one segment. Only meaningful for a non-empty wheel.
    pub fn segment_angle(&self) -> f64 {
        TAU / self.labels.len() as f64
    }

    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Grows with placeholder labels or shrinks from the end until the wheel
    /// has exactly `count` segments. Counts below 1 are treated as 1.
    pub fn set_segment_count(&mut self, count: usize) {
        let count = count.max(1);
        while self.labels.len() < count {
            self.labels.push(format!("Option {}", self.labels.len() + 1));
        }
        self.labels.truncate(count);
    }
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            name: "Classic".to_string(),
            labels: (1..=6).map(|i| format!("Option {i}")).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn rejects_empty_label_list() {
        assert_eq!(
            WheelConfig::new("empty", vec![]).unwrap_err(),
            WheelError::EmptyWheel
        );
    }

    #[test]
    fn segment_angle_splits_full_circle() {
        let config = WheelConfig::new("quarters", vec!["A".into(), "B".into(), "C".into(), "D".into()]).unwrap();
        assert_relative_eq!(config.segment_angle(), PI / 2.0);
    }

    #[test]
    fn segment_angle_is_the_bucketing_width() {
        // Rotating the wheel backward by one segment_angle moves the pointer
        // forward exactly one segment, so the rendered wedge width and the
        // resolver's buckets stay in lockstep.
        let config = WheelConfig::new("quarters", vec!["A".into(), "B".into(), "C".into(), "D".into()]).unwrap();
        let width = config.segment_angle();
        let count = config.segment_count();

        let base = angle::segment_at(0.0, count, angle::POINTER_ANGLE).unwrap();
        for step in 0..2 * count {
            let rotation = -(step as f64) * width;
            let index = angle::segment_at(rotation, count, angle::POINTER_ANGLE).unwrap();
            assert_eq!(index, (base + step) % count);
        }
    }

    #[test]
    fn resizing_pads_and_truncates() {
        let mut config = WheelConfig::default();
        config.set_segment_count(8);
        assert_eq!(config.segment_count(), 8);
        assert_eq!(config.label(7), Some("Option 8"));

        config.set_segment_count(2);
        assert_eq!(config.labels, vec!["Option 1", "Option 2"]);

        // never shrinks below one segment
        config.set_segment_count(0);
        assert_eq!(config.segment_count(), 1);
    }

    #[test]
    fn loads_from_json() {
        let json = r#"{ "name": "Lunch", "labels": ["Pizza", "Sushi"] }"#;
        let config: WheelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.name, "Lunch");
        assert_eq!(config.segment_count(), 2);
    }
}
