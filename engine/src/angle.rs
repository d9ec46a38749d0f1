use std::f64::consts::{PI, TAU};

use crate::error::WheelError;

/// Fixed pointer position: top of the wheel in y-down screen coordinates.
/// The renderer must place the pointer at this same angle, otherwise the
/// announced winner and the segment under the pointer can disagree.
pub const POINTER_ANGLE: f64 = 3.0 * PI / 2.0;

/// Wraps any angle into [0, 2π).
pub fn normalize(angle: f64) -> f64 {
    ((angle % TAU) + TAU) % TAU
}

/// Index of the segment sitting under `pointer_angle` for a wheel rotated by
/// `rotation`. The wheel turns under a fixed pointer, so the pointer is
/// rotated backward by the wheel's rotation before bucketing.
///
/// This is the single segment-index computation in the crate; rendering, tick
/// sampling and result resolution all go through it.
pub fn segment_at(
    rotation: f64,
    segment_count: usize,
    pointer_angle: f64,
) -> Result<usize, WheelError> {
    if segment_count == 0 {
        return Err(WheelError::InvalidConfiguration { segment_count });
    }

    let segment_angle = TAU / segment_count as f64;
    let offset = normalize(pointer_angle - rotation);
    Ok(((offset / segment_angle).floor() as usize) % segment_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_wraps_into_unit_circle() {
        assert_relative_eq!(normalize(0.0), 0.0);
        assert_relative_eq!(normalize(TAU), 0.0);
        assert_relative_eq!(normalize(-PI / 2.0), 3.0 * PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(normalize(5.0 * TAU + 0.25), 0.25, epsilon = 1e-9);

        for i in -50..50 {
            let a = i as f64 * 0.731;
            let n = normalize(a);
            assert!((0.0..TAU).contains(&n), "normalize({a}) = {n}");
        }
    }

    #[test]
    fn segment_index_always_in_range() {
        for count in 1..=12 {
            for i in 0..200 {
                let rotation = i as f64 * 0.37 - 20.0;
                let idx = segment_at(rotation, count, POINTER_ANGLE).unwrap();
                assert!(idx < count);
            }
        }
    }

    #[test]
    fn segment_index_periodic_in_full_turns() {
        for count in [2usize, 3, 7, 12] {
            for i in 0..50 {
                let rotation = i as f64 * 0.53;
                assert_eq!(
                    segment_at(rotation, count, POINTER_ANGLE).unwrap(),
                    segment_at(rotation + TAU, count, POINTER_ANGLE).unwrap(),
                );
            }
        }
    }

    #[test]
    fn four_segment_wheel_sign_convention() {
        // Four segments of π/2 each, pointer at the top (3π/2). A rotation of
        // exactly 3π/2 puts segment 0 under the pointer; rotating the wheel
        // forward another quarter turn moves the pointer backward to the last
        // segment.
        assert_eq!(segment_at(3.0 * PI / 2.0, 4, POINTER_ANGLE).unwrap(), 0);
        assert_eq!(
            segment_at(3.0 * PI / 2.0 + PI / 2.0, 4, POINTER_ANGLE).unwrap(),
            3
        );
    }

    #[test]
    fn zero_segments_is_rejected() {
        assert_eq!(
            segment_at(1.0, 0, POINTER_ANGLE),
            Err(WheelError::InvalidConfiguration { segment_count: 0 })
        );
    }
}
