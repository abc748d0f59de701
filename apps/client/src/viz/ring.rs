#![allow(dead_code)]

//! Circular progress geometry for the score rings.

use std::f64::consts::PI;

/// Default ring dimensions; score cards use the smaller variant.
pub const DEFAULT_SIZE: f64 = 120.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 8.0;
pub const SCORE_CARD_SIZE: f64 = 100.0;
pub const SCORE_CARD_STROKE_WIDTH: f64 = 6.0;

/// Stroke geometry for one progress ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub circumference: f64,
    /// Dash offset: full circumference at 0%, zero at 100%.
    pub offset: f64,
}

/// Computes the ring geometry for a percentage in [0,100].
///
/// `radius = (size - stroke_width) / 2`, `circumference = 2πr`, and the
/// drawn arc is controlled by `offset = circumference * (1 - value/100)`.
/// Exact at both boundaries and monotone decreasing in `value`.
pub fn ring_geometry(value: u32, size: f64, stroke_width: f64) -> RingGeometry {
    let radius = (size - stroke_width) / 2.0;
    let circumference = 2.0 * PI * radius;
    let offset = circumference * (1.0 - f64::from(value) / 100.0);
    RingGeometry {
        radius,
        circumference,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_zero_percent_draws_nothing() {
        let ring = ring_geometry(0, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH);
        assert!((ring.offset - ring.circumference).abs() < TOLERANCE);
    }

    #[test]
    fn test_hundred_percent_draws_full_circle() {
        let ring = ring_geometry(100, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH);
        assert!(ring.offset.abs() < TOLERANCE);
    }

    #[test]
    fn test_fifty_percent_is_half_circumference() {
        let ring = ring_geometry(50, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH);
        assert!((ring.offset - ring.circumference / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_circumference_matches_radius() {
        let ring = ring_geometry(0, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH);
        assert!((ring.radius - 56.0).abs() < TOLERANCE);
        assert!((ring.circumference - 2.0 * std::f64::consts::PI * 56.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_offset_is_monotone_decreasing_in_value() {
        let mut previous = f64::INFINITY;
        for value in 0..=100 {
            let ring = ring_geometry(value, SCORE_CARD_SIZE, SCORE_CARD_STROKE_WIDTH);
            assert!(
                ring.offset < previous,
                "offset must strictly decrease at {value}%"
            );
            previous = ring.offset;
        }
    }
}
