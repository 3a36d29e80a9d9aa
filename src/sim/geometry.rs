//! Segmented ring geometry
//!
//! The ring boundary is approximated by N oriented boxes placed around a
//! circle, skipping the ones whose center angle falls inside the gap. Two
//! deliberate oversizings keep the boundary tight:
//! - tangential width is 2x the natural arc length, so neighbors overlap
//!   100% and the ball can never catch on a seam
//! - radial height is the full ring radius, so the ball can never tunnel
//!   past the inner face; only the rendered stroke is `thickness` deep
//!
//! Everything here is pure: same inputs, same poses.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::{normalize_angle, polar_to_cartesian};

/// Pose of one static ring segment body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPose {
    /// Body center in canvas space
    pub center: Vec2,
    /// Rotation in radians (tangential, perpendicular to the radius vector)
    pub rotation: f32,
    /// Half width (tangential) and half height (radial)
    pub half_extents: Vec2,
}

/// Wrap-aware gap containment test
///
/// The gap is the half-open interval [gap_start, gap_start + gap_size) taken
/// mod 2π: inclusive at the start edge, exclusive at the end edge. A zero
/// gap contains nothing. When the interval crosses 0/2π the test splits into
/// the two unwrapped halves.
pub fn angle_in_gap(angle: f32, gap_start: f32, gap_size: f32) -> bool {
    if gap_size <= 0.0 {
        return false;
    }

    let angle = normalize_angle(angle);
    let start = normalize_angle(gap_start);
    let end = start + gap_size;

    if end <= TAU {
        angle >= start && angle < end
    } else {
        angle >= start || angle < end - TAU
    }
}

/// Generate the segment poses for a ring with one gap
///
/// Segment i sits at angle (2π/N)·i and is skipped when that angle is in
/// the gap. The body center is pushed out to
/// `radius + height/2 - thickness/2` so the inner face of the deep physics
/// box lines up with the inner edge of the visually drawn stroke.
pub fn segment_poses(
    center: Vec2,
    radius: f32,
    thickness: f32,
    segments: u32,
    gap_start: f32,
    gap_size: f32,
) -> Vec<SegmentPose> {
    let arc_length = (TAU * radius) / segments as f32;
    let width = arc_length * 2.0;
    let height = radius;
    let body_radius = radius + height / 2.0 - thickness / 2.0;
    let half_extents = Vec2::new(width / 2.0, height / 2.0);

    (0..segments)
        .filter_map(|i| {
            let angle = (TAU / segments as f32) * i as f32;
            if angle_in_gap(angle, gap_start, gap_size) {
                return None;
            }
            Some(SegmentPose {
                center: center + polar_to_cartesian(body_radius, angle),
                rotation: angle + FRAC_PI_2,
                half_extents,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    #[test]
    fn test_zero_gap_contains_nothing() {
        for i in 0..48 {
            let angle = (TAU / 48.0) * i as f32;
            assert!(!angle_in_gap(angle, 1.0, 0.0));
        }
        let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, 48, 1.0, 0.0);
        assert_eq!(poses.len(), 48);
    }

    #[test]
    fn test_gap_boundaries() {
        // Inclusive lower edge, exclusive upper edge
        let start = 1.0;
        let size = 0.5;
        assert!(angle_in_gap(start, start, size));
        assert!(angle_in_gap(start + 0.25, start, size));
        assert!(!angle_in_gap(start + size, start, size));
        assert!(!angle_in_gap(start - 0.01, start, size));
    }

    #[test]
    fn test_gap_wraps_past_full_turn() {
        // Gap from 350° spanning 45° wraps through 0°
        let start = 350.0_f32.to_radians();
        let size = 45.0_f32.to_radians();
        assert!(angle_in_gap(355.0_f32.to_radians(), start, size));
        assert!(angle_in_gap(10.0_f32.to_radians(), start, size));
        assert!(!angle_in_gap(30.0_f32.to_radians(), start, size));
    }

    #[test]
    fn test_negative_inputs_normalize() {
        // -10° is the same direction as 350°
        let size = 45.0_f32.to_radians();
        assert!(angle_in_gap(-5.0_f32.to_radians(), -10.0_f32.to_radians(), size));
        assert!(angle_in_gap(10.0_f32.to_radians(), -10.0_f32.to_radians(), size));
        assert!(!angle_in_gap(40.0_f32.to_radians(), -10.0_f32.to_radians(), size));
    }

    #[test]
    fn test_segment_pose_dimensions() {
        let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, 48, 0.0, 0.0);
        let expected_width = 2.0 * (TAU * 100.0 / 48.0);
        for pose in &poses {
            assert!((pose.half_extents.x * 2.0 - expected_width).abs() < 1e-3);
            assert!((pose.half_extents.y * 2.0 - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_segment_pose_placement() {
        let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, 48, 0.0, 0.0);
        // Body center ring: radius + height/2 - thickness/2 = 100 + 50 - 4
        for pose in &poses {
            assert!((pose.center.length() - 146.0).abs() < 1e-2);
        }
        // First segment sits at angle 0, rotated tangentially
        assert!((poses[0].center.x - 146.0).abs() < 1e-2);
        assert!(poses[0].center.y.abs() < 1e-2);
        assert!((poses[0].rotation - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_segment_poses_offset_center() {
        let center = Vec2::new(540.0, 960.0);
        let poses = segment_poses(center, 100.0, 8.0, 48, 0.0, 0.0);
        for pose in &poses {
            assert!(((pose.center - center).length() - 146.0).abs() < 1e-2);
        }
    }

    #[test]
    fn test_gap_excludes_exactly_covered_segments() {
        // 48 segments step 7.5°; a 40° gap from 0 covers 0°..=37.5°,
        // six segments excluded
        let size = 40.0_f32.to_radians();
        let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, 48, 0.0, size);
        assert_eq!(poses.len(), 48 - 6);
    }

    #[test]
    fn test_gap_at_least_one_segment_when_wide_enough() {
        let segments = 48;
        let step = TAU / segments as f32;
        for start in [0.0, 0.3, PI, 5.9] {
            let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, segments, start, step * 1.01);
            assert!(
                poses.len() < segments as usize,
                "gap of one step starting at {start} excluded nothing"
            );
        }
    }

    #[test]
    fn test_generator_is_deterministic() {
        let a = segment_poses(Vec2::new(3.0, 4.0), 120.0, 10.0, 32, 2.2, 0.9);
        let b = segment_poses(Vec2::new(3.0, 4.0), 120.0, 10.0, 32, 2.2, 0.9);
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn prop_angles_inside_gap_are_in_gap(
            start in 0.0f32..TAU,
            size in 0.1f32..6.0,
            frac in 0.0f32..0.95,
        ) {
            let angle = start + frac * size;
            prop_assert!(angle_in_gap(angle, start, size));
        }

        #[test]
        fn prop_angles_outside_gap_are_not_in_gap(
            start in 0.0f32..TAU,
            size in 0.1f32..6.0,
            frac in 0.05f32..0.95,
        ) {
            // Walk the complement interval [start+size, start+2π)
            let angle = start + size + frac * (TAU - size);
            prop_assert!(!angle_in_gap(angle, start, size));
        }

        #[test]
        fn prop_zero_gap_never_hits(angle in -10.0f32..10.0, start in -10.0f32..10.0) {
            prop_assert!(!angle_in_gap(angle, start, 0.0));
        }

        #[test]
        fn prop_generated_count_matches_exclusions(
            start in 0.0f32..TAU,
            size in 0.0f32..6.0,
            segments in 3u32..96,
        ) {
            let excluded = (0..segments)
                .filter(|&i| angle_in_gap((TAU / segments as f32) * i as f32, start, size))
                .count();
            let poses = segment_poses(Vec2::ZERO, 100.0, 8.0, segments, start, size);
            prop_assert_eq!(poses.len(), segments as usize - excluded);
        }
    }
}
