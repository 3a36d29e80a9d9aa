//! Ring boundary
//!
//! Owns the gap interval and the static segment bodies, and tells the
//! presentation layer which arc to stroke: a full circle when the ring is
//! closed, otherwise the complement of the gap.

use glam::Vec2;
use std::f32::consts::TAU;

use crate::config::{RingConfig, color_or_white};
use crate::physics::{BodyId, PhysicsWorld};
use crate::sim::geometry::{angle_in_gap, segment_poses};

/// Segment material: near-perfect bounce, no surface friction
const SEGMENT_RESTITUTION: f32 = 1.0;
const SEGMENT_FRICTION: f32 = 0.0;

/// Arc the presentation layer should draw for a ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RingArc {
    /// No gap: stroke a full circle
    Closed,
    /// Open stroke from `start` to `end` (end > start, may exceed 2π)
    Open { start: f32, end: f32 },
}

/// The segmented ring boundary
///
/// Gap parameters are fixed at construction; segment bodies are registered
/// once via [`Ring::create`] and never move.
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub color: u32,
    pub segments: u32,
    pub gap_start: f32,
    pub gap_size: f32,
    bodies: Vec<BodyId>,
}

impl Ring {
    /// Build a ring from config with the given gap start angle
    ///
    /// The configured gap size is in degrees and converted here, once.
    pub fn new(center: Vec2, config: &RingConfig, gap_start: f32) -> Self {
        Self {
            center,
            radius: config.inner_radius,
            thickness: config.thickness,
            color: color_or_white(&config.color),
            segments: config.segments,
            gap_start,
            gap_size: config.gap_size_degrees.to_radians(),
            bodies: Vec::new(),
        }
    }

    /// Register one static box per non-gap segment with the physics world
    pub fn create<W: PhysicsWorld>(&mut self, world: &mut W) {
        let poses = segment_poses(
            self.center,
            self.radius,
            self.thickness,
            self.segments,
            self.gap_start,
            self.gap_size,
        );
        self.bodies = poses
            .iter()
            .map(|pose| {
                world.add_static_box(
                    pose.center,
                    pose.rotation,
                    pose.half_extents,
                    SEGMENT_RESTITUTION,
                    SEGMENT_FRICTION,
                )
            })
            .collect();
        log::debug!(
            "ring created: {} of {} segments, gap [{:.3}, {:.3})",
            self.bodies.len(),
            self.segments,
            self.gap_start,
            self.gap_start + self.gap_size,
        );
    }

    /// Whether an angle falls inside the gap interval
    pub fn is_in_gap(&self, angle: f32) -> bool {
        angle_in_gap(angle, self.gap_start, self.gap_size)
    }

    /// Number of segment bodies actually created
    pub fn segment_count(&self) -> usize {
        self.bodies.len()
    }

    /// The visible arc: everything except the gap
    pub fn arc(&self) -> RingArc {
        if self.gap_size <= 0.0 {
            RingArc::Closed
        } else {
            RingArc::Open {
                start: self.gap_start + self.gap_size,
                end: self.gap_start + TAU,
            }
        }
    }

    /// Snapshot for the presentation layer
    pub fn view(&self) -> RingView {
        RingView {
            center: self.center,
            radius: self.radius,
            thickness: self.thickness,
            color: self.color,
            arc: self.arc(),
        }
    }
}

/// Per-frame ring data handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingView {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    pub color: u32,
    pub arc: RingArc,
}
