//! Ring Bounce - a ball cruising at constant speed inside a segmented ring
//!
//! Core modules:
//! - `sim`: Simulation core (ring geometry, ball, fixed-timestep loop)
//! - `physics`: Narrow rigid-body capability trait + rapier2d backend
//! - `config`: Data-driven tuning for canvas, ball, and ring

pub mod config;
pub mod physics;
pub mod sim;

pub use config::Config;
pub use sim::{Frame, Simulation};

use glam::Vec2;

/// Simulation constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one step per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
}

/// Normalize an angle into [0, 2π)
///
/// All gap containment math works in this range; plain `%` leaves negative
/// results for negative inputs, so those are corrected by a full turn.
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let a = angle % TAU;
    if a < 0.0 { a + TAU } else { a }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
