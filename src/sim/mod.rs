//! Simulation core
//!
//! All sim logic lives here and stays deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, consumed once at init
//! - No rendering or platform dependencies; `render` hands out plain view
//!   data for the presentation layer

pub mod ball;
pub mod geometry;
pub mod ring;
pub mod simulation;

pub use ball::{Ball, BallView};
pub use geometry::{SegmentPose, angle_in_gap, segment_poses};
pub use ring::{Ring, RingArc, RingView};
pub use simulation::{Frame, Simulation};
