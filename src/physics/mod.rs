//! Rigid-body capability interface
//!
//! The sim only needs a handful of operations from a physics engine: create
//! a dynamic circle, create static oriented boxes, advance one fixed
//! timestep, and read/write body position and velocity. Keeping that surface
//! behind a trait lets the geometry and renormalization logic run against a
//! stub world in unit tests while the demo runs the rapier backend.

pub mod rapier;

pub use rapier::RapierWorld;

use glam::Vec2;

/// Opaque handle to a body registered with a [`PhysicsWorld`]
///
/// Handles are only meaningful with the world that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub(crate) usize);

/// The narrow slice of a rigid-body engine the sim consumes
///
/// Implementations supply a zero-gravity world; gravity never varies.
pub trait PhysicsWorld {
    /// Register a dynamic circular body with zero air damping
    fn add_circle(&mut self, pos: Vec2, radius: f32, restitution: f32, friction: f32) -> BodyId;

    /// Register an immovable oriented box (rotation in radians)
    fn add_static_box(
        &mut self,
        center: Vec2,
        rotation: f32,
        half_extents: Vec2,
        restitution: f32,
        friction: f32,
    ) -> BodyId;

    /// Advance the world by one fixed timestep: contacts + integration
    fn step(&mut self, dt: f32);

    /// Current position of a body's center
    fn position(&self, body: BodyId) -> Vec2;

    /// Current linear velocity of a body
    fn velocity(&self, body: BodyId) -> Vec2;

    /// Overwrite a body's linear velocity (init and renormalization)
    fn set_velocity(&mut self, body: BodyId, vel: Vec2);

    /// Number of registered bodies
    fn body_count(&self) -> usize;
}

#[cfg(test)]
pub(crate) mod stub {
    //! Solver-free world for unit tests: dynamic bodies integrate in a
    //! straight line, statics never move, no contacts are resolved. A
    //! per-step speed scale stands in for restitution/friction drift.

    use super::{BodyId, PhysicsWorld};
    use glam::Vec2;

    struct StubBody {
        pos: Vec2,
        vel: Vec2,
        dynamic: bool,
    }

    pub(crate) struct StubWorld {
        bodies: Vec<StubBody>,
        /// Multiplied into every dynamic velocity each step
        pub(crate) speed_scale: f32,
    }

    impl StubWorld {
        pub(crate) fn new() -> Self {
            Self {
                bodies: Vec::new(),
                speed_scale: 1.0,
            }
        }
    }

    impl PhysicsWorld for StubWorld {
        fn add_circle(&mut self, pos: Vec2, _radius: f32, _rest: f32, _fric: f32) -> BodyId {
            self.bodies.push(StubBody {
                pos,
                vel: Vec2::ZERO,
                dynamic: true,
            });
            BodyId(self.bodies.len() - 1)
        }

        fn add_static_box(
            &mut self,
            center: Vec2,
            _rotation: f32,
            _half_extents: Vec2,
            _rest: f32,
            _fric: f32,
        ) -> BodyId {
            self.bodies.push(StubBody {
                pos: center,
                vel: Vec2::ZERO,
                dynamic: false,
            });
            BodyId(self.bodies.len() - 1)
        }

        fn step(&mut self, dt: f32) {
            for body in self.bodies.iter_mut().filter(|b| b.dynamic) {
                body.vel *= self.speed_scale;
                body.pos += body.vel * dt;
            }
        }

        fn position(&self, body: BodyId) -> Vec2 {
            self.bodies[body.0].pos
        }

        fn velocity(&self, body: BodyId) -> Vec2 {
            self.bodies[body.0].vel
        }

        fn set_velocity(&mut self, body: BodyId, vel: Vec2) {
            self.bodies[body.0].vel = vel;
        }

        fn body_count(&self) -> usize {
            self.bodies.len()
        }
    }
}
