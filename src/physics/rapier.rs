//! rapier2d-backed physics world
//!
//! Zero-gravity pipeline. The ring segments are fixed bodies; the ball is a
//! CCD-enabled dynamic body so it cannot tunnel through a segment at high
//! cruise speeds.

use glam::Vec2;
use rapier2d::prelude::*;

use super::{BodyId, PhysicsWorld};

/// A zero-gravity rapier2d world implementing [`PhysicsWorld`]
pub struct RapierWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    gravity: Vector<f32>,
    handles: Vec<RigidBodyHandle>,
}

impl RapierWorld {
    pub fn new() -> Self {
        Self {
            pipeline: PhysicsPipeline::new(),
            integration_parameters: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            gravity: vector![0.0, 0.0],
            handles: Vec::new(),
        }
    }

    fn body(&self, body: BodyId) -> &RigidBody {
        &self.bodies[self.handles[body.0]]
    }

    fn register(&mut self, handle: RigidBodyHandle) -> BodyId {
        let id = BodyId(self.handles.len());
        self.handles.push(handle);
        id
    }
}

impl Default for RapierWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl PhysicsWorld for RapierWorld {
    fn add_circle(&mut self, pos: Vec2, radius: f32, restitution: f32, friction: f32) -> BodyId {
        let body = RigidBodyBuilder::dynamic()
            .translation(vector![pos.x, pos.y])
            .linear_damping(0.0)
            .ccd_enabled(true)
            .build();
        let collider = ColliderBuilder::ball(radius)
            .restitution(restitution)
            .friction(friction)
            .build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.register(handle)
    }

    fn add_static_box(
        &mut self,
        center: Vec2,
        rotation: f32,
        half_extents: Vec2,
        restitution: f32,
        friction: f32,
    ) -> BodyId {
        let body = RigidBodyBuilder::fixed()
            .translation(vector![center.x, center.y])
            .rotation(rotation)
            .build();
        let collider = ColliderBuilder::cuboid(half_extents.x, half_extents.y)
            .restitution(restitution)
            .friction(friction)
            .build();
        let handle = self.bodies.insert(body);
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        self.register(handle)
    }

    fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn position(&self, body: BodyId) -> Vec2 {
        let t = self.body(body).translation();
        Vec2::new(t.x, t.y)
    }

    fn velocity(&self, body: BodyId) -> Vec2 {
        let v = self.body(body).linvel();
        Vec2::new(v.x, v.y)
    }

    fn set_velocity(&mut self, body: BodyId, vel: Vec2) {
        let handle = self.handles[body.0];
        self.bodies[handle].set_linvel(vector![vel.x, vel.y], true);
    }

    fn body_count(&self) -> usize {
        self.handles.len()
    }
}
