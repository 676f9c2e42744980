//! Ballpit Core Library
//!
//! Headless simulation for an interactive 3D ball-drop playground: a rapier3d
//! physics world (floor slab + dropped balls), Bevy ECS integration that
//! copies body translations into render transforms once per fixed tick, and
//! the spawn/reset/impact policies. Rendering lives in `ballpit-app`.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod ball;
pub mod physics;
pub mod sound;

// Bevy integration
pub mod bevy;

pub use ball::{BATCH_SIZE, BallSpawn, DEFAULT_BALL_RADIUS, sample_batch};
pub use physics::{
    MAX_CATCHUP_STEPS, PHYSICS_DT, PhysicsWorld, SURFACE_FRICTION, SURFACE_RESTITUTION,
    default_gravity,
};
pub use sound::{IMPACT_AUDIBLE_SPEED, IMPACT_FULL_VOLUME_SPEED, impact_volume};
