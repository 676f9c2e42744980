//! Rapier3D physics integration for Bevy.
//!
//! Direct Rapier integration via [`PhysicsWorld`] instead of `bevy_rapier3d`:
//! the whole body set lives in one owned resource with explicit
//! entity-handle mapping through `user_data`, and the step/sync phases are
//! plain chained systems in `FixedUpdate`.

use bevy::prelude::*;
use rapier3d::prelude::*;

use crate::bevy::components::Ball;
use crate::bevy::events::BallImpactEvent;
use crate::physics::{ContactImpact, PhysicsWorld};

// ============================================================================
// Resources
// ============================================================================

/// Bevy resource wrapping [`PhysicsWorld`] for direct Rapier access.
#[derive(Resource, Default)]
pub struct PhysicsWorldRes {
    pub world: PhysicsWorld,
    /// Impacts collected during the last physics step.
    impacts: Vec<ContactImpact>,
}

impl PhysicsWorldRes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the impacts from the last step and clears the buffer.
    pub fn drain_impacts(&mut self) -> Vec<ContactImpact> {
        std::mem::take(&mut self.impacts)
    }
}

// ============================================================================
// Components
// ============================================================================

/// Entity ↔ rigid-body mapping component.
#[derive(Component, Debug, Clone, Copy)]
pub struct PhysicsBody(pub RigidBodyHandle);

// ============================================================================
// System sets
// ============================================================================

/// Phases of one fixed tick. Step and writeback are disjoint sequential
/// phases, so impact handling can never interleave with the transform copy.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    /// Run the physics simulation step.
    Step,
    /// Sync body translations back to Bevy transforms and publish impacts.
    SyncFromPhysics,
}

// ============================================================================
// Systems
// ============================================================================

/// Runs one fixed physics step and buffers the started contacts.
pub fn run_physics_step(mut physics: ResMut<PhysicsWorldRes>) {
    let impacts = physics.world.step();
    physics.impacts = impacts;
}

/// Copies each dynamic body's translation into its entity `Transform`.
///
/// Rotation is deliberately not copied: the dynamic bodies are spheres, so
/// their orientation is visually irrelevant.
pub fn sync_from_physics(
    physics: Res<PhysicsWorldRes>,
    mut bodies: Query<(&PhysicsBody, &mut Transform)>,
) {
    for (body_comp, mut transform) in bodies.iter_mut() {
        if let Some(body) = physics.world.get_rigid_body(body_comp.0) {
            if body.is_dynamic() {
                let pos = body.translation();
                transform.translation = Vec3::new(pos.x, pos.y, pos.z);
            }
        }
    }
}

/// Publishes the buffered impacts as [`BallImpactEvent`] messages.
///
/// One message per ball participant: a ball-ball contact reports both
/// entities, a ball-floor contact reports only the ball.
pub fn publish_impacts(
    mut physics: ResMut<PhysicsWorldRes>,
    balls: Query<(), With<Ball>>,
    mut writer: MessageWriter<BallImpactEvent>,
) {
    for impact in physics.drain_impacts() {
        for collider in [impact.collider1, impact.collider2] {
            let Some(entity) = collider_to_entity(&physics.world, collider) else {
                continue;
            };
            if balls.contains(entity) {
                writer.write(BallImpactEvent {
                    entity,
                    impact_speed: impact.impact_speed,
                });
            }
        }
    }
}

// ============================================================================
// Helper: ColliderHandle → Entity via user_data
// ============================================================================

/// Maps a Rapier `ColliderHandle` to a Bevy `Entity` via the `user_data`
/// stored on the collider's parent body.
fn collider_to_entity(world: &PhysicsWorld, handle: ColliderHandle) -> Option<Entity> {
    let collider = world.collider_set.get(handle)?;
    let parent = collider.parent()?;
    let user_data = world.rigid_body_set.get(parent)?.user_data;
    if user_data == 0 {
        return None;
    }
    Some(Entity::from_bits(user_data as u64))
}

// ============================================================================
// Plugin
// ============================================================================

/// Physics plugin wiring step → writeback into `FixedUpdate`.
pub struct BallPhysicsPlugin;

impl Plugin for BallPhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(PhysicsWorldRes::new());

        app.add_message::<BallImpactEvent>();

        app.configure_sets(
            FixedUpdate,
            (PhysicsSet::Step, PhysicsSet::SyncFromPhysics).chain(),
        );

        app.add_systems(FixedUpdate, run_physics_step.in_set(PhysicsSet::Step));
        app.add_systems(
            FixedUpdate,
            (sync_from_physics, publish_impacts)
                .chain()
                .in_set(PhysicsSet::SyncFromPhysics),
        );
    }
}
