//! Spawn and reset systems.
//!
//! Every ball is one ECS entity paired with one rapier body; the pair is
//! created in a single system call and removed in a single system call, so
//! ECS membership always implies physics membership.

use bevy::prelude::*;
use rapier3d::prelude::Vector;
use tracing::info;

use crate::ball::{self, BallSpawn};
use crate::bevy::components::{Ball, Floor};
use crate::bevy::events::{ResetBallsEvent, SpawnBallBatchEvent};
use crate::bevy::physics_plugin::{PhysicsBody, PhysicsWorldRes};
use crate::bevy::resources::SpawnRng;
use crate::physics::{self, FLOOR_CENTER_Y};

/// Startup system: the static floor and the single initial ball.
pub fn setup_scene(mut commands: Commands, mut physics: ResMut<PhysicsWorldRes>) {
    let (mut body, collider) = physics::floor_body();
    let entity = commands
        .spawn((Floor, Transform::from_xyz(0.0, FLOOR_CENTER_Y, 0.0)))
        .id();
    body.user_data = u128::from(entity.to_bits());
    let handle = physics.world.add_rigid_body(body);
    physics.world.add_collider(collider, handle);
    commands.entity(entity).insert(PhysicsBody(handle));

    spawn_ball_at(&mut commands, &mut physics, BallSpawn::initial());
}

/// System to handle spawn-batch requests.
pub fn handle_spawn_batch(
    mut commands: Commands,
    mut events: MessageReader<SpawnBallBatchEvent>,
    mut physics: ResMut<PhysicsWorldRes>,
    mut rng: ResMut<SpawnRng>,
) {
    for _ in events.read() {
        let batch = ball::sample_batch(&mut rng.rng);
        info!("spawning batch of {} balls", batch.len());
        for spawn in batch {
            spawn_ball_at(&mut commands, &mut physics, spawn);
        }
    }
}

/// System to handle reset requests.
///
/// Removes every ball's body from the physics world and despawns its entity.
/// The floor stays. A reset with no balls present is a no-op.
pub fn handle_reset(
    mut commands: Commands,
    mut events: MessageReader<ResetBallsEvent>,
    mut physics: ResMut<PhysicsWorldRes>,
    balls: Query<(Entity, &PhysicsBody), With<Ball>>,
) {
    // Resets are idempotent within a frame; collapsing the queue to one pass
    // keeps a doubled request from re-removing the same bodies and despawns.
    if events.read().last().is_none() {
        return;
    }
    let count = balls.iter().count();
    if count > 0 {
        info!("resetting {count} balls");
    }
    for (entity, body) in balls.iter() {
        physics.world.remove_rigid_body(body.0);
        commands.entity(entity).despawn();
    }
}

/// Spawns one ball entity with its paired rigid body.
pub fn spawn_ball_at(
    commands: &mut Commands,
    physics: &mut PhysicsWorldRes,
    spawn: BallSpawn,
) -> Entity {
    let [x, y, z] = spawn.position;
    let entity = commands
        .spawn((
            Ball::new(spawn.radius),
            Transform::from_xyz(x, y, z).with_scale(Vec3::splat(spawn.radius)),
        ))
        .id();

    let (mut body, collider) = physics::ball_body(spawn.radius, Vector::new(x, y, z));
    body.user_data = u128::from(entity.to_bits());
    let handle = physics.world.add_rigid_body(body);
    physics.world.add_collider(collider, handle);
    commands.entity(entity).insert(PhysicsBody(handle));

    entity
}
