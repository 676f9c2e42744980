//! Bevy plugin for the ball playground.
//!
//! `BallpitHeadlessPlugin` contains all simulation logic without rendering or
//! window dependencies. Use it with `MinimalPlugins` to run the ECS systems
//! in tests without a windowing or rendering backend; `ballpit-app` adds the
//! rendering half on top.

use std::time::Duration;

use bevy::prelude::*;

use crate::bevy::events::{ResetBallsEvent, SpawnBallBatchEvent};
use crate::bevy::physics_plugin::BallPhysicsPlugin;
use crate::bevy::resources::SpawnRng;
use crate::bevy::systems;
use crate::physics::{MAX_CATCHUP_STEPS, PHYSICS_DT};

/// Headless plugin: physics stepping, transform sync, spawn/reset handling.
pub struct BallpitHeadlessPlugin {
    pub seed: u64,
}

impl Default for BallpitHeadlessPlugin {
    fn default() -> Self {
        Self { seed: 12345 }
    }
}

impl Plugin for BallpitHeadlessPlugin {
    fn build(&self, app: &mut App) {
        // Fixed 1/60s stepping; long real frames run at most MAX_CATCHUP_STEPS
        // fixed steps because the virtual clock clamps its per-frame delta.
        app.insert_resource(Time::<Fixed>::from_seconds(f64::from(PHYSICS_DT)));
        app.insert_resource(Time::<Virtual>::from_max_delta(Duration::from_secs_f32(
            PHYSICS_DT * MAX_CATCHUP_STEPS as f32,
        )));

        app.add_plugins(BallPhysicsPlugin);

        app.insert_resource(SpawnRng::new(self.seed));

        app.add_message::<SpawnBallBatchEvent>()
            .add_message::<ResetBallsEvent>();

        app.add_systems(Startup, systems::setup_scene);
        app.add_systems(
            Update,
            (systems::handle_spawn_batch, systems::handle_reset).chain(),
        );
    }
}
