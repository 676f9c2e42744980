//! Test utilities for headless Bevy integration tests.
//!
//! Provides `TestApp`, a wrapper around `bevy::app::App` that uses
//! `MinimalPlugins` + `BallpitHeadlessPlugin` for testing simulation logic
//! without a rendering or windowing backend.

use bevy::prelude::*;

use crate::bevy::components::{Ball, Floor};
use crate::bevy::events::{ResetBallsEvent, SpawnBallBatchEvent};
use crate::bevy::plugin::BallpitHeadlessPlugin;
use crate::physics::PHYSICS_DT;

/// A headless Bevy app wrapper for testing.
pub(crate) struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Create a new test app with the default seed.
    pub fn new() -> Self {
        Self::with_seed(12345)
    }

    /// Create a new test app with a specific RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(BallpitHeadlessPlugin { seed });
        // Pause virtual time so that only explicit step_physics calls advance
        // the simulation — ensures deterministic behavior.
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        // Run one update to apply Startup systems.
        app.update();
        Self { app }
    }

    /// Run a single frame update.
    pub fn update(&mut self) {
        self.app.update();
    }

    /// Advance the physics simulation by exactly `n` fixed timesteps.
    ///
    /// Uses `Time<Fixed>::accumulate_overstep` to feed time directly into the
    /// fixed-timestep accumulator, bypassing virtual time. Combined with
    /// paused virtual time this gives fully deterministic physics.
    pub fn step_physics(&mut self, n: usize) {
        let dt = std::time::Duration::from_secs_f32(PHYSICS_DT);
        for _ in 0..n {
            self.app
                .world_mut()
                .resource_mut::<Time<Fixed>>()
                .accumulate_overstep(dt);
            self.app.update();
        }
    }

    /// Request one spawn batch and run an update to process it.
    pub fn spawn_batch(&mut self) {
        self.app.world_mut().write_message(SpawnBallBatchEvent);
        self.update();
    }

    /// Request a reset and run an update to process it.
    pub fn reset(&mut self) {
        self.app.world_mut().write_message(ResetBallsEvent);
        self.update();
    }

    /// Number of ball entities currently alive.
    pub fn ball_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<Ball>>();
        query.iter(world).count()
    }

    /// Number of floor entities currently alive.
    pub fn floor_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<Floor>>();
        query.iter(world).count()
    }
}
