//! ECS resources for the ball playground.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG resource driving spawn-batch sampling.
///
/// Seeding makes batch layouts reproducible in headless tests.
#[derive(Resource)]
pub struct SpawnRng {
    pub rng: ChaCha8Rng,
}

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SpawnRng {
    fn default() -> Self {
        Self::new(12345)
    }
}
