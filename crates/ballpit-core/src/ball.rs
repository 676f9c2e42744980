//! Ball spawn parameters and batch sampling.

use rand::Rng;

/// Radius of the single ball dropped at startup.
pub const DEFAULT_BALL_RADIUS: f32 = 0.5;

/// Number of balls added per spawn-batch action.
pub const BATCH_SIZE: usize = 5;

/// Sampled radius range for batch-spawned balls, `[min, max)`.
pub const RADIUS_RANGE: (f32, f32) = (0.2, 0.5);

/// Horizontal x/z spawn range, `[-range, range)`.
pub const SPAWN_HORIZONTAL_RANGE: f32 = 1.0;

/// Base drop height; per-ball integer offsets in `[0, BATCH_SIZE)` are added
/// so no two balls of a batch start at the same height.
pub const SPAWN_BASE_HEIGHT: f32 = 2.0;

/// Retry cap for the rejection-sampled height offsets. With 5 slots and 5
/// draws rejection sampling terminates quickly in practice, but an explicit
/// cap keeps the loop bounded if `BATCH_SIZE` ever changes.
const OFFSET_RETRY_CAP: u32 = 64;

/// Spawn parameters for one ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSpawn {
    pub radius: f32,
    pub position: [f32; 3],
}

impl BallSpawn {
    /// The startup ball: full radius, dropped from the base height over the
    /// floor center.
    pub fn initial() -> Self {
        Self {
            radius: DEFAULT_BALL_RADIUS,
            position: [0.0, SPAWN_BASE_HEIGHT, 0.0],
        }
    }
}

/// Samples one batch of ball spawn parameters.
///
/// Radii are uniform in `RADIUS_RANGE`, x/z uniform in the horizontal range,
/// and the vertical offsets are a no-repeat draw from `{0..BATCH_SIZE}` so
/// the batch never spawns two balls overlapping on the drop axis.
pub fn sample_batch<R: Rng>(rng: &mut R) -> Vec<BallSpawn> {
    let mut used = [false; BATCH_SIZE];
    (0..BATCH_SIZE)
        .map(|_| {
            let offset = draw_unused_offset(rng, &mut used);
            BallSpawn {
                radius: rng.random_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
                position: [
                    rng.random_range(-SPAWN_HORIZONTAL_RANGE..SPAWN_HORIZONTAL_RANGE),
                    SPAWN_BASE_HEIGHT + offset as f32,
                    rng.random_range(-SPAWN_HORIZONTAL_RANGE..SPAWN_HORIZONTAL_RANGE),
                ],
            }
        })
        .collect()
}

/// Rejection-samples an offset not drawn before in this batch. Falls back to
/// the first free slot once the retry cap is hit, so the draw stays bounded.
fn draw_unused_offset<R: Rng>(rng: &mut R, used: &mut [bool; BATCH_SIZE]) -> usize {
    for _ in 0..OFFSET_RETRY_CAP {
        let candidate = rng.random_range(0..BATCH_SIZE);
        if !used[candidate] {
            used[candidate] = true;
            return candidate;
        }
    }
    let fallback = used.iter().position(|taken| !taken).unwrap_or(0);
    used[fallback] = true;
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn batch_has_five_balls_with_distinct_offsets() {
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let batch = sample_batch(&mut rng);
            assert_eq!(batch.len(), BATCH_SIZE);

            let mut offsets: Vec<u32> = batch
                .iter()
                .map(|spawn| (spawn.position[1] - SPAWN_BASE_HEIGHT) as u32)
                .collect();
            offsets.sort_unstable();
            assert_eq!(offsets, vec![0, 1, 2, 3, 4], "seed {seed}");
        }
    }

    #[test]
    fn batch_respects_radius_and_horizontal_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            for spawn in sample_batch(&mut rng) {
                assert!(spawn.radius >= RADIUS_RANGE.0 && spawn.radius < RADIUS_RANGE.1);
                assert!(spawn.position[0].abs() <= SPAWN_HORIZONTAL_RANGE);
                assert!(spawn.position[2].abs() <= SPAWN_HORIZONTAL_RANGE);
                assert!(spawn.position[1] >= SPAWN_BASE_HEIGHT);
            }
        }
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(sample_batch(&mut a), sample_batch(&mut b));
    }
}
