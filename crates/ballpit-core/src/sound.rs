//! Impact-sound volume policy.
//!
//! Kept separate from playback so the mapping is testable without an audio
//! device. Speeds below the audibility threshold stay silent, which keeps
//! resting contacts from spamming the clip.

/// Impacts slower than this (m/s along the contact normal) make no sound.
pub const IMPACT_AUDIBLE_SPEED: f32 = 0.5;

/// Impacts at or above this speed play at full volume.
pub const IMPACT_FULL_VOLUME_SPEED: f32 = 5.0;

/// Maps an impact speed to a playback volume.
///
/// Returns `None` below the audibility threshold; otherwise volume scales
/// linearly with speed and clamps to 1.0.
pub fn impact_volume(impact_speed: f32) -> Option<f32> {
    if impact_speed < IMPACT_AUDIBLE_SPEED {
        return None;
    }
    Some((impact_speed / IMPACT_FULL_VOLUME_SPEED).min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_below_threshold() {
        assert_eq!(impact_volume(0.0), None);
        assert_eq!(impact_volume(0.49), None);
    }

    #[test]
    fn audible_at_threshold() {
        let volume = impact_volume(IMPACT_AUDIBLE_SPEED).unwrap();
        assert!((volume - 0.1).abs() < 1e-6);
    }

    #[test]
    fn monotonically_non_decreasing_over_audible_range() {
        let mut previous = 0.0_f32;
        let mut speed = IMPACT_AUDIBLE_SPEED;
        while speed <= IMPACT_FULL_VOLUME_SPEED {
            let volume = impact_volume(speed).unwrap();
            assert!(volume >= previous, "volume dipped at speed {speed}");
            previous = volume;
            speed += 0.05;
        }
    }

    #[test]
    fn clamps_to_full_volume() {
        assert_eq!(impact_volume(IMPACT_FULL_VOLUME_SPEED), Some(1.0));
        assert_eq!(impact_volume(37.0), Some(1.0));
    }
}
