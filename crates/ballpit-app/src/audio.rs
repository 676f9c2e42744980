//! Collision audio.
//!
//! One fire-and-forget audio entity per qualifying impact; the volume policy
//! lives in `ballpit_core::sound` so it stays testable without a device.

use bevy::audio::Volume;
use bevy::prelude::*;

use ballpit_core::bevy::BallImpactEvent;
use ballpit_core::sound::impact_volume;

use crate::assets::SceneAssets;

/// System that plays the hit clip for every audible impact.
pub fn play_impact_sounds(
    mut commands: Commands,
    mut impacts: MessageReader<BallImpactEvent>,
    scene_assets: Res<SceneAssets>,
) {
    for impact in impacts.read() {
        let Some(volume) = impact_volume(impact.impact_speed) else {
            continue;
        };
        commands.spawn((
            AudioPlayer::new(scene_assets.impact_sound.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
        ));
    }
}
