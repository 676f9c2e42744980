//! Asset handles and load reporting.
//!
//! Everything loads asynchronously through the `AssetServer`; the simulation
//! never blocks on it. Failed loads are logged and the scene keeps rendering
//! with whatever arrived (a mesh without that texture layer).

use bevy::asset::AssetLoadFailedEvent;
use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;
use tracing::{error, info};

/// Handles for every texture and sound the scene uses.
///
/// Skybox faces are ordered +X, -X, +Y, -Y, +Z, -Z to match cube-texture
/// layer order.
#[derive(Resource)]
pub struct SceneAssets {
    pub floor_diffuse: Handle<Image>,
    pub floor_ambient_occlusion: Handle<Image>,
    pub floor_roughness: Handle<Image>,
    pub floor_normal: Handle<Image>,
    pub sphere_diffuse: Handle<Image>,
    pub sphere_ambient_occlusion: Handle<Image>,
    pub sphere_roughness: Handle<Image>,
    pub skybox_faces: [Handle<Image>; 6],
    pub impact_sound: Handle<AudioSource>,
}

impl SceneAssets {
    fn image_handles(&self) -> impl Iterator<Item = &Handle<Image>> {
        [
            &self.floor_diffuse,
            &self.floor_ambient_occlusion,
            &self.floor_roughness,
            &self.floor_normal,
            &self.sphere_diffuse,
            &self.sphere_ambient_occlusion,
            &self.sphere_roughness,
        ]
        .into_iter()
        .chain(self.skybox_faces.iter())
    }
}

/// Startup system: kick off every asset load.
pub fn load_scene_assets(mut commands: Commands, asset_server: Res<AssetServer>) {
    // Normal maps hold vectors, not colors; force linear sampling.
    let floor_normal = asset_server.load_with_settings(
        "textures/laminate_floor_03_nor_gl_1k.jpg",
        |settings: &mut ImageLoaderSettings| {
            settings.is_srgb = false;
        },
    );

    commands.insert_resource(SceneAssets {
        floor_diffuse: asset_server.load("textures/laminate_floor_03_diff_1k.jpg"),
        floor_ambient_occlusion: asset_server.load("textures/laminate_floor_03_ao_1k.jpg"),
        floor_roughness: asset_server.load("textures/laminate_floor_03_rough_1k.jpg"),
        floor_normal,
        sphere_diffuse: asset_server.load("textures/leather_white_diff_1k.jpg"),
        sphere_ambient_occlusion: asset_server.load("textures/leather_white_ao_1k.jpg"),
        sphere_roughness: asset_server.load("textures/leather_white_rough_1k.jpg"),
        skybox_faces: [
            asset_server.load("textures/skybox/px.png"),
            asset_server.load("textures/skybox/nx.png"),
            asset_server.load("textures/skybox/py.png"),
            asset_server.load("textures/skybox/ny.png"),
            asset_server.load("textures/skybox/pz.png"),
            asset_server.load("textures/skybox/nz.png"),
        ],
        impact_sound: asset_server.load("sounds/hit.mp3"),
    });
}

/// Logs every failed asset load. Not fatal: the simulation continues with
/// whatever partially loaded.
pub fn log_asset_load_failures(
    mut image_failures: MessageReader<AssetLoadFailedEvent<Image>>,
    mut audio_failures: MessageReader<AssetLoadFailedEvent<AudioSource>>,
) {
    for failure in image_failures.read() {
        error!("failed to load texture {}: {}", failure.path, failure.error);
    }
    for failure in audio_failures.read() {
        error!("failed to load sound {}: {}", failure.path, failure.error);
    }
}

/// Logs a single line once every texture has resolved.
pub fn announce_when_loaded(
    mut announced: Local<bool>,
    asset_server: Res<AssetServer>,
    scene_assets: Res<SceneAssets>,
) {
    if *announced {
        return;
    }
    if scene_assets
        .image_handles()
        .all(|handle| asset_server.is_loaded_with_dependencies(handle))
    {
        info!("all textures loaded");
        *announced = true;
    }
}
