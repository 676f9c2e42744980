//! Skybox assembly from six face images.
//!
//! The faces load asynchronously; once all six are in memory they are stacked
//! into a single 6-layer image, reinterpreted as a cube texture, and attached
//! to the camera. Until then the camera clear color shows.

use bevy::asset::RenderAssetUsages;
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureViewDescriptor, TextureViewDimension,
};
use tracing::{info, warn};

use crate::assets::SceneAssets;

/// System that waits for all six faces and builds the cube texture once.
pub fn build_skybox_when_loaded(
    mut commands: Commands,
    mut done: Local<bool>,
    scene_assets: Res<SceneAssets>,
    mut images: ResMut<Assets<Image>>,
    cameras: Query<Entity, With<Camera3d>>,
) {
    if *done {
        return;
    }

    let mut faces = Vec::with_capacity(6);
    for handle in &scene_assets.skybox_faces {
        let Some(image) = images.get(handle) else {
            // Still loading (or failed — logged elsewhere); try next frame.
            return;
        };
        faces.push(image);
    }

    let descriptor = faces[0].texture_descriptor.clone();
    let same_layout = faces.iter().all(|face| {
        face.texture_descriptor.size == descriptor.size
            && face.texture_descriptor.format == descriptor.format
    });
    if !same_layout {
        warn!("skybox faces differ in size or format, skipping skybox");
        *done = true;
        return;
    }

    let mut data = Vec::new();
    for face in &faces {
        let Some(bytes) = face.data.as_ref() else {
            warn!("skybox face has no CPU-side data, skipping skybox");
            *done = true;
            return;
        };
        data.extend_from_slice(bytes);
    }

    let mut cubemap = Image::new(
        Extent3d {
            width: descriptor.size.width,
            height: descriptor.size.height,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        data,
        descriptor.format,
        RenderAssetUsages::RENDER_WORLD,
    );
    cubemap.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    let cubemap_handle = images.add(cubemap);

    for camera in cameras.iter() {
        commands.entity(camera).insert(Skybox {
            image: cubemap_handle.clone(),
            brightness: 1000.0,
            rotation: Quat::IDENTITY,
        });
    }

    info!("skybox assembled from six faces");
    *done = true;
}
