//! Static scene setup and visual attachment.
//!
//! `ballpit-core` spawns logical entities (`Ball`, `Floor`) with transforms
//! and physics bodies; the systems here give them meshes and materials. All
//! balls share one unit-sphere mesh and one material to keep draw-call and
//! memory overhead flat no matter how many are spawned.

use bevy::light::{DirectionalLightShadowMap, GlobalAmbientLight, NotShadowCaster};
use bevy::prelude::*;

use ballpit_core::bevy::{Ball, Floor};
use ballpit_core::physics::FLOOR_HALF_EXTENTS;

use crate::assets::SceneAssets;
use crate::camera::OrbitCamera;

/// Initial camera position, looking at the origin.
pub const CAMERA_START: Vec3 = Vec3::new(4.0, 3.0, 4.0);

/// Shared mesh/material handles for every ball.
#[derive(Resource)]
pub struct BallVisualAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Mesh/material handles for the floor slab.
#[derive(Resource)]
pub struct FloorVisualAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

/// Startup system: build the shared meshes and materials.
///
/// Texture handles may still be loading here; meshes render with defaults
/// until the data arrives.
pub fn setup_visual_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene_assets: Res<SceneAssets>,
) {
    let ball_mesh = meshes.add(Sphere::new(1.0).mesh().uv(32, 18));
    let ball_material = materials.add(StandardMaterial {
        base_color_texture: Some(scene_assets.sphere_diffuse.clone()),
        occlusion_texture: Some(scene_assets.sphere_ambient_occlusion.clone()),
        metallic_roughness_texture: Some(scene_assets.sphere_roughness.clone()),
        perceptual_roughness: 0.75,
        metallic: 0.0,
        ..default()
    });
    commands.insert_resource(BallVisualAssets {
        mesh: ball_mesh,
        material: ball_material,
    });

    let floor_mesh = meshes.add(Cuboid::new(
        FLOOR_HALF_EXTENTS[0] * 2.0,
        FLOOR_HALF_EXTENTS[1] * 2.0,
        FLOOR_HALF_EXTENTS[2] * 2.0,
    ));
    let floor_material = materials.add(StandardMaterial {
        base_color_texture: Some(scene_assets.floor_diffuse.clone()),
        occlusion_texture: Some(scene_assets.floor_ambient_occlusion.clone()),
        metallic_roughness_texture: Some(scene_assets.floor_roughness.clone()),
        normal_map_texture: Some(scene_assets.floor_normal.clone()),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    });
    commands.insert_resource(FloorVisualAssets {
        mesh: floor_mesh,
        material: floor_material,
    });
}

/// Startup system: camera rig and lights.
pub fn setup_lights_and_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START).looking_at(Vec3::ZERO, Vec3::Y),
        OrbitCamera::looking_from(CAMERA_START, Vec3::ZERO),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(-2.0, 2.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.insert_resource(DirectionalLightShadowMap { size: 2048 });

    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: 300.0,
        ..default()
    });
}

/// Gives every newly spawned ball the shared mesh and material.
///
/// The unit sphere picks up its size from `Transform::scale`, set at spawn
/// time by the core.
pub fn attach_ball_visuals(
    mut commands: Commands,
    visuals: Res<BallVisualAssets>,
    new_balls: Query<Entity, Added<Ball>>,
) {
    for entity in new_balls.iter() {
        commands.entity(entity).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
        ));
    }
}

/// Gives the floor its slab mesh. The floor receives shadows but casts none.
pub fn attach_floor_visual(
    mut commands: Commands,
    visuals: Res<FloorVisualAssets>,
    new_floors: Query<Entity, Added<Floor>>,
) {
    for entity in new_floors.iter() {
        commands.entity(entity).insert((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
            NotShadowCaster,
        ));
    }
}
