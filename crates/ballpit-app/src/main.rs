//! Windowed entry point for the ball-drop playground.
//!
//! `BallpitHeadlessPlugin` runs the simulation; `ViewPlugin` adds everything
//! that needs a GPU or a window on top of it.

mod assets;
mod audio;
mod camera;
mod config;
mod scene;
mod skybox;
mod ui;
mod window;

use bevy::prelude::*;

use ballpit_core::bevy::BallpitHeadlessPlugin;

use crate::config::AppSettings;

fn main() {
    let settings = AppSettings::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: settings.window_title.clone(),
                resolution: (settings.window_width as u32, settings.window_height as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(BallpitHeadlessPlugin {
            seed: settings.rng_seed,
        })
        .add_plugins(ViewPlugin)
        .run();
}

/// Rendering-side plugin: scene visuals, skybox, orbit camera, collision
/// audio, and the debug action panel.
struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                assets::load_scene_assets,
                scene::setup_visual_assets,
                scene::setup_lights_and_camera,
                ui::setup_debug_panel,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                scene::attach_ball_visuals,
                scene::attach_floor_visual,
                skybox::build_skybox_when_loaded,
                camera::orbit_camera_input,
                camera::apply_camera_damping.after(camera::orbit_camera_input),
                audio::play_impact_sounds,
                ui::handle_panel_buttons,
                assets::log_asset_load_failures,
                assets::announce_when_loaded,
                window::cap_render_scale,
            ),
        );
    }
}
