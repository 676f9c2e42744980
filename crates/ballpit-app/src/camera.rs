//! Damped orbit camera.
//!
//! Left-drag orbits around the focus point, the wheel zooms. Input moves the
//! target angles; a smoothing pass eases the actual camera toward them each
//! frame, so releasing the pointer leaves a short glide.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 1.1;
const DISTANCE_RANGE: (f32, f32) = (2.0, 20.0);
/// Keep the pitch shy of the poles to avoid gimbal flips.
const PITCH_LIMIT: f32 = 1.54;

#[derive(Component, Debug, Clone)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    /// Fraction of the remaining gap closed per frame.
    pub smoothing: f32,
}

impl OrbitCamera {
    /// Builds a rig whose initial pose matches `Transform::looking_at` from
    /// `eye` toward `focus`.
    pub fn looking_from(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().max(DISTANCE_RANGE.0);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).asin();
        Self {
            focus,
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            smoothing: 0.15,
        }
    }
}

/// System to turn pointer input into orbit targets.
///
/// - Left mouse button drag: orbit yaw/pitch
/// - Mouse wheel scroll: zoom in/out
pub fn orbit_camera_input(
    mut cameras: Query<&mut OrbitCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut motion_events: MessageReader<MouseMotion>,
    mut scroll_events: MessageReader<MouseWheel>,
) {
    let mut drag = Vec2::ZERO;
    for event in motion_events.read() {
        drag += event.delta;
    }

    let mut zoom_steps = 0.0;
    for event in scroll_events.read() {
        zoom_steps += event.y;
    }

    for mut camera in cameras.iter_mut() {
        if mouse_button.pressed(MouseButton::Left) && drag != Vec2::ZERO {
            camera.target_yaw -= drag.x * ROTATE_SENSITIVITY;
            camera.target_pitch = (camera.target_pitch + drag.y * ROTATE_SENSITIVITY)
                .clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        if zoom_steps != 0.0 {
            camera.target_distance = (camera.target_distance * ZOOM_STEP.powf(-zoom_steps))
                .clamp(DISTANCE_RANGE.0, DISTANCE_RANGE.1);
        }
    }
}

/// System to ease the camera toward its targets and write the transform.
pub fn apply_camera_damping(mut cameras: Query<(&mut OrbitCamera, &mut Transform)>) {
    for (mut camera, mut transform) in cameras.iter_mut() {
        let smoothing = camera.smoothing;
        camera.yaw += (camera.target_yaw - camera.yaw) * smoothing;
        camera.pitch += (camera.target_pitch - camera.pitch) * smoothing;
        camera.distance += (camera.target_distance - camera.distance) * smoothing;

        let (yaw_sin, yaw_cos) = camera.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = camera.pitch.sin_cos();
        let offset = Vec3::new(
            camera.distance * pitch_cos * yaw_sin,
            camera.distance * pitch_sin,
            camera.distance * pitch_cos * yaw_cos,
        );

        transform.translation = camera.focus + offset;
        transform.look_at(camera.focus, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_from_reproduces_eye_position() {
        let eye = Vec3::new(4.0, 3.0, 4.0);
        let camera = OrbitCamera::looking_from(eye, Vec3::ZERO);

        let (yaw_sin, yaw_cos) = camera.yaw.sin_cos();
        let (pitch_sin, pitch_cos) = camera.pitch.sin_cos();
        let reconstructed = Vec3::new(
            camera.distance * pitch_cos * yaw_sin,
            camera.distance * pitch_sin,
            camera.distance * pitch_cos * yaw_cos,
        );
        assert!((reconstructed - eye).length() < 1e-4);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut camera = OrbitCamera::looking_from(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO);
        camera.target_pitch = 10.0_f32.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        assert!(camera.target_pitch <= PITCH_LIMIT);
    }
}
