//! ECS components for the ball playground.

use bevy::prelude::*;

/// Marker component for dropped balls.
///
/// The radius doubles as the visual scale: all balls share one unit-sphere
/// mesh and get sized through `Transform::scale`.
#[derive(Component, Debug, Clone, Copy)]
pub struct Ball {
    pub radius: f32,
}

impl Ball {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

/// Marker component for the static floor slab.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Floor;
