//! Bevy integration for the ball playground.
//!
//! Components, messages, resources, the rapier physics plugin, and the
//! headless simulation plugin used both by the windowed app and by tests.

pub mod components;
pub mod events;
pub mod physics_plugin;
pub mod plugin;
pub mod resources;
pub mod systems;

#[cfg(test)]
pub(crate) mod test_utils;

pub use components::*;
pub use events::*;
pub use physics_plugin::{BallPhysicsPlugin, PhysicsBody, PhysicsSet, PhysicsWorldRes};
pub use plugin::BallpitHeadlessPlugin;
pub use resources::*;
