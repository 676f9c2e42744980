//! ECS messages for the ball playground.
//!
//! Note: In Bevy 0.18+, buffered events use the Message trait.

use bevy::prelude::*;

/// Message to request one spawn batch ("Add 5 spheres" action).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct SpawnBallBatchEvent;

/// Message to request removal of every ball ("Reset" action).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResetBallsEvent;

/// Message fired for every contact that started during a physics step.
///
/// `impact_speed` is the closing speed along the contact normal; consumers
/// decide audibility through [`crate::sound::impact_volume`].
#[derive(Message, Debug, Clone, Copy)]
pub struct BallImpactEvent {
    /// The ball entity involved in the contact.
    pub entity: Entity,
    pub impact_speed: f32,
}
