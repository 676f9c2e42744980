//! ECS systems for the ball playground.

pub mod spawn;

pub use spawn::{handle_reset, handle_spawn_batch, setup_scene, spawn_ball_at};
