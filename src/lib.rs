//! Arena Shooter - A top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, projectiles, collisions, game state)
//! - `renderer`: Read-only scene extraction and vertex generation
//! - `platform`: Input event tracking for the host window/browser
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 25.0;
    pub const PLAYER_HEALTH: i32 = 3;
    /// Velocity change per frame while a key is held (Absolute mode)
    pub const PLAYER_SPEED_INCREMENT: f32 = 0.25;
    pub const PLAYER_MIN_SPEED: f32 = -5.0;
    pub const PLAYER_MAX_SPEED: f32 = 5.0;
    /// Displacement per frame per held key (Relative mode)
    pub const PLAYER_STRAFE_SPEED: f32 = 3.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 20.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    pub const PROJECTILE_SPEED: f32 = 3.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPEED: f32 = 1.5;
    pub const ENEMY_HEALTH: i32 = 3;

    /// Spawner defaults (2 seconds at 60 Hz)
    pub const SPAWN_INTERVAL_TICKS: u32 = 120;
    pub const MAX_ENEMIES: usize = 12;
}

/// Angle of the vector pointing from `from` to `to`, in (-π, π]
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn from_polar(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
