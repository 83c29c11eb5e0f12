//! Game balance values
//!
//! Defaults come from `consts`; a JSON file can override any subset of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Balance values for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_size: f32,
    pub player_health: i32,
    pub speed_increment: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub strafe_speed: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_size: f32,
    pub enemy_speed: f32,
    pub enemy_health: i32,

    // === Spawner ===
    /// Frames between spawns (0 disables the spawner)
    pub spawn_interval_ticks: u32,
    pub max_enemies: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_health: PLAYER_HEALTH,
            speed_increment: PLAYER_SPEED_INCREMENT,
            min_speed: PLAYER_MIN_SPEED,
            max_speed: PLAYER_MAX_SPEED,
            strafe_speed: PLAYER_STRAFE_SPEED,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,

            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_health: ENEMY_HEALTH,

            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            max_enemies: MAX_ENEMIES,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Copy with the spawner switched off (fixed spawn lists only)
    pub fn without_spawner(mut self) -> Self {
        self.spawn_interval_ticks = 0;
        self
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("player_size", self.player_size),
            ("speed_increment", self.speed_increment),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("enemy_size", self.enemy_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be a positive number",
                });
            }
        }

        let non_negative = [
            ("strafe_speed", self.strafe_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Invalid {
                    field,
                    reason: "must be zero or a positive number",
                });
            }
        }

        // Velocity clamp needs min <= 0 <= max so a resting player stays valid
        if !(self.min_speed.is_finite() && self.min_speed <= 0.0) {
            return Err(TuningError::Invalid {
                field: "min_speed",
                reason: "must be zero or negative",
            });
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return Err(TuningError::Invalid {
                field: "max_speed",
                reason: "must be zero or positive",
            });
        }

        if self.player_health <= 0 {
            return Err(TuningError::Invalid {
                field: "player_health",
                reason: "must be at least 1",
            });
        }
        if self.enemy_health <= 0 {
            return Err(TuningError::Invalid {
                field: "enemy_health",
                reason: "must be at least 1",
            });
        }

        Ok(())
    }
}
