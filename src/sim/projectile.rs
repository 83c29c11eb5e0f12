//! Projectiles fired by the player

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::Arena;
use crate::from_polar;
use crate::tuning::Tuning;

/// A projectile travelling in a straight line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Center position
    pub pos: Vec2,
    /// Heading (radians), fixed at spawn
    pub angle: f32,
    pub speed: f32,
    pub size: Vec2,
    /// Tombstone: removed at the next compaction
    pub dead: bool,
}

impl Projectile {
    pub fn new(pos: Vec2, angle: f32, tuning: &Tuning) -> Self {
        Self {
            pos,
            angle,
            speed: tuning.projectile_speed,
            size: Vec2::new(tuning.projectile_width, tuning.projectile_height),
            dead: false,
        }
    }

    /// Move one frame along the heading; tombstone once outside the arena
    pub fn advance(&mut self, arena: &Arena) {
        self.pos += from_polar(self.speed, self.angle);
        if !arena.contains(self.pos) {
            self.dead = true;
        }
    }

    /// Collision box, centered like the drawn shape
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }
}
