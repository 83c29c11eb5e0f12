//! The player avatar
//!
//! Owns its projectiles. Movement dispatches on the controller's
//! `MovementMode`, which the player reads but never changes.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::collision::Rect;
use super::projectile::Projectile;
use super::state::{Arena, MovementMode};
use super::tick::{HeldKeys, TickInput};
use crate::tuning::Tuning;
use crate::{angle_to, from_polar};

/// The player's avatar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    /// Per-frame velocity (Absolute mode only)
    pub vel: Vec2,
    /// Aim angle (radians), recomputed from the target each frame
    pub aim: f32,
    pub health: i32,
    pub size: Vec2,
    /// Live projectiles in fire order
    pub projectiles: Vec<Projectile>,
}

impl Player {
    /// Spawn a resting player at the center of the arena
    pub fn new(arena: &Arena, tuning: &Tuning) -> Self {
        Self {
            pos: arena.center(),
            vel: Vec2::ZERO,
            aim: 0.0,
            health: tuning.player_health,
            size: Vec2::splat(tuning.player_size),
            projectiles: Vec::new(),
        }
    }

    /// Advance one frame: aim, fire, move, clamp, then step projectiles
    pub fn update(&mut self, input: &TickInput, mode: MovementMode, arena: &Arena, tuning: &Tuning) {
        if input.fire {
            self.fire(input.target, tuning);
        } else {
            self.aim_at(input.target);
        }

        match mode {
            MovementMode::Absolute => self.move_absolute(&input.held, tuning),
            MovementMode::Relative => self.move_relative(&input.held, tuning),
        }
        self.clamp_to(arena);

        for projectile in self.projectiles.iter_mut() {
            projectile.advance(arena);
        }
        self.compact_projectiles();
    }

    /// Point the aim at `target`; keeps the previous aim if there is none
    pub fn aim_at(&mut self, target: Option<Vec2>) {
        if let Some(target) = target.filter(|t| t.is_finite()) {
            self.aim = angle_to(self.pos, target);
        }
    }

    /// Spawn a projectile at the current position along the aim
    pub fn fire(&mut self, target: Option<Vec2>, tuning: &Tuning) {
        self.aim_at(target);
        self.projectiles.push(Projectile::new(self.pos, self.aim, tuning));
    }

    /// Drop tombstoned projectiles, keeping fire order
    pub fn compact_projectiles(&mut self) {
        self.projectiles.retain(|p| !p.dead);
    }

    /// Projectiles that have not been tombstoned this frame
    pub fn live_projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter().filter(|p| !p.dead)
    }

    /// Collision box, centered like the drawn body
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, self.size)
    }

    /// Velocity model: keys accelerate, released axes decay to rest
    fn move_absolute(&mut self, held: &HeldKeys, tuning: &Tuning) {
        // "forward" is up the screen (negative y)
        self.vel.y = integrate_axis(self.vel.y, held.forward, held.backward, tuning);
        self.vel.x = integrate_axis(self.vel.x, held.left, held.right, tuning);
        self.pos += self.vel;
    }

    /// Heading-locked strafing relative to the aim
    fn move_relative(&mut self, held: &HeldKeys, tuning: &Tuning) {
        self.vel = Vec2::ZERO;

        let speed = tuning.strafe_speed;
        let mut displacement = Vec2::ZERO;
        if held.forward {
            displacement += from_polar(speed, self.aim);
        }
        if held.backward {
            displacement -= from_polar(speed, self.aim);
        }
        if held.right {
            displacement += from_polar(speed, self.aim + FRAC_PI_2);
        }
        if held.left {
            displacement += from_polar(speed, self.aim - FRAC_PI_2);
        }
        self.pos += displacement;
    }

    /// Keep the body inside the arena, allowing half of it past the wall
    fn clamp_to(&mut self, arena: &Arena) {
        let half = self.size * 0.5;
        self.pos.x = self.pos.x.clamp(-half.x, arena.width - half.x);
        self.pos.y = self.pos.y.clamp(-half.y, arena.height - half.y);
    }
}

/// One axis of Absolute-mode velocity
fn integrate_axis(vel: f32, decrease: bool, increase: bool, tuning: &Tuning) -> f32 {
    let step = tuning.speed_increment;
    let vel = match (decrease, increase) {
        (true, false) => vel - step,
        (false, true) => vel + step,
        (true, true) => vel,
        (false, false) => {
            let decayed = vel.abs() - step;
            // Snap instead of creeping toward zero forever
            if decayed < step { 0.0 } else { decayed.copysign(vel) }
        }
    };
    vel.clamp(tuning.min_speed, tuning.max_speed)
}
