//! Keyboard/pointer event tracking
//!
//! Collects events between frames and hands the simulation one snapshot per
//! frame. One-shot signals (fire, mode toggle) are cleared after each
//! snapshot so they never repeat on their own.

use glam::Vec2;

use crate::sim::{HeldKeys, TickInput};

/// Directional key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

impl Direction {
    /// Map a DOM-style key name
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" | "ArrowUp" => Some(Direction::Forward),
            "s" | "S" | "ArrowDown" => Some(Direction::Backward),
            "a" | "A" | "ArrowLeft" => Some(Direction::Left),
            "d" | "D" | "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Accumulates host input events into per-frame snapshots
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Held directions in press order, no duplicates
    held: Vec<Direction>,
    /// Canvas top-left in client coordinates
    origin: Vec2,
    pointer: Option<Vec2>,
    fire: bool,
    toggle_mode: bool,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the canvas sits on the page, for pointer conversion
    pub fn set_canvas_origin(&mut self, left: f32, top: f32) {
        self.origin = Vec2::new(left, top);
    }

    /// Key pressed; `repeat` is the OS auto-repeat flag
    pub fn key_down(&mut self, key: &str, repeat: bool) {
        if let Some(dir) = Direction::from_key(key) {
            if !self.held.contains(&dir) {
                self.held.push(dir);
            }
            return;
        }
        if repeat {
            return;
        }
        match key {
            " " => self.fire = true,
            "m" | "M" => self.toggle_mode = true,
            _ => {}
        }
    }

    pub fn key_up(&mut self, key: &str) {
        if let Some(dir) = Direction::from_key(key) {
            self.held.retain(|d| *d != dir);
        }
    }

    /// Pointer moved to client coordinates
    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32) {
        self.pointer = Some(Vec2::new(client_x, client_y) - self.origin);
    }

    /// Pointer click fires like the space bar
    pub fn pointer_down(&mut self) {
        self.fire = true;
    }

    /// Focus lost: release everything so keys don't stick
    pub fn clear_held(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held.contains(&dir)
    }

    /// Snapshot for the next tick; clears one-shot inputs
    pub fn take_input(&mut self) -> TickInput {
        let input = TickInput {
            held: HeldKeys {
                forward: self.is_held(Direction::Forward),
                backward: self.is_held(Direction::Backward),
                left: self.is_held(Direction::Left),
                right: self.is_held(Direction::Right),
            },
            target: self.pointer,
            fire: self.fire,
            toggle_mode: self.toggle_mode,
        };
        self.fire = false;
        self.toggle_mode = false;
        input
    }
}
