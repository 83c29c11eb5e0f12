//! Scene extraction and shape tessellation
//!
//! `scene` reads the game state and describes what to draw; `tessellate`
//! turns each shape into triangles. Neither can mutate the simulation.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::GameState;

/// Segments used for the player circle
pub const CIRCLE_SEGMENTS: u32 = 24;
/// Aim line thickness (pixels)
pub const AIM_LINE_WIDTH: f32 = 0.5;

/// A renderable primitive in arena coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawShape {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Rectangle rotated by `angle` around its center
    Quad {
        center: Vec2,
        size: Vec2,
        angle: f32,
        color: [f32; 4],
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: [f32; 4],
    },
}

/// Describe the current frame, back to front
///
/// Geometry matches each entity's collision box: the player and projectiles
/// are centered on their position, enemies hang from their top-left corner.
pub fn scene(state: &GameState, aim_target: Option<Vec2>) -> Vec<DrawShape> {
    let mut shapes = Vec::with_capacity(2 + state.enemies.len() + state.player.projectiles.len());

    for enemy in state.live_enemies() {
        let color = if enemy.health < state.tuning.enemy_health {
            colors::ENEMY_HURT
        } else {
            colors::ENEMY
        };
        shapes.push(DrawShape::Quad {
            center: enemy.center(),
            size: enemy.size,
            angle: 0.0,
            color,
        });
    }

    for projectile in state.player.live_projectiles() {
        shapes.push(DrawShape::Quad {
            center: projectile.pos,
            size: projectile.size,
            angle: projectile.angle,
            color: colors::PROJECTILE,
        });
    }

    let player = &state.player;
    shapes.push(DrawShape::Circle {
        center: player.pos,
        radius: player.size.x / 2.0,
        color: colors::PLAYER,
    });

    if let Some(target) = aim_target.filter(|t| t.is_finite()) {
        shapes.push(DrawShape::Line {
            from: player.pos,
            to: target,
            width: AIM_LINE_WIDTH,
            color: colors::AIM_LINE,
        });
    }

    shapes
}

/// Triangle list for one shape
pub fn tessellate(shape: &DrawShape) -> Vec<Vertex> {
    match *shape {
        DrawShape::Circle {
            center,
            radius,
            color,
        } => circle(center, radius, color, CIRCLE_SEGMENTS),
        DrawShape::Quad {
            center,
            size,
            angle,
            color,
        } => {
            let half = size * 0.5;
            let rot = Vec2::from_angle(angle);
            let corners = [
                Vec2::new(-half.x, -half.y),
                Vec2::new(half.x, -half.y),
                Vec2::new(half.x, half.y),
                Vec2::new(-half.x, half.y),
            ]
            .map(|c| center + rot.rotate(c));
            quad(corners, color)
        }
        DrawShape::Line {
            from,
            to,
            width,
            color,
        } => {
            let dir = (to - from).normalize_or_zero();
            // Perpendicular for width
            let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
            quad([from + perp, to + perp, to - perp, from - perp], color)
        }
    }
}

/// Tessellate a whole scene
pub fn tessellate_all(shapes: &[DrawShape]) -> Vec<Vertex> {
    shapes.iter().flat_map(tessellate).collect()
}

/// Two triangles from four corners in winding order
fn quad(c: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::at(c[0], color),
        Vertex::at(c[1], color),
        Vertex::at(c[2], color),
        Vertex::at(c[2], color),
        Vertex::at(c[3], color),
        Vertex::at(c[0], color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + crate::from_polar(radius, theta1), color));
        vertices.push(Vertex::at(center + crate::from_polar(radius, theta2), color));
    }

    vertices
}
