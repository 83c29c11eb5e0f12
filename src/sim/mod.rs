//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame displacement only
//! - Seeded RNG only
//! - Mark-then-compact removal (never remove while iterating)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod spawner;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{Rect, overlaps};
pub use enemy::Enemy;
pub use player::Player;
pub use projectile::Projectile;
pub use spawner::Spawner;
pub use state::{Arena, GameEvent, GamePhase, GameState, MovementMode};
pub use tick::{HeldKeys, TickInput, tick};
