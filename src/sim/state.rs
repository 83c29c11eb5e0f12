//! Game state and core simulation types
//!
//! `GameState` is the simulation controller: it exclusively owns the arena,
//! the player, and the enemies. Adapters read it through shared borrows.

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use super::player::Player;
use super::spawner::Spawner;
use crate::tuning::{Tuning, TuningError};

/// Rectangular play area, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArenaSize")]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    /// Negative or NaN dimensions collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Inside `[0, width] x [0, height]`, edges included
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

/// Wire form of `Arena`; loading goes through `Arena::new`
#[derive(Deserialize)]
struct ArenaSize {
    width: f32,
    height: f32,
}

impl From<ArenaSize> for Arena {
    fn from(size: ArenaSize) -> Self {
        Arena::new(size.width, size.height)
    }
}

/// How held keys move the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MovementMode {
    /// Velocity-based, independent of aim
    #[default]
    Absolute,
    /// Strafing relative to the aim direction
    Relative,
}

impl MovementMode {
    pub fn toggled(self) -> Self {
        match self {
            MovementMode::Absolute => MovementMode::Relative,
            MovementMode::Relative => MovementMode::Absolute,
        }
    }
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal; the state is frozen
    GameOver,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy touched the player
    PlayerHit { health: i32 },
    /// A projectile struck an enemy
    EnemyHit { id: u32, health: i32 },
    /// An enemy was removed after dropping to zero health
    EnemyDestroyed { id: u32 },
    EnemySpawned { id: u32 },
    ModeChanged { mode: MovementMode },
    GameOver,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    /// Generator for the current stream; advance the stream after each use
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }

    pub fn advance(&mut self) {
        self.stream = self.stream.wrapping_add(1);
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub mode: MovementMode,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Enemies destroyed by projectiles
    pub kills: u32,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    pub spawner: Spawner,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the player resting at the arena center
    pub fn new(arena: Arena, tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            player: Player::new(&arena, &tuning),
            spawner: Spawner::new(seed, &tuning),
            arena,
            tuning,
            enemies: Vec::new(),
            mode: MovementMode::default(),
            phase: GamePhase::Running,
            time_ticks: 0,
            kills: 0,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Add a fixed spawn list (top-left corners)
    pub fn with_enemies(mut self, spawns: impl IntoIterator<Item = Vec2>) -> Self {
        for top_left in spawns {
            self.spawn_enemy(top_left);
        }
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at `top_left`, returning its ID
    pub fn spawn_enemy(&mut self, top_left: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, top_left, &self.tuning));
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enemies not tombstoned this frame
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| !e.dead)
    }
}
