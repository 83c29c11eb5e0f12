//! Per-frame simulation step
//!
//! One call to `tick` advances the world by exactly one frame using fixed
//! per-frame displacements.

use glam::Vec2;

use super::collision::overlaps;
use super::state::{GameEvent, GamePhase, GameState};

/// Directional keys held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub held: HeldKeys,
    /// Aim target in arena coordinates (pointer position)
    pub target: Option<Vec2>,
    /// Fire once this frame (edge, not held state)
    pub fire: bool,
    /// Switch between Absolute and Relative movement (edge)
    pub toggle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Frozen once the game is over
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    state.time_ticks += 1;

    if input.toggle_mode {
        state.mode = state.mode.toggled();
        state.events.push(GameEvent::ModeChanged { mode: state.mode });
        log::info!("Movement mode: {:?}", state.mode);
    }

    state
        .player
        .update(input, state.mode, &state.arena, &state.tuning);

    if let Some(top_left) = state.spawner.poll(
        state.time_ticks,
        state.enemies.len(),
        &state.arena,
        state.tuning.enemy_size,
    ) {
        let id = state.spawn_enemy(top_left);
        state.events.push(GameEvent::EnemySpawned { id });
        log::debug!("Spawned enemy {} at ({:.0}, {:.0})", id, top_left.x, top_left.y);
    }

    resolve_collisions(state);

    // Compact: everything tombstoned this frame goes now
    let events = &mut state.events;
    let kills = &mut state.kills;
    state.enemies.retain(|enemy| {
        if enemy.dead && enemy.health <= 0 {
            *kills += 1;
            events.push(GameEvent::EnemyDestroyed { id: enemy.id });
        }
        !enemy.dead
    });
    state.player.compact_projectiles();
}

/// Enemy movement plus player/enemy and projectile/enemy hits
fn resolve_collisions(state: &mut GameState) {
    let player = &mut state.player;

    for enemy in state.enemies.iter_mut() {
        enemy.advance(player.pos);
        let enemy_box = enemy.bounds();

        if overlaps(&player.bounds(), &enemy_box) {
            enemy.dead = true;
            player.health -= 1;
            state.events.push(GameEvent::PlayerHit {
                health: player.health,
            });

            if player.health <= 0 && state.phase == GamePhase::Running {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver);
                log::info!(
                    "Game over after {} ticks ({} kills)",
                    state.time_ticks,
                    state.kills
                );
            }
        }

        for projectile in player.projectiles.iter_mut().filter(|p| !p.dead) {
            if overlaps(&projectile.bounds(), &enemy_box) {
                projectile.dead = true;
                enemy.take_hit();
                state.events.push(GameEvent::EnemyHit {
                    id: enemy.id,
                    health: enemy.health,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::projectile::Projectile;
    use crate::sim::state::{Arena, MovementMode};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn quiet_state() -> GameState {
        GameState::new(
            Arena::new(800.0, 600.0),
            Tuning::default().without_spawner(),
            1,
        )
        .unwrap()
    }

    #[test]
    fn test_contact_costs_one_health() {
        let mut state = quiet_state();
        // Player box spans 387.5..412.5; this enemy overlaps it on frame 1
        let id = state.spawn_enemy(Vec2::new(395.0, 295.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 2);
        assert!(state.enemies.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.events.contains(&GameEvent::PlayerHit { health: 2 }));
        // Contact kills don't count as projectile kills
        assert!(!state.events.contains(&GameEvent::EnemyDestroyed { id }));
        assert_eq!(state.kills, 0);
    }

    #[test]
    fn test_contact_and_projectile_same_frame() {
        let mut state = quiet_state();
        let id = state.spawn_enemy(Vec2::new(395.0, 295.0));
        let p = Projectile::new(Vec2::new(405.0, 305.0), 0.0, &state.tuning);
        state.player.projectiles.push(p);

        tick(&mut state, &TickInput::default());

        // Removed by contact, but the projectile still lands on it
        assert_eq!(
            state.events,
            vec![
                GameEvent::PlayerHit { health: 2 },
                GameEvent::EnemyHit {
                    id,
                    health: state.tuning.enemy_health - 1
                },
            ]
        );
        assert_eq!(state.player.health, 2);
        assert!(state.enemies.is_empty());
        assert!(state.player.projectiles.is_empty());
        // Enemy left with health above zero: not a kill
        assert_eq!(state.kills, 0);
    }

    #[test]
    fn test_three_projectiles_destroy_enemy() {
        let mut state = quiet_state();
        let id = state.spawn_enemy(Vec2::new(100.0, 100.0));
        for _ in 0..3 {
            let p = Projectile::new(Vec2::new(115.0, 115.0), 0.0, &state.tuning);
            state.player.projectiles.push(p);
        }

        tick(&mut state, &TickInput::default());

        let hits: Vec<_> = state
            .events
            .iter()
            .filter_map(|e| match e {
                GameEvent::EnemyHit { health, .. } => Some(*health),
                _ => None,
            })
            .collect();
        assert_eq!(hits, vec![2, 1, 0]);
        assert!(state.events.contains(&GameEvent::EnemyDestroyed { id }));
        assert!(state.enemies.is_empty());
        assert!(state.player.projectiles.is_empty());
        assert_eq!(state.kills, 1);
    }

    #[test]
    fn test_projectile_hits_only_one_enemy() {
        let mut state = quiet_state();
        state.spawn_enemy(Vec2::new(100.0, 100.0));
        state.spawn_enemy(Vec2::new(100.0, 100.0));
        let p = Projectile::new(Vec2::new(115.0, 115.0), 0.0, &state.tuning);
        state.player.projectiles.push(p);

        tick(&mut state, &TickInput::default());

        let health: Vec<_> = state.enemies.iter().map(|e| e.health).collect();
        let full = state.tuning.enemy_health;
        assert_eq!(health, vec![full - 1, full]);
    }

    #[test]
    fn test_last_health_ends_game() {
        let mut state = quiet_state();
        state.player.health = 1;
        state.spawn_enemy(Vec2::new(395.0, 295.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_simultaneous_contacts_apply_all_damage() {
        let mut state = quiet_state();
        state.player.health = 1;
        state.spawn_enemy(Vec2::new(395.0, 295.0));
        state.spawn_enemy(Vec2::new(380.0, 280.0));

        tick(&mut state, &TickInput::default());

        assert_eq!(state.player.health, -1);
        assert!(state.is_game_over());
        let game_overs = state.events.iter().filter(|e| **e == GameEvent::GameOver).count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = quiet_state();
        state.player.health = 1;
        state.spawn_enemy(Vec2::new(395.0, 295.0));
        state.spawn_enemy(Vec2::new(10.0, 10.0));
        tick(&mut state, &TickInput::default());
        assert!(state.is_game_over());

        let frozen_tick = state.time_ticks;
        let frozen_enemy = state.enemies[0].pos;
        let input = TickInput {
            held: HeldKeys {
                right: true,
                ..Default::default()
            },
            fire: true,
            toggle_mode: true,
            target: Some(Vec2::ZERO),
        };
        for _ in 0..10 {
            tick(&mut state, &input);
        }
        assert!(state.is_game_over());
        assert_eq!(state.time_ticks, frozen_tick);
        assert_eq!(state.enemies[0].pos, frozen_enemy);
        assert_eq!(state.mode, MovementMode::Absolute);
        assert!(state.player.projectiles.is_empty());
    }

    #[test]
    fn test_relative_strafe_sums_in_one_frame() {
        let mut state = quiet_state();
        let start = state.player.pos;
        tick(
            &mut state,
            &TickInput {
                toggle_mode: true,
                ..Default::default()
            },
        );
        assert_eq!(state.mode, MovementMode::Relative);
        assert!(state.events.contains(&GameEvent::ModeChanged {
            mode: MovementMode::Relative
        }));

        let input = TickInput {
            held: HeldKeys {
                forward: true,
                right: true,
                ..Default::default()
            },
            target: Some(start + Vec2::new(200.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &input);

        let s = state.tuning.strafe_speed;
        let expected = start + Vec2::new(s, 0.0) + crate::from_polar(s, crate::deg_to_rad(90.0));
        assert!((state.player.pos - expected).length() < 1e-4);
    }

    #[test]
    fn test_projectile_leaving_arena_is_removed() {
        let mut state = quiet_state();
        let p = Projectile::new(Vec2::new(799.0, 100.0), 0.0, &state.tuning);
        state.player.projectiles.push(p);
        tick(&mut state, &TickInput::default());
        assert!(state.player.projectiles.is_empty());
    }

    #[test]
    fn test_fire_spawns_projectile() {
        let mut state = quiet_state();
        let input = TickInput {
            fire: true,
            target: Some(Vec2::new(800.0, 300.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.projectiles.len(), 1);
        // Spawned at the player and advanced once
        let p = &state.player.projectiles[0];
        assert!((p.pos.x - (400.0 + state.tuning.projectile_speed)).abs() < 1e-4);

        // Fire is an edge: no auto-repeat
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.projectiles.len(), 1);
    }

    #[test]
    fn test_spawner_feeds_enemies() {
        let mut state = GameState::new(Arena::new(800.0, 600.0), Tuning::default(), 5).unwrap();
        let interval = state.tuning.spawn_interval_ticks;
        for _ in 0..interval {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.enemies.len(), 1);
        assert!(matches!(state.events[0], GameEvent::EnemySpawned { .. }));
    }

    #[test]
    fn test_empty_world_is_fine() {
        let mut state = quiet_state();
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.time_ticks, 100);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Arena::new(800.0, 600.0), Tuning::default(), 99999).unwrap();
        let mut state2 = GameState::new(Arena::new(800.0, 600.0), Tuning::default(), 99999).unwrap();

        let inputs = [
            TickInput {
                target: Some(Vec2::new(10.0, 20.0)),
                fire: true,
                ..Default::default()
            },
            TickInput {
                held: HeldKeys {
                    left: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.player.pos, state2.player.pos);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
        }
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (
            any::<[bool; 4]>(),
            prop::option::of((-200.0f32..1000.0, -200.0f32..800.0)),
            any::<bool>(),
            prop::bool::weighted(0.05),
        )
            .prop_map(|(keys, target, fire, toggle_mode)| TickInput {
                held: HeldKeys {
                    forward: keys[0],
                    backward: keys[1],
                    left: keys[2],
                    right: keys[3],
                },
                target: target.map(|(x, y)| Vec2::new(x, y)),
                fire,
                toggle_mode,
            })
    }

    proptest! {
        #[test]
        fn prop_invariants_hold_every_frame(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..300),
        ) {
            let mut tuning = Tuning::default();
            tuning.spawn_interval_ticks = 15;
            let mut state = GameState::new(Arena::new(800.0, 600.0), tuning, seed).unwrap();
            let half = state.player.size * 0.5;
            let mut was_over = false;

            for input in &inputs {
                tick(&mut state, input);
                let p = &state.player;

                prop_assert!(p.pos.x >= -half.x && p.pos.x <= state.arena.width - half.x);
                prop_assert!(p.pos.y >= -half.y && p.pos.y <= state.arena.height - half.y);

                let (lo, hi) = (state.tuning.min_speed, state.tuning.max_speed);
                prop_assert!(p.vel.x >= lo && p.vel.x <= hi);
                prop_assert!(p.vel.y >= lo && p.vel.y <= hi);

                prop_assert!(p.projectiles.iter().all(|pr| !pr.dead && state.arena.contains(pr.pos)));
                prop_assert!(state.enemies.iter().all(|e| !e.dead));

                if was_over {
                    prop_assert!(state.is_game_over());
                }
                was_over = state.is_game_over();
            }
        }
    }
}
