//! One simulation step per displayed frame
//!
//! Core game loop that advances the simulation. There is no fixed timestep:
//! every constant is expressed per tick, so game speed follows the display
//! refresh rate.

use super::camera;
use super::collision::{PlatformContact, classify_contact};
use super::particles;
use super::state::{Color, GameEvent, GameState, TerminalPayload};
use crate::consts::*;

/// Logical inputs held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// One-shot: restart before anything else happens
    pub restart: bool,
}

/// Values surfaced to the HUD after every tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub score: u64,
    pub level: u32,
    /// Health bar fill, 0..=1
    pub health_fraction: f32,
    /// Present only on the tick that ended the run
    pub terminal: Option<TerminalPayload>,
    pub events: Vec<GameEvent>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    if input.restart {
        state.restart();
        return report(state, None);
    }

    // Terminal phases wait for a restart
    if !state.game_running() {
        return report(state, None);
    }

    state.time_ticks += 1;

    apply_input(state, input);
    integrate_player(state);
    resolve_platforms(state);

    // Coins still resolve on the tick that ends the run
    let terminal = update_enemies(state);
    let terminal = terminal.or(collect_coins(state));

    state.camera_x = camera::follow(state.player.pos.x);

    for coin in state.coins.iter_mut().filter(|c| !c.collected) {
        coin.animation += COIN_ANIMATION_STEP;
    }

    particles::update(&mut state.particles);

    let pos = state.player.pos;
    state.player.trail.record(pos);

    report(state, terminal)
}

fn report(state: &mut GameState, terminal: Option<TerminalPayload>) -> TickReport {
    TickReport {
        score: state.score,
        level: state.level.number(),
        health_fraction: state.health_fraction(),
        terminal,
        events: std::mem::take(&mut state.events),
    }
}

/// Horizontal movement and jumping
fn apply_input(state: &mut GameState, input: &TickInput) {
    let player = &mut state.player;
    if input.left {
        player.vel.x = -MOVE_SPEED;
    } else if input.right {
        player.vel.x = MOVE_SPEED;
    } else {
        player.vel.x *= FRICTION;
    }

    if input.jump && player.grounded {
        player.vel.y = JUMP_FORCE;
        player.grounded = false;
        let feet = player.pos + glam::Vec2::new(0.0, player.size.y);
        state.emit_particles(feet, JUMP_PARTICLES, Color::CYAN);
        state.events.push(GameEvent::Jumped);
    }
}

/// Gravity, position update, and horizontal world bounds
fn integrate_player(state: &mut GameState) {
    let player = &mut state.player;
    player.vel.y += GRAVITY;
    player.pos += player.vel;

    // No vertical bound: every level has a full-width ground
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
    if player.pos.x + player.size.x > LEVEL_WIDTH {
        player.pos.x = LEVEL_WIDTH - player.size.x;
    }
}

/// Resolve overlaps against every platform in order; later contacts win
fn resolve_platforms(state: &mut GameState) {
    let player = &mut state.player;
    player.grounded = false;

    for platform in &state.platforms {
        let bounds = platform.bounds();
        if !player.bounds().overlaps(&bounds) {
            continue;
        }

        match classify_contact(&player.bounds(), player.vel, &bounds) {
            PlatformContact::Landed => {
                player.pos.y = bounds.top() - player.size.y;
                player.vel.y = 0.0;
                player.grounded = true;
            }
            PlatformContact::HeadBump => {
                player.pos.y = bounds.bottom();
                player.vel.y = 0.0;
            }
            PlatformContact::Side => {
                if player.vel.x > 0.0 {
                    player.pos.x = bounds.left() - player.size.x;
                } else if player.vel.x < 0.0 {
                    player.pos.x = bounds.right();
                }
                player.vel.x = 0.0;
            }
        }
    }
}

/// Patrol enemies and apply contact damage (no invulnerability frames)
fn update_enemies(state: &mut GameState) -> Option<TerminalPayload> {
    let mut terminal = None;

    for i in 0..state.enemies.len() {
        state.enemies[i].patrol();
        let enemy = state.enemies[i].bounds();
        if !state.player.bounds().overlaps(&enemy) {
            continue;
        }

        state.health -= ENEMY_DAMAGE;
        let origin = state.player.pos;
        state.emit_particles(origin, HIT_PARTICLES, Color::CYAN);

        if state.player.pos.x < enemy.pos.x {
            state.player.pos.x -= KNOCKBACK;
        } else {
            state.player.pos.x += KNOCKBACK;
        }

        log::debug!("Enemy hit, health now {}", state.health);
        state.events.push(GameEvent::Damaged {
            health: state.health,
        });

        if state.health <= 0 {
            terminal = terminal.or(state.lose());
        }
    }

    terminal
}

/// Pick up overlapping coins, handle victory and level progression
fn collect_coins(state: &mut GameState) -> Option<TerminalPayload> {
    let mut terminal = None;
    let player = state.player.bounds();

    for i in 0..state.coins.len() {
        let coin = &mut state.coins[i];
        if coin.collected || !player.overlaps(&coin.bounds()) {
            continue;
        }

        coin.collected = true;
        let is_victory = coin.is_victory;
        let origin = coin.pos;

        state.score += COIN_SCORE;
        state.emit_particles(origin, COIN_PARTICLES, Color::GOLD);
        state.events.push(GameEvent::CoinCollected { score: state.score });

        if is_victory {
            terminal = terminal.or(state.win());
        }

        // The old coin list is gone after a level load
        if state.remaining_coins() == 0 && state.advance_level() {
            break;
        }
    }

    terminal
}
