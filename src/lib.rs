//! Nova Jump - a neon side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Simulation core (physics, collisions, levels, game state)
//! - `renderer`: WebGPU rendering of the simulation state
//! - `platform`: Browser input mapping
//! - `settings`: Visual preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Visible area (the canvas), in world units
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 500.0;

    /// Horizontal extent of every level
    pub const LEVEL_WIDTH: f32 = 2000.0;

    /// Ground platform, present in every level
    pub const GROUND_Y: f32 = 450.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Physics, per tick (one tick per displayed frame)
    pub const GRAVITY: f32 = 0.5;
    pub const FRICTION: f32 = 0.8;
    pub const JUMP_FORCE: f32 = -12.0;
    pub const MOVE_SPEED: f32 = 5.0;

    /// Player
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;
    /// Positions kept for the motion trail
    pub const TRAIL_LENGTH: usize = 10;

    /// Health economy
    pub const MAX_HEALTH: i32 = 100;
    pub const ENEMY_DAMAGE: i32 = 20;
    pub const KNOCKBACK: f32 = 50.0;

    /// Score per collected coin
    pub const COIN_SCORE: u64 = 100;
    /// Coin bobbing phase advance per tick
    pub const COIN_ANIMATION_STEP: f32 = 0.1;

    /// Particle bursts
    pub const JUMP_PARTICLES: usize = 10;
    pub const HIT_PARTICLES: usize = 20;
    pub const COIN_PARTICLES: usize = 15;
    /// Half-width of the uniform spawn velocity range
    pub const PARTICLE_SPREAD: f32 = 2.5;
    pub const PARTICLE_DRIFT: f32 = 0.1;
    pub const PARTICLE_DECAY: f32 = 0.02;

    /// Parallax factor of the background grid
    pub const GRID_PARALLAX: f32 = 0.3;
    pub const GRID_SPACING: f32 = 50.0;
}
