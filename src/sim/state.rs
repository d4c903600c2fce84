//! Game state and core simulation types
//!
//! The simulation owns every entity; collaborators (renderer, HUD) only read
//! it between ticks.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::level::build_level;
use super::particles::{self, Particle};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Health ran out
    GameOver,
    /// Victory coin collected
    Victory,
}

/// One of the three hand-authored levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    One,
    Two,
    Three,
}

impl Level {
    /// 1-based level number shown in the HUD
    pub fn number(self) -> u32 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(Level::One),
            2 => Some(Level::Two),
            3 => Some(Level::Three),
            _ => None,
        }
    }

    /// The level after this one, if any
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }
}

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const CYAN: Color = Color(0x05d9e8);
    pub const PINK: Color = Color(0xff2a6d);
    pub const VIOLET: Color = Color(0x7700ff);
    pub const GOLD: Color = Color(0xffd93d);
    pub const WHITE: Color = Color(0xffffff);

    /// sRGB channels in 0..=1 plus the given alpha
    pub fn rgba(self, alpha: f32) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, alpha]
    }
}

/// Something that happened during a tick (for logging/feedback)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Jumped,
    Damaged { health: i32 },
    CoinCollected { score: u64 },
    LevelUp { level: u32 },
    GameOver { final_score: u64 },
    Victory { final_score: u64 },
    Restarted,
}

/// Bounded history of recent player positions (oldest first)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec2>,
}

impl Trail {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TRAIL_LENGTH + 1),
        }
    }

    /// Append a position, dropping the oldest past `TRAIL_LENGTH`
    pub fn record(&mut self, pos: Vec2) {
        self.points.push_back(pos);
        while self.points.len() > TRAIL_LENGTH {
            self.points.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

/// The player-controlled square
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub grounded: bool,
    pub trail: Trail,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            size: Vec2::splat(PLAYER_SIZE),
            vel: Vec2::ZERO,
            grounded: false,
            trail: Trail::new(),
        }
    }
}

impl Player {
    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move to the spawn point without touching velocity
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }
}

/// Static solid rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Collectible coin
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    /// Collecting this coin wins the game
    pub is_victory: bool,
    /// Bobbing phase (radians), only advances while uncollected
    pub animation: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            collected: false,
            is_victory: false,
            animation: 0.0,
        }
    }

    pub fn victory(x: f32, y: f32, size: f32) -> Self {
        Self {
            is_victory: true,
            ..Self::new(x, y, size)
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Enemy patrolling horizontally around its anchor
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: Vec2,
    pub vel_x: f32,
    /// Max distance from `start_x` before turning around
    pub range: f32,
    pub start_x: f32,
    pub color: Color,
}

impl Enemy {
    pub fn new(x: f32, y: f32, size: f32, vel_x: f32, range: f32, color: Color) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::splat(size),
            vel_x,
            range,
            start_x: x,
            color,
        }
    }

    /// Advance one step; reverse once past either end of the patrol range.
    /// The overshoot is left in place and walked back on following ticks.
    pub fn patrol(&mut self) {
        self.pos.x += self.vel_x;
        if self.pos.x > self.start_x + self.range || self.pos.x < self.start_x - self.range {
            self.vel_x = -self.vel_x;
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Payload shown by the overlay when the run ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalPayload {
    pub title: &'static str,
    pub message: String,
    pub final_score: u64,
}

impl TerminalPayload {
    fn new(title: &'static str, final_score: u64) -> Self {
        Self {
            title,
            message: format!("Final Score: {}", final_score),
            final_score,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the particle RNG
    pub seed: u64,
    rng: Pcg32,
    pub score: u64,
    pub level: Level,
    /// Can dip below zero on the tick that ends the run
    pub health: i32,
    pub phase: GamePhase,
    /// Horizontal viewport offset
    pub camera_x: f32,
    /// Simulated ticks since boot (not reset by restart)
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events since the last report
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on level 1
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            level: Level::One,
            health: MAX_HEALTH,
            phase: GamePhase::Running,
            camera_x: 0.0,
            time_ticks: 0,
            player: Player::default(),
            platforms: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        };

        state.load_level();
        state
    }

    /// Replace platforms, coins and enemies with the current level's layout
    pub fn load_level(&mut self) {
        let layout = build_level(self.level);
        log::info!(
            "Level {}: {} platforms, {} coins, {} enemies",
            self.level.number(),
            layout.platforms.len(),
            layout.coins.len(),
            layout.enemies.len()
        );
        self.platforms = layout.platforms;
        self.coins = layout.coins;
        self.enemies = layout.enemies;
    }

    /// Back to a fresh level-1 run. The only way out of a terminal phase.
    pub fn restart(&mut self) {
        self.score = 0;
        self.level = Level::One;
        self.health = MAX_HEALTH;
        self.phase = GamePhase::Running;
        self.camera_x = 0.0;

        self.player.respawn();
        self.player.vel = Vec2::ZERO;
        self.player.grounded = false;
        self.player.trail.clear();

        self.particles.clear();
        self.events.clear();
        self.events.push(GameEvent::Restarted);

        self.load_level();
        log::info!("Game restarted");
    }

    pub fn game_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn victory(&self) -> bool {
        self.phase == GamePhase::Victory
    }

    /// Health as a 0..=1 fraction for the health bar
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / MAX_HEALTH as f32).clamp(0.0, 1.0)
    }

    /// Spawn a particle burst from the game's seeded RNG
    pub fn emit_particles(&mut self, origin: Vec2, count: usize, color: Color) {
        particles::emit(&mut self.particles, &mut self.rng, origin, count, color);
    }

    /// Uncollected coins that must be picked up to clear the level
    pub fn remaining_coins(&self) -> usize {
        self.coins
            .iter()
            .filter(|c| !c.collected && !c.is_victory)
            .count()
    }

    /// End the run with health depleted. Returns the payload on transition.
    pub(crate) fn lose(&mut self) -> Option<TerminalPayload> {
        if !self.game_running() {
            return None;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            final_score: self.score,
        });
        log::info!("Game over with score {}", self.score);
        Some(TerminalPayload::new("GAME OVER", self.score))
    }

    /// End the run by collecting the victory coin
    pub(crate) fn win(&mut self) -> Option<TerminalPayload> {
        if !self.game_running() {
            return None;
        }
        self.phase = GamePhase::Victory;
        self.events.push(GameEvent::Victory {
            final_score: self.score,
        });
        log::info!("Victory with score {}", self.score);
        Some(TerminalPayload::new("VICTORY!", self.score))
    }

    /// Advance to the next level if there is one, keeping player momentum
    pub(crate) fn advance_level(&mut self) -> bool {
        let Some(next) = self.level.next() else {
            return false;
        };
        self.level = next;
        self.player.respawn();
        self.events.push(GameEvent::LevelUp {
            level: next.number(),
        });
        self.load_level();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_numbering() {
        assert_eq!(Level::One.next(), Some(Level::Two));
        assert_eq!(Level::Two.next(), Some(Level::Three));
        assert_eq!(Level::Three.next(), None);
        assert_eq!(Level::from_number(0), None);
        assert_eq!(Level::from_number(4), None);
        assert_eq!(Level::from_number(2).map(Level::number), Some(2));
    }

    #[test]
    fn test_trail_drops_oldest() {
        let mut trail = Trail::new();
        for i in 0..15 {
            trail.record(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        assert_eq!(xs.first(), Some(&5.0));
        assert_eq!(xs.last(), Some(&14.0));
    }

    #[test]
    fn test_enemy_reverses_past_range() {
        let mut enemy = Enemy::new(500.0, 280.0, 25.0, 1.0, 100.0, Color::PINK);
        enemy.pos.x = 600.0;
        enemy.patrol();
        assert_eq!(enemy.pos.x, 601.0);
        assert!(enemy.vel_x < 0.0);

        enemy.patrol();
        assert_eq!(enemy.pos.x, 600.0);
        assert!(enemy.vel_x < 0.0, "walking back inside the range keeps direction");
    }

    #[test]
    fn test_enemy_stays_near_range() {
        let mut enemy = Enemy::new(1200.0, 280.0, 25.0, 1.5, 150.0, Color::PINK);
        for _ in 0..2000 {
            enemy.patrol();
            let offset = (enemy.pos.x - enemy.start_x).abs();
            assert!(offset <= enemy.range + enemy.vel_x.abs());
        }
    }

    #[test]
    fn test_color_channels() {
        let [r, g, b, a] = Color::GOLD.rgba(0.5);
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 217.0 / 255.0).abs() < 1e-6);
        assert!((b - 61.0 / 255.0).abs() < 1e-6);
        assert_eq!(a, 0.5);
    }

    #[test]
    fn test_new_state_is_running_level_one() {
        let state = GameState::new(7);
        assert!(state.game_running());
        assert!(!state.game_over());
        assert!(!state.victory());
        assert_eq!(state.level, Level::One);
        assert_eq!(state.health, MAX_HEALTH);
        assert_eq!(state.health_fraction(), 1.0);
        assert_eq!(state.remaining_coins(), 7);
    }

    #[test]
    fn test_terminal_transitions_are_exclusive() {
        let mut state = GameState::new(7);
        let payload = state.lose().expect("first transition reports");
        assert_eq!(payload.title, "GAME OVER");
        assert_eq!(payload.message, "Final Score: 0");
        assert!(state.win().is_none());
        assert!(state.game_over());
        assert!(!state.victory());
    }
}
