//! Scene assembly
//!
//! Turns a read-only view of the game state into one screen-space triangle
//! list. Draw order matches layering: grid, platforms, coins, enemies, trail,
//! player, particles.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{GRID_PARALLAX, GRID_SPACING, LEVEL_WIDTH, VIEWPORT_HEIGHT};
use crate::settings::Settings;
use crate::sim::{Color, GameState};

const EDGE_WIDTH: f32 = 2.0;
const COIN_BOB: f32 = 5.0;
const EYE_SIZE: f32 = 5.0;
const EYE_TOP: f32 = 5.0;
const PARTICLE_SIZE: f32 = 3.0;
const TRAIL_MAX_ALPHA: f32 = 0.5;
/// How far a halo extends past the shape it surrounds
const GLOW_SPREAD: f32 = 6.0;

/// Build the full frame for the current state
pub fn build_frame(state: &GameState, settings: &Settings) -> Vec<Vertex> {
    let mut frame = Frame {
        vertices: Vec::with_capacity(4096),
        camera: Vec2::new(state.camera_x, 0.0),
        glow: settings.effective_glow(),
        segments: settings.quality.circle_segments(),
    };

    if settings.parallax_grid {
        let scroll = if settings.reduced_motion {
            0.0
        } else {
            state.camera_x * GRID_PARALLAX
        };
        frame.grid(scroll);
    }

    for platform in &state.platforms {
        let pos = frame.to_screen(platform.pos);
        frame.glow_rect(pos, platform.size, platform.color);
        frame.push(shapes::rect(pos, platform.size, platform.color.rgba(1.0)));
        frame.push(shapes::rect_outline(
            pos,
            platform.size,
            EDGE_WIDTH,
            colors::PLATFORM_EDGE,
        ));
    }

    let bob_scale = settings.motion_scale();
    for coin in state.coins.iter().filter(|c| !c.collected) {
        let bob = coin.animation.sin() * COIN_BOB * bob_scale;
        let center = frame.to_screen(coin.pos + coin.size / 2.0) + Vec2::new(0.0, bob);
        let radius = coin.size.x / 2.0;
        let color = if coin.is_victory {
            Color::PINK
        } else {
            Color::GOLD
        };
        if frame.glow {
            let halo = Color::GOLD.rgba(colors::GLOW_ALPHA);
            frame.push(shapes::circle(center, radius + GLOW_SPREAD, halo, frame.segments));
        }
        frame.push(shapes::circle(center, radius, color.rgba(1.0), frame.segments));
        frame.push(shapes::circle(
            center,
            radius / 2.0,
            colors::COIN_CORE,
            frame.segments,
        ));
    }

    for enemy in &state.enemies {
        let pos = frame.to_screen(enemy.pos);
        frame.glow_rect(pos, enemy.size, enemy.color);
        frame.push(shapes::rect(pos, enemy.size, enemy.color.rgba(1.0)));
        frame.eyes(pos, 5.0, 15.0);
    }

    let player = &state.player;
    if settings.trails {
        let len = player.trail.len() as f32;
        for (i, &point) in player.trail.iter().enumerate() {
            let alpha = i as f32 / len * TRAIL_MAX_ALPHA;
            let pos = frame.to_screen(point);
            frame.push(shapes::rect(pos, player.size, Color::CYAN.rgba(alpha)));
        }
    }

    let pos = frame.to_screen(player.pos);
    frame.glow_rect(pos, player.size, Color::CYAN);
    frame.push(shapes::rect(pos, player.size, Color::CYAN.rgba(1.0)));
    frame.eyes(pos, 5.0, 20.0);

    if settings.particles {
        let size = Vec2::splat(PARTICLE_SIZE);
        for particle in &state.particles {
            let pos = frame.to_screen(particle.pos);
            frame.push(shapes::rect(pos, size, particle.color.rgba(particle.life)));
        }
    }

    frame.vertices
}

/// Accumulates vertices for one frame
struct Frame {
    vertices: Vec<Vertex>,
    camera: Vec2,
    glow: bool,
    segments: u32,
}

impl Frame {
    fn push(&mut self, vertices: Vec<Vertex>) {
        self.vertices.extend(vertices);
    }

    fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.camera
    }

    /// Vertical 1px lines every `GRID_SPACING` across the level, shifted by `scroll`
    fn grid(&mut self, scroll: f32) {
        let line = Vec2::new(1.0, VIEWPORT_HEIGHT);
        let mut x = 0.0;
        while x < LEVEL_WIDTH {
            self.push(shapes::rect(Vec2::new(x - scroll, 0.0), line, colors::GRID));
            x += GRID_SPACING;
        }
    }

    fn glow_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        if self.glow {
            let spread = Vec2::splat(GLOW_SPREAD);
            self.push(shapes::rect(
                pos - spread,
                size + spread * 2.0,
                color.rgba(colors::GLOW_ALPHA),
            ));
        }
    }

    /// Two white squares near the top edge, at the given x offsets
    fn eyes(&mut self, pos: Vec2, left: f32, right: f32) {
        let size = Vec2::splat(EYE_SIZE);
        for dx in [left, right] {
            self.push(shapes::rect(
                pos + Vec2::new(dx, EYE_TOP),
                size,
                colors::EYES,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityPreset;
    use crate::sim::{TickInput, tick};

    fn bare_settings() -> Settings {
        Settings {
            quality: QualityPreset::Low,
            particles: true,
            trails: true,
            parallax_grid: false,
            glow: false,
            reduced_motion: false,
        }
    }

    fn count_color(vertices: &[Vertex], color: [f32; 4]) -> usize {
        vertices.iter().filter(|v| v.color == color).count()
    }

    #[test]
    fn test_player_drawn_in_screen_space() {
        let mut state = GameState::new(1);
        state.camera_x = 300.0;
        state.player.pos = Vec2::new(700.0, 200.0);

        let vertices = build_frame(&state, &bare_settings());
        let player: Vec<&Vertex> = vertices
            .iter()
            .filter(|v| v.color == Color::CYAN.rgba(1.0))
            .collect();

        assert_eq!(player.len(), 6);
        let min_x = player.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        assert_eq!(min_x, 400.0);
    }

    #[test]
    fn test_collected_coins_not_drawn() {
        let mut state = GameState::new(1);
        let settings = bare_settings();
        let segments = settings.quality.circle_segments() as usize;
        let gold = Color::GOLD.rgba(1.0);

        let before = count_color(&build_frame(&state, &settings), gold);
        assert_eq!(before, 7 * segments * 3);

        state.coins[0].collected = true;
        let after = count_color(&build_frame(&state, &settings), gold);
        assert_eq!(after, 6 * segments * 3);
    }

    #[test]
    fn test_victory_coin_is_pink() {
        let mut state = GameState::new(1);
        state.level = crate::sim::Level::Three;
        state.load_level();
        state.enemies.clear();
        state.platforms.clear();

        let vertices = build_frame(&state, &bare_settings());
        assert_eq!(count_color(&vertices, Color::GOLD.rgba(1.0)), 0);
        assert!(count_color(&vertices, Color::PINK.rgba(1.0)) > 0);
    }

    #[test]
    fn test_trail_fades_in_toward_player() {
        let mut state = GameState::new(1);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        let vertices = build_frame(&state, &bare_settings());

        // Oldest trail entry is fully transparent, newest is at 0.45
        assert_eq!(count_color(&vertices, Color::CYAN.rgba(0.0)), 6);
        assert_eq!(count_color(&vertices, Color::CYAN.rgba(0.45)), 6);
    }

    #[test]
    fn test_disabled_layers_are_skipped() {
        let mut state = GameState::new(1);
        state.emit_particles(Vec2::new(100.0, 100.0), 5, Color::GOLD);
        for _ in 0..3 {
            tick(&mut state, &TickInput::default());
        }

        let full = build_frame(&state, &bare_settings());
        let lean = build_frame(
            &state,
            &Settings {
                particles: false,
                trails: false,
                ..bare_settings()
            },
        );
        // 5 particle quads and 3 trail quads
        assert_eq!(full.len() - lean.len(), (5 + 3) * 6);
    }

    #[test]
    fn test_grid_scrolls_slower_than_camera() {
        let mut state = GameState::new(1);
        state.camera_x = 100.0;
        let settings = Settings {
            parallax_grid: true,
            ..bare_settings()
        };

        let vertices = build_frame(&state, &settings);
        let first_line = vertices
            .iter()
            .filter(|v| v.color == colors::GRID)
            .map(|v| v.position[0])
            .fold(f32::MAX, f32::min);
        assert_eq!(first_line, -30.0);
    }

    #[test]
    fn test_glow_adds_halos() {
        let state = GameState::new(1);
        let plain = build_frame(&state, &bare_settings());
        let glowing = build_frame(
            &state,
            &Settings {
                quality: QualityPreset::Medium,
                glow: true,
                ..bare_settings()
            },
        );
        assert!(glowing.len() > plain.len());
    }
}
