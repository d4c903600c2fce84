//! Hand-authored level layouts
//!
//! Pure data: the same level always produces the same layout, so a restart
//! reproduces the boot state exactly.

use super::state::{Coin, Color, Enemy, Level, Platform};
use crate::consts::{GROUND_HEIGHT, GROUND_Y, LEVEL_WIDTH};

/// Height of every floating platform
const PLATFORM_HEIGHT: f32 = 20.0;
const COIN_SIZE: f32 = 20.0;
const VICTORY_COIN_SIZE: f32 = 30.0;
const ENEMY_SIZE: f32 = 25.0;

/// Static entities of one level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelLayout {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub enemies: Vec<Enemy>,
}

/// Build the layout for `level`, ground platform first
pub fn build_level(level: Level) -> LevelLayout {
    let mut layout = LevelLayout {
        platforms: vec![Platform::new(
            0.0,
            GROUND_Y,
            LEVEL_WIDTH,
            GROUND_HEIGHT,
            Color::PINK,
        )],
        coins: Vec::new(),
        enemies: Vec::new(),
    };

    match level {
        Level::One => level_one(&mut layout),
        Level::Two => level_two(&mut layout),
        Level::Three => level_three(&mut layout),
    }

    layout
}

fn push_platforms(layout: &mut LevelLayout, spots: &[(f32, f32, f32)], color: Color) {
    layout.platforms.extend(
        spots
            .iter()
            .map(|&(x, y, width)| Platform::new(x, y, width, PLATFORM_HEIGHT, color)),
    );
}

/// Gentle staircase introduction: one coin above each platform
fn level_one(layout: &mut LevelLayout) {
    push_platforms(
        layout,
        &[
            (200.0, 350.0, 100.0),
            (400.0, 300.0, 80.0),
            (600.0, 250.0, 120.0),
            (850.0, 200.0, 100.0),
            (1100.0, 300.0, 150.0),
            (1400.0, 250.0, 80.0),
            (1650.0, 350.0, 100.0),
        ],
        Color::VIOLET,
    );

    for (x, y) in [
        (250.0, 320.0),
        (450.0, 270.0),
        (650.0, 220.0),
        (900.0, 170.0),
        (1150.0, 270.0),
        (1450.0, 220.0),
        (1700.0, 320.0),
    ] {
        layout.coins.push(Coin::new(x, y, COIN_SIZE));
    }

    layout
        .enemies
        .push(Enemy::new(500.0, 280.0, ENEMY_SIZE, 1.0, 100.0, Color::PINK));
    layout
        .enemies
        .push(Enemy::new(1200.0, 280.0, ENEMY_SIZE, 1.5, 150.0, Color::PINK));
}

/// Alternating high/low hops with a sine wave of coins overhead
fn level_two(layout: &mut LevelLayout) {
    push_platforms(
        layout,
        &[
            (150.0, 400.0, 80.0),
            (300.0, 300.0, 60.0),
            (450.0, 200.0, 60.0),
            (600.0, 300.0, 80.0),
            (750.0, 200.0, 60.0),
            (900.0, 300.0, 80.0),
            (1050.0, 200.0, 60.0),
            (1200.0, 300.0, 80.0),
            (1400.0, 350.0, 100.0),
        ],
        Color::PINK,
    );

    for i in 0..15 {
        let t = i as f32;
        layout
            .coins
            .push(Coin::new(200.0 + t * 100.0, 150.0 + t.sin() * 50.0, COIN_SIZE));
    }

    for i in 0..3 {
        let t = i as f32;
        layout.enemies.push(Enemy::new(
            400.0 + t * 300.0,
            280.0,
            ENEMY_SIZE,
            1.0 + t * 0.5,
            150.0,
            Color::VIOLET,
        ));
    }
}

/// Final gauntlet: dense zig-zag, fast enemies, single victory coin
fn level_three(layout: &mut LevelLayout) {
    let mut spots: Vec<(f32, f32, f32)> = (0..12)
        .map(|i| {
            let x = 100.0 + i as f32 * 100.0;
            let y = match i {
                0 => 400.0,
                i if i % 2 == 1 => 300.0,
                _ => 200.0,
            };
            (x, y, 60.0)
        })
        .collect();
    spots.push((1350.0, 350.0, 100.0));
    push_platforms(layout, &spots, Color::CYAN);

    layout
        .coins
        .push(Coin::victory(1450.0, 320.0, VICTORY_COIN_SIZE));

    for i in 0..5 {
        layout.enemies.push(Enemy::new(
            200.0 + i as f32 * 250.0,
            180.0,
            ENEMY_SIZE,
            2.0,
            200.0,
            Color::PINK,
        ));
    }
}
