//! Horizontal camera that keeps the player centered inside the level

use crate::consts::{LEVEL_WIDTH, PLAYER_SIZE, VIEWPORT_WIDTH};

/// Camera offset for a player at `player_x`, clamped to the level bounds
pub fn follow(player_x: f32) -> f32 {
    let centered = player_x - VIEWPORT_WIDTH / 2.0 + PLAYER_SIZE / 2.0;
    centered.clamp(0.0, LEVEL_WIDTH - VIEWPORT_WIDTH)
}
