//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - One tick per displayed frame, constants are per tick
//! - Seeded RNG only (particles are the only consumer)
//! - Stable iteration order (level layout order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod level;
pub mod particles;
pub mod state;
pub mod tick;

pub use collision::{Aabb, PlatformContact, classify_contact};
pub use level::{LevelLayout, build_level};
pub use particles::Particle;
pub use state::{
    Coin, Color, Enemy, GameEvent, GamePhase, GameState, Level, Platform, Player,
    TerminalPayload, Trail,
};
pub use tick::{TickInput, TickReport, tick};
