//! Visual settings and preferences
//!
//! Read as JSON from LocalStorage at startup. Game progress is never saved.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    /// Triangles per coin circle
    pub fn circle_segments(&self) -> u32 {
        match self {
            QualityPreset::Low => 8,
            QualityPreset::Medium => 16,
            QualityPreset::High => 32,
        }
    }

    /// Whether neon halos are drawn at all
    pub fn glow_enabled(&self) -> bool {
        !matches!(self, QualityPreset::Low)
    }
}

/// Visual preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    /// Jump, hit and coin bursts
    pub particles: bool,
    /// Fading afterimages behind the player
    pub trails: bool,
    /// Scrolling background grid
    pub parallax_grid: bool,
    /// Neon halos around entities
    pub glow: bool,

    // === Accessibility ===
    /// Freeze coin bobbing and grid scrolling
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            trails: true,
            parallax_grid: true,
            glow: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective glow (respects the preset)
    pub fn effective_glow(&self) -> bool {
        self.glow && self.quality.glow_enabled()
    }

    /// Coin bob amplitude multiplier (0 with reduced motion)
    pub fn motion_scale(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { 1.0 }
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "nova_jump_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native builds have no storage
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
