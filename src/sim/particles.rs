//! Short-lived feedback particles (jumps, hits, coin pickups)

use glam::Vec2;
use rand::Rng;

use super::state::Color;
use crate::consts::{PARTICLE_DECAY, PARTICLE_DRIFT, PARTICLE_SPREAD};

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// 1.0 at spawn, removed once it reaches 0
    pub life: f32,
}

/// Spawn `count` particles at `origin` with independent uniform velocities
pub fn emit<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    rng: &mut R,
    origin: Vec2,
    count: usize,
    color: Color,
) {
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
            rng.random_range(-PARTICLE_SPREAD..PARTICLE_SPREAD),
        );
        particles.push(Particle {
            pos: origin,
            vel,
            color,
            life: 1.0,
        });
    }
}

/// Move, drift downward, fade, and drop dead particles
pub fn update(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += PARTICLE_DRIFT;
        particle.life -= PARTICLE_DECAY;
    }
    particles.retain(|p| p.life > 0.0);
}
