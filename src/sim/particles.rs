//! Cosmetic particle bursts

use glam::Vec2;
use rand::Rng;

use super::state::{Color, Particle, Session};
use crate::consts::*;

/// Emit a ring of `BURST_PARTICLES` particles at `pos`
pub fn burst(state: &mut Session, pos: Vec2, color: Color) {
    state.particles.reserve(BURST_PARTICLES);
    for _ in 0..BURST_PARTICLES {
        let angle = state.rng.random::<f32>() * std::f32::consts::TAU;
        let speed = state.rng.random_range(BURST_MIN_SPEED..BURST_MAX_SPEED);
        state.particles.push(Particle {
            pos,
            vel: Vec2::from_angle(angle) * speed,
            color,
            life: 1.0,
        });
    }
}

/// Move particles, age them, and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>, dt: f32) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel * dt;
        particle.life -= PARTICLE_DECAY * dt;
    }
    particles.retain(|p| p.life > 0.0);
}
