//! Per-frame simulation tick
//!
//! Core game loop that advances the session deterministically. `dt` is in
//! nominal frames (1.0 = 16.67 ms) and `now_ms` is a monotonic timestamp used
//! only by the spawn gate.

use super::collision::first_hit;
use super::kinematics::{apply_friction, clamp_speed, clamp_to_bounds};
use super::particles::{burst, update_particles};
use super::spawner::maybe_spawn;
use super::state::{BURST_COLOR, GameEvent, GamePhase, Session};
use crate::consts::*;
use crate::input::Directions;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directions currently held
    pub held: Directions,
    /// Start/restart request (one-shot)
    pub start: bool,
}

/// Advance the session by one frame
pub fn tick(state: &mut Session, input: &TickInput, dt: f32, now_ms: f64) {
    // No time may run backwards or skip more than a few frames
    let mut dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    };

    // A run started on this tick has not had any time elapse yet
    if input.start && state.start_game(now_ms) {
        dt = 0.0;
    }

    if state.phase == GamePhase::Playing {
        step_player(state, input.held, dt);
        maybe_spawn(state, now_ms);

        state.score += SCORE_PER_FRAME * dt;
        state.speed_mult = 1.0 + state.score * SPEED_MULT_PER_POINT;

        step_obstacles(state, dt);

        let hit = first_hit(state.player.pos, state.player.radius, &state.obstacles).map(|o| o.id);
        if let Some(id) = hit {
            kill_player(state, id);
        }
    }

    // Particles keep animating on the game-over screen
    update_particles(&mut state.particles, dt);

    state.last_tick_ms = now_ms;
}

/// Accelerate, apply friction, cap speed, integrate and record the trail
fn step_player(state: &mut Session, held: Directions, dt: f32) {
    let config = &state.config;
    let player = &mut state.player;

    player.vel += held.axis() * (config.acceleration * dt);
    player.vel = apply_friction(player.vel, config.friction);
    player.vel = clamp_speed(player.vel, config.max_speed);

    player.pos = clamp_to_bounds(
        player.pos + player.vel * dt,
        config.player_min(),
        config.player_max(),
    );

    player.record_trail(config.trail_length);
}

/// Move obstacles with the difficulty multiplier and cull those far outside
fn step_obstacles(state: &mut Session, dt: f32) {
    let step = dt * state.speed_mult;
    for obstacle in &mut state.obstacles {
        obstacle.pos += obstacle.vel * step;
    }

    let config = &state.config;
    state
        .obstacles
        .retain(|o| config.within_margin(o.pos, CULL_MARGIN));
}

fn kill_player(state: &mut Session, obstacle_id: u32) {
    let pos = state.player.pos;
    burst(state, pos, BURST_COLOR);

    let new_high = state.score > state.high_score;
    state.high_score = state.high_score.max(state.score);
    state.phase = GamePhase::Dead;
    state.events.push(GameEvent::Died {
        score: state.score,
        high_score: state.high_score,
        new_high,
    });

    log::info!(
        "Hit by obstacle {} - score {:.0}, best {:.0}{}",
        obstacle_id,
        state.score,
        state.high_score,
        if new_high { " (new best!)" } else { "" }
    );
}
