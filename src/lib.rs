//! Circle Runner - dodge the circles, survive as long as you can
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, phases)
//! - `input`: Held-direction input sources (keyboard, demo autopilot)
//! - `driver`: Frame driver turning wall-clock timestamps into ticks
//! - `snapshot`: Read-only per-frame view for presentation
//! - `config`: Tunable arena and movement parameters
//! - `renderer`: Canvas 2D presentation (browser only)

pub mod config;
pub mod driver;
pub mod error;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod sim;
pub mod snapshot;

pub use config::Config;
pub use driver::FrameDriver;
pub use error::ConfigError;
pub use input::{Autopilot, Direction, Directions, InputSource, Keyboard};
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 18.0;
    /// Directional acceleration per nominal frame
    pub const PLAYER_ACCEL: f32 = 0.45;
    /// Velocity multiplier applied every tick
    pub const PLAYER_FRICTION: f32 = 0.88;
    pub const PLAYER_MAX_SPEED: f32 = 6.0;
    /// Number of past positions kept for the trail
    pub const TRAIL_LENGTH: usize = 18;
    /// Longest trail a config may ask for
    pub const MAX_TRAIL_LENGTH: usize = 1024;

    /// Obstacle defaults
    pub const OBSTACLE_RADIUS: f32 = 14.0;
    /// Obstacles spawn this far outside the arena edge
    pub const SPAWN_OFFSET: f32 = 20.0;
    /// Obstacles are culled once this far outside the arena
    pub const CULL_MARGIN: f32 = 50.0;
    /// Overlap allowed before a hit registers
    pub const COLLISION_FORGIVENESS: f32 = 4.0;

    /// Spawn interval (ms) at score 0, shrinking by `SPAWN_INTERVAL_PER_POINT` per point
    pub const SPAWN_INTERVAL_BASE_MS: f64 = 1200.0;
    pub const SPAWN_INTERVAL_PER_POINT: f64 = 2.0;
    pub const SPAWN_INTERVAL_MIN_MS: f64 = 600.0;
    /// Obstacle base speed and per-point increase
    pub const OBSTACLE_BASE_SPEED: f32 = 2.0;
    pub const OBSTACLE_SPEED_PER_POINT: f32 = 0.015;

    /// Score gained per nominal frame survived
    pub const SCORE_PER_FRAME: f32 = 0.5;
    /// Obstacle speed multiplier gained per point
    pub const SPEED_MULT_PER_POINT: f32 = 0.005;

    /// Death burst
    pub const BURST_PARTICLES: usize = 20;
    pub const BURST_MIN_SPEED: f32 = 2.0;
    pub const BURST_MAX_SPEED: f32 = 7.0;
    /// Particle life lost per nominal frame
    pub const PARTICLE_DECAY: f32 = 0.03;
    /// Particle draw radius at full life
    pub const PARTICLE_RADIUS: f32 = 4.0;

    /// Nominal frame duration (ms) that dt = 1.0 corresponds to
    pub const NOMINAL_FRAME_MS: f64 = 16.67;
    /// Largest dt a single tick may advance
    pub const MAX_FRAME_DT: f32 = 3.0;
}
