//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time comes in only through `tick` arguments
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod particles;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{circles_hit, first_hit};
pub use particles::burst;
pub use spawner::{maybe_spawn, spawn_interval_ms, spawn_speed};
pub use state::{
    BURST_COLOR, Color, GameEvent, GamePhase, OBSTACLE_HUES, Obstacle, Particle, Player, Session,
    TrailPoint,
};
pub use tick::{TickInput, tick};
