//! Frame driver
//!
//! Sits between whatever schedules frames (display refresh, a fixed-rate
//! loop, a test) and the simulation. Each call to [`FrameDriver::frame`]
//! turns a wall-clock timestamp into a normalized, clamped dt and runs one
//! tick.

use crate::config::Config;
use crate::consts::{MAX_FRAME_DT, NOMINAL_FRAME_MS};
use crate::error::ConfigError;
use crate::input::InputSource;
use crate::sim::{GameEvent, GamePhase, Session, TickInput, tick};
use crate::snapshot::Snapshot;

/// Convert elapsed milliseconds to nominal frames, clamped to `[0, MAX_FRAME_DT]`
pub fn frame_dt(elapsed_ms: f64) -> f32 {
    if !elapsed_ms.is_finite() {
        return 0.0;
    }
    (elapsed_ms / NOMINAL_FRAME_MS).clamp(0.0, MAX_FRAME_DT as f64) as f32
}

/// Owns the session and feeds it one tick per frame
#[derive(Debug, Clone)]
pub struct FrameDriver {
    session: Session,
    last_frame_ms: Option<f64>,
}

impl FrameDriver {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            last_frame_ms: None,
        }
    }

    /// Build a driver around a fresh session, validating `config`
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Ok(Self::new(Session::with_config(config, seed)?))
    }

    /// Run one frame at `now_ms` and return what happened
    pub fn frame(&mut self, input: &mut dyn InputSource, now_ms: f64) -> Vec<GameEvent> {
        let dt = match self.last_frame_ms {
            Some(last) => frame_dt(now_ms - last),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        input.observe(&self.session);
        // Start requests while playing are dropped, not queued
        let start = input.consume_start_signal() && self.session.phase != GamePhase::Playing;
        let tick_input = TickInput {
            held: input.held_directions(),
            start,
        };

        tick(&mut self.session, &tick_input, dt, now_ms);
        self.session.drain_events()
    }

    /// Forget the previous frame time (e.g. after the tab was hidden)
    pub fn reset_clock(&mut self) {
        self.last_frame_ms = None;
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read-only view for presentation
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session)
    }
}
