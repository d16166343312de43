//! Session state and core simulation types
//!
//! The `Session` is the single source of truth for a run; `tick` is the only
//! thing that mutates it during play.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::Config;
use crate::error::ConfigError;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// Title screen, nothing has been played yet
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended; waiting for a restart
    Dead,
}

/// Display color for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent
    Hsl { hue: u16, saturation: u8, lightness: u8 },
    /// Packed 0xRRGGBB
    Rgb(u32),
}

impl Color {
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS color string
    pub fn css(&self) -> String {
        match self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => format!("hsl({hue}, {saturation}%, {lightness}%)"),
            Color::Rgb(rgb) => format!("#{:06x}", rgb & 0x00ff_ffff),
        }
    }
}

/// Obstacle hues (degrees), all at 90% saturation / 65% lightness
pub const OBSTACLE_HUES: [u16; 5] = [190, 280, 340, 50, 140];

/// Color of the death burst
pub const BURST_COLOR: Color = Color::Rgb(0xff6af0);

/// Trail point for player rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
}

/// The player's circle
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Trail history for rendering (newest first)
    pub trail: Vec<TrailPoint>,
}

impl Player {
    /// A motionless player at `pos` with an empty trail
    pub fn new(pos: Vec2, radius: f32, trail_length: usize) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            trail: Vec::with_capacity(trail_length),
        }
    }

    /// Record current position to trail (call each playing tick)
    pub fn record_trail(&mut self, max_len: usize) {
        self.trail.insert(0, TrailPoint { pos: self.pos });
        self.trail.truncate(max_len);
    }
}

/// An obstacle circle drifting through the arena
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Spawn order; lower ids spawned earlier
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// A particle for visual effects
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub life: f32, // 0-1, decreases over time
}

/// Things that happened during a tick, drained by the frame driver
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A run began (from idle or after death)
    Started,
    /// An obstacle entered the arena
    Spawned { id: u32 },
    /// The player was hit
    Died {
        score: f32,
        high_score: f32,
        new_high: bool,
    },
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct Session {
    /// Validated parameters
    pub config: Config,
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current (or last) run
    pub score: f32,
    /// Best score this process has seen
    pub high_score: f32,
    /// Obstacle speed multiplier, derived from score
    pub speed_mult: f32,
    /// Timestamp (ms) of the last spawn
    pub last_spawn_ms: f64,
    /// Timestamp (ms) of the last tick
    pub last_tick_ms: f64,
    pub player: Player,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Create an idle session with default configuration
    pub fn new(seed: u64) -> Self {
        Self::build(Config::default(), seed)
    }

    /// Create an idle session, rejecting invalid configuration up front
    pub fn with_config(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: Config, seed: u64) -> Self {
        let player = Player::new(config.center(), config.player_radius, config.trail_length);
        Self {
            config,
            phase: GamePhase::Idle,
            score: 0.0,
            high_score: 0.0,
            speed_mult: 1.0,
            last_spawn_ms: 0.0,
            last_tick_ms: 0.0,
            player,
            obstacles: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a fresh run at `now_ms`
    ///
    /// Ignored while a run is already in progress. The high score and RNG
    /// stream carry over.
    pub fn start_game(&mut self, now_ms: f64) -> bool {
        if self.phase == GamePhase::Playing {
            return false;
        }

        self.player = Player::new(
            self.config.center(),
            self.config.player_radius,
            self.config.trail_length,
        );
        self.obstacles.clear();
        self.particles.clear();
        self.score = 0.0;
        self.speed_mult = 1.0;
        self.last_spawn_ms = now_ms;
        self.last_tick_ms = now_ms;
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::Started);

        log::info!("Run started (high score {:.0})", self.high_score);
        true
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = Session::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.pos, Vec2::new(400.0, 250.0));
        assert_eq!(state.score, 0.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_with_config_fails_fast() {
        let config = Config {
            obstacle_radius: 0.0,
            ..Default::default()
        };
        assert!(Session::with_config(config, 1).is_err());

        let config = Config {
            trail_length: usize::MAX,
            ..Default::default()
        };
        assert!(matches!(
            Session::with_config(config, 1),
            Err(ConfigError::TrailTooLong { .. })
        ));
    }

    #[test]
    fn test_start_resets_run_but_keeps_high_score() {
        let mut state = Session::new(1);
        state.high_score = 42.0;
        state.phase = GamePhase::Dead;
        state.score = 42.0;
        state.player.pos = Vec2::new(30.0, 30.0);
        state.player.vel = Vec2::new(3.0, 0.0);
        state.player.record_trail(18);
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            color: BURST_COLOR,
            life: 0.5,
        });

        assert!(state.start_game(1000.0));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0.0);
        assert_eq!(state.high_score, 42.0);
        assert_eq!(state.speed_mult, 1.0);
        assert_eq!(state.player.pos, state.config.center());
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(state.player.trail.is_empty());
        assert!(state.particles.is_empty());
        assert_eq!(state.last_spawn_ms, 1000.0);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = Session::new(1);
        state.start_game(0.0);
        state.score = 10.0;
        assert!(!state.start_game(500.0));
        assert_eq!(state.score, 10.0);
    }

    #[test]
    fn test_trail_is_bounded_newest_first() {
        let mut player = Player::new(Vec2::ZERO, 18.0, 3);
        for i in 0..5 {
            player.pos = Vec2::splat(i as f32);
            player.record_trail(3);
        }
        let xs: Vec<f32> = player.trail.iter().map(|t| t.pos.x).collect();
        assert_eq!(xs, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::hsl(190, 90, 65).css(), "hsl(190, 90%, 65%)");
        assert_eq!(BURST_COLOR.css(), "#ff6af0");
    }
}
