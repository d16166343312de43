//! Configuration errors
//!
//! The simulation itself has no failure modes; only building a session from
//! bad parameters can fail.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A length or rate that must be finite and strictly positive was not
    NonPositive { field: &'static str, value: f32 },
    /// Friction must lie in (0, 1]
    FrictionOutOfRange { value: f32 },
    /// The trail must hold at least one point
    EmptyTrail,
    /// The trail is longer than `max` points
    TrailTooLong { value: usize, max: usize },
    /// The player does not fit inside the arena
    ArenaTooSmall { width: f32, height: f32, player_radius: f32 },
    /// The JSON document could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be finite and positive, got {value}")
            }
            Self::FrictionOutOfRange { value } => {
                write!(f, "friction must be in (0, 1], got {value}")
            }
            Self::EmptyTrail => write!(f, "trail_length must be at least 1"),
            Self::TrailTooLong { value, max } => {
                write!(f, "trail_length must be at most {max}, got {value}")
            }
            Self::ArenaTooSmall {
                width,
                height,
                player_radius,
            } => write!(
                f,
                "arena {width}x{height} cannot hold a player of radius {player_radius}"
            ),
            Self::Parse(msg) => write!(f, "invalid config json: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
