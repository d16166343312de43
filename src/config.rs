//! Arena and movement configuration
//!
//! Every field has a default from [`crate::consts`]; a JSON document only
//! needs to name the fields it overrides.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Entities ===
    pub player_radius: f32,
    pub obstacle_radius: f32,
    /// Past positions kept for the player trail
    pub trail_length: usize,

    // === Movement ===
    pub max_speed: f32,
    /// Velocity multiplier per tick, in (0, 1]
    pub friction: f32,
    /// Velocity gained per nominal frame per held direction
    pub acceleration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_radius: PLAYER_RADIUS,
            obstacle_radius: OBSTACLE_RADIUS,
            trail_length: TRAIL_LENGTH,

            max_speed: PLAYER_MAX_SPEED,
            friction: PLAYER_FRICTION,
            acceleration: PLAYER_ACCEL,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_radius", self.player_radius),
            ("obstacle_radius", self.obstacle_radius),
            ("max_speed", self.max_speed),
            ("acceleration", self.acceleration),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::FrictionOutOfRange {
                value: self.friction,
            });
        }

        if self.trail_length == 0 {
            return Err(ConfigError::EmptyTrail);
        }
        if self.trail_length > MAX_TRAIL_LENGTH {
            return Err(ConfigError::TrailTooLong {
                value: self.trail_length,
                max: MAX_TRAIL_LENGTH,
            });
        }

        if self.arena_width < self.player_radius * 2.0 || self.arena_height < self.player_radius * 2.0
        {
            return Err(ConfigError::ArenaTooSmall {
                width: self.arena_width,
                height: self.arena_height,
                player_radius: self.player_radius,
            });
        }

        Ok(())
    }

    /// Center of the arena (player spawn point)
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Smallest position the player's center may occupy
    pub fn player_min(&self) -> Vec2 {
        Vec2::splat(self.player_radius)
    }

    /// Largest position the player's center may occupy
    pub fn player_max(&self) -> Vec2 {
        Vec2::new(
            self.arena_width - self.player_radius,
            self.arena_height - self.player_radius,
        )
    }

    /// Whether a point lies within the arena grown by `margin` on every side
    pub fn within_margin(&self, pos: Vec2, margin: f32) -> bool {
        pos.x > -margin
            && pos.x < self.arena_width + margin
            && pos.y > -margin
            && pos.y < self.arena_height + margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.center(), Vec2::new(400.0, 250.0));
        assert_eq!(config.trail_length, 18);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "max_speed": 9.0, "arena_width": 1024 }"#).unwrap();
        assert_eq!(config.max_speed, 9.0);
        assert_eq!(config.arena_width, 1024.0);
        assert_eq!(config.arena_height, ARENA_HEIGHT);
        assert_eq!(config.friction, PLAYER_FRICTION);
    }

    #[test]
    fn test_rejects_negative_radius() {
        let config = Config {
            player_radius: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "player_radius",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_rejects_bad_friction_and_trail() {
        let config = Config {
            friction: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::FrictionOutOfRange { .. })
        ));

        let config = Config {
            trail_length: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyTrail));
    }

    #[test]
    fn test_rejects_oversized_trail() {
        let json = format!(r#"{{ "trail_length": {} }}"#, usize::MAX);
        assert_eq!(
            Config::from_json(&json),
            Err(ConfigError::TrailTooLong {
                value: usize::MAX,
                max: MAX_TRAIL_LENGTH
            })
        );

        let config = Config {
            trail_length: MAX_TRAIL_LENGTH,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_arena_smaller_than_player() {
        let config = Config {
            arena_height: 20.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Config::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "friction": 0.0 }"#),
            Err(ConfigError::FrictionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_within_margin() {
        let config = Config::default();
        assert!(config.within_margin(Vec2::new(-20.0, 100.0), CULL_MARGIN));
        assert!(!config.within_margin(Vec2::new(-50.0, 100.0), CULL_MARGIN));
        assert!(!config.within_margin(Vec2::new(100.0, 551.0), CULL_MARGIN));
    }
}
