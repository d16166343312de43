//! Per-frame world view for presentation
//!
//! Presentation code draws from a `Snapshot` and never touches the session.
//! Derived visual quantities (particle size/alpha, trail fade) are computed
//! here so the renderer stays free of gameplay knowledge.

use serde::Serialize;

use crate::consts::PARTICLE_RADIUS;
use crate::sim::{Color, GamePhase, Session};

/// Trail opacity at the newest point
const TRAIL_ALPHA: f32 = 0.35;
/// Trail radius at the newest point, relative to the player radius
const TRAIL_SCALE: f32 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrailSprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub alpha: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Newest first
    pub trail: Vec<TrailSprite>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub arena_width: f32,
    pub arena_height: f32,
    pub phase: GamePhase,
    pub score: f32,
    pub high_score: f32,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub particles: Vec<ParticleView>,
}

impl Snapshot {
    pub fn capture(session: &Session) -> Self {
        let player = &session.player;
        let trail_len = session.config.trail_length as f32;

        let trail = player
            .trail
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let fade = 1.0 - i as f32 / trail_len;
                TrailSprite {
                    x: point.pos.x,
                    y: point.pos.y,
                    radius: player.radius * fade * TRAIL_SCALE,
                    alpha: fade * TRAIL_ALPHA,
                }
            })
            .collect();

        Self {
            arena_width: session.config.arena_width,
            arena_height: session.config.arena_height,
            phase: session.phase,
            score: session.score,
            high_score: session.high_score,
            player: PlayerView {
                x: player.pos.x,
                y: player.pos.y,
                radius: player.radius,
                trail,
            },
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    x: o.pos.x,
                    y: o.pos.y,
                    radius: o.radius,
                    color: o.color,
                })
                .collect(),
            particles: session
                .particles
                .iter()
                .map(|p| {
                    let life = p.life.clamp(0.0, 1.0);
                    ParticleView {
                        x: p.pos.x,
                        y: p.pos.y,
                        radius: PARTICLE_RADIUS * life,
                        color: p.color,
                        alpha: life,
                    }
                })
                .collect(),
        }
    }

    /// Score as shown on the HUD (whole points)
    pub fn score_display(&self) -> u32 {
        self.score.max(0.0).floor() as u32
    }

    pub fn high_score_display(&self) -> u32 {
        self.high_score.max(0.0).floor() as u32
    }
}
