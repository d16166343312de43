//! Velocity and position helpers
//!
//! Small pure functions shared by the player and obstacle updates.

use glam::Vec2;

/// Apply isotropic friction (`factor` in (0, 1])
#[inline]
pub fn apply_friction(vel: Vec2, factor: f32) -> Vec2 {
    vel * factor
}

/// Rescale `vel` uniformly so its magnitude does not exceed `max_speed`
#[inline]
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Clamp a position into the box `[min, max]` (hard walls, no bounce)
#[inline]
pub fn clamp_to_bounds(pos: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    pos.clamp(min, max)
}

/// Euclidean distance between two centers
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
