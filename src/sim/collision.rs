//! Circle-circle hit detection
//!
//! The only collision in the game: the player against each obstacle. A hit
//! requires the circles to overlap by more than the forgiveness margin.

use glam::Vec2;

use super::kinematics::distance;
use super::state::Obstacle;
use crate::consts::COLLISION_FORGIVENESS;

/// Check whether two circles overlap by more than `forgiveness`
#[inline]
pub fn circles_hit(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32, forgiveness: f32) -> bool {
    distance(a_pos, b_pos) < a_radius + b_radius - forgiveness
}

/// Find the earliest-spawned obstacle touching the player
///
/// Obstacles are kept in spawn order, so the first match is the one that
/// gets the blame when several overlap on the same tick.
pub fn first_hit<'a>(
    player_pos: Vec2,
    player_radius: f32,
    obstacles: &'a [Obstacle],
) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|o| circles_hit(player_pos, player_radius, o.pos, o.radius, COLLISION_FORGIVENESS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;

    fn obstacle(id: u32, pos: Vec2) -> Obstacle {
        Obstacle {
            id,
            pos,
            vel: Vec2::ZERO,
            radius: 14.0,
            color: Color::hsl(190, 90, 65),
        }
    }

    #[test]
    fn test_forgiveness_margin() {
        let player = Vec2::new(100.0, 100.0);
        // 18 + 14 - 4 = 28: exactly at the margin is not a hit
        assert!(!circles_hit(player, 18.0, Vec2::new(128.0, 100.0), 14.0, 4.0));
        assert!(circles_hit(player, 18.0, Vec2::new(127.9, 100.0), 14.0, 4.0));
        // Touching edges (distance 32) is inside the forgiveness band
        assert!(!circles_hit(player, 18.0, Vec2::new(132.0, 100.0), 14.0, 4.0));
    }

    #[test]
    fn test_stacked_obstacles_outside_margin_miss() {
        let player = Vec2::new(400.0, 250.0);
        let obstacles = [
            obstacle(1, Vec2::new(400.0, 290.0)),
            obstacle(2, Vec2::new(400.0, 290.0)),
        ];
        assert!(first_hit(player, 18.0, &obstacles).is_none());
    }

    #[test]
    fn test_earliest_spawned_wins() {
        let player = Vec2::new(400.0, 250.0);
        let obstacles = [
            obstacle(3, Vec2::new(600.0, 250.0)),
            obstacle(4, Vec2::new(405.0, 250.0)),
            obstacle(5, Vec2::new(400.0, 250.0)),
        ];
        let hit = first_hit(player, 18.0, &obstacles).map(|o| o.id);
        assert_eq!(hit, Some(4));
    }
}
