//! Obstacle spawning
//!
//! Obstacles enter from a random edge, aimed roughly inward. Both the spawn
//! rate and the entry speed grow with score.

use glam::Vec2;
use rand::Rng;

use super::state::{Color, GameEvent, OBSTACLE_HUES, Obstacle, Session};
use crate::consts::*;

/// Milliseconds required between spawns at `score`
pub fn spawn_interval_ms(score: f32) -> f64 {
    (SPAWN_INTERVAL_BASE_MS - score as f64 * SPAWN_INTERVAL_PER_POINT).max(SPAWN_INTERVAL_MIN_MS)
}

/// Entry speed of a freshly spawned obstacle at `score`
pub fn spawn_speed(score: f32) -> f32 {
    OBSTACLE_BASE_SPEED + score * OBSTACLE_SPEED_PER_POINT
}

/// Arena edge an obstacle enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Unit vector pointing into the arena
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Top => Vec2::Y,
            Edge::Right => Vec2::NEG_X,
            Edge::Bottom => Vec2::NEG_Y,
            Edge::Left => Vec2::X,
        }
    }
}

/// Spawn one obstacle if the spawn interval has elapsed
///
/// Returns true when an obstacle was added.
pub fn maybe_spawn(state: &mut Session, now_ms: f64) -> bool {
    if now_ms - state.last_spawn_ms < spawn_interval_ms(state.score) {
        return false;
    }
    state.last_spawn_ms = now_ms;

    let width = state.config.arena_width;
    let height = state.config.arena_height;
    let speed = spawn_speed(state.score);
    let rng = &mut state.rng;

    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let along = rng.random::<f32>();
    let drift = (rng.random::<f32>() - 0.5) * speed;

    let pos = match edge {
        Edge::Top => Vec2::new(along * width, -SPAWN_OFFSET),
        Edge::Right => Vec2::new(width + SPAWN_OFFSET, along * height),
        Edge::Bottom => Vec2::new(along * width, height + SPAWN_OFFSET),
        Edge::Left => Vec2::new(-SPAWN_OFFSET, along * height),
    };
    // Perpendicular drift runs along the edge
    let inward = edge.inward();
    let vel = inward * speed + inward.perp() * drift;

    let hue = OBSTACLE_HUES[rng.random_range(0..OBSTACLE_HUES.len())];
    let radius = state.config.obstacle_radius;

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos,
        vel,
        radius,
        color: Color::hsl(hue, 90, 65),
    });
    state.events.push(GameEvent::Spawned { id });
    log::debug!("Spawned obstacle {} from {:?} at speed {:.2}", id, edge, speed);

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(seed: u64, now_ms: f64) -> Session {
        let mut state = Session::new(seed);
        state.start_game(now_ms);
        state
    }

    #[test]
    fn test_interval_shrinks_to_floor() {
        assert_eq!(spawn_interval_ms(0.0), 1200.0);
        assert_eq!(spawn_interval_ms(100.0), 1000.0);
        assert_eq!(spawn_interval_ms(300.0), 600.0);
        assert_eq!(spawn_interval_ms(5000.0), 600.0);
    }

    #[test]
    fn test_gate_blocks_until_interval_elapses() {
        let mut state = playing(3, 0.0);

        assert!(!maybe_spawn(&mut state, 500.0));
        assert!(state.obstacles.is_empty());

        assert!(maybe_spawn(&mut state, 1200.0));
        assert_eq!(state.obstacles.len(), 1);

        // Second call shortly after: gated
        assert!(!maybe_spawn(&mut state, 1700.0));
        assert_eq!(state.obstacles.len(), 1);

        assert!(maybe_spawn(&mut state, 2400.0));
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_gate_at_floor_interval() {
        let mut state = playing(3, 0.0);
        state.score = 400.0;

        assert!(maybe_spawn(&mut state, 600.0));
        assert!(!maybe_spawn(&mut state, 900.0));
        assert_eq!(state.obstacles.len(), 1);
        assert!(maybe_spawn(&mut state, 1200.0));
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawns_outside_edge_heading_inward() {
        let mut state = playing(11, 0.0);
        let mut now = 0.0;
        for _ in 0..200 {
            now += 1200.0;
            assert!(maybe_spawn(&mut state, now));
        }

        let config = state.config.clone();
        let speed = spawn_speed(0.0);
        for o in &state.obstacles {
            assert_eq!(o.radius, config.obstacle_radius);
            let outside_x = o.pos.x == -SPAWN_OFFSET || o.pos.x == config.arena_width + SPAWN_OFFSET;
            let outside_y = o.pos.y == -SPAWN_OFFSET || o.pos.y == config.arena_height + SPAWN_OFFSET;
            assert!(outside_x ^ outside_y, "spawned at {:?}", o.pos);

            // Inward component is the full speed, drift at most half of it
            let to_center = config.center() - o.pos;
            let (inward, drift) = if outside_x {
                (o.vel.x * to_center.x.signum(), o.vel.y)
            } else {
                (o.vel.y * to_center.y.signum(), o.vel.x)
            };
            assert!((inward - speed).abs() < 1e-5);
            assert!(drift.abs() <= speed * 0.5);

            assert!(matches!(
                o.color,
                Color::Hsl { hue, saturation: 90, lightness: 65 } if OBSTACLE_HUES.contains(&hue)
            ));
        }
    }

    #[test]
    fn test_uses_every_edge() {
        let mut state = playing(5, 0.0);
        let mut now = 0.0;
        for _ in 0..100 {
            now += 1200.0;
            maybe_spawn(&mut state, now);
        }
        let w = state.config.arena_width;
        let h = state.config.arena_height;
        let top = state.obstacles.iter().any(|o| o.pos.y < 0.0);
        let bottom = state.obstacles.iter().any(|o| o.pos.y > h);
        let left = state.obstacles.iter().any(|o| o.pos.x < 0.0);
        let right = state.obstacles.iter().any(|o| o.pos.x > w);
        assert!(top && bottom && left && right);
    }

    #[test]
    fn test_speed_scales_with_score() {
        assert_eq!(spawn_speed(0.0), 2.0);
        assert!((spawn_speed(200.0) - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let mut a = playing(99, 0.0);
        let mut b = playing(99, 0.0);
        for i in 1..20 {
            maybe_spawn(&mut a, i as f64 * 1200.0);
            maybe_spawn(&mut b, i as f64 * 1200.0);
        }
        let pa: Vec<_> = a.obstacles.iter().map(|o| (o.pos, o.vel)).collect();
        let pb: Vec<_> = b.obstacles.iter().map(|o| (o.pos, o.vel)).collect();
        assert_eq!(pa, pb);
    }
}
