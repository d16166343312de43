//! Input sources
//!
//! The simulation only ever sees a set of held directions and a one-shot
//! start signal. Raw device events stay on this side of the boundary.

use glam::Vec2;

use crate::sim::{GamePhase, Session};

/// A logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Set of currently held directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }

    /// Sum of unit vectors for the held directions (screen space, +y down)
    ///
    /// Opposing directions cancel; diagonals are not normalized.
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        axis
    }
}

/// Anything that can drive the player
pub trait InputSource {
    /// Directions held right now
    fn held_directions(&self) -> Directions;

    /// True once per start/restart request
    fn consume_start_signal(&mut self) -> bool;

    /// Latest session state, offered before each sample
    fn observe(&mut self, _session: &Session) {}
}

/// Key codes (DOM `KeyboardEvent.code`) bound to movement
const DIRECTION_KEYS: [(&str, Direction); 8] = [
    ("ArrowUp", Direction::Up),
    ("KeyW", Direction::Up),
    ("ArrowDown", Direction::Down),
    ("KeyS", Direction::Down),
    ("ArrowLeft", Direction::Left),
    ("KeyA", Direction::Left),
    ("ArrowRight", Direction::Right),
    ("KeyD", Direction::Right),
];

/// Key codes that start or restart a run
const START_KEYS: [&str; 2] = ["Space", "Enter"];

/// Keyboard state fed by key-down/key-up events
#[derive(Debug, Clone, Default)]
pub struct Keyboard {
    pressed: [bool; DIRECTION_KEYS.len()],
    start_pending: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key-down. Returns true if the key is bound.
    pub fn key_down(&mut self, code: &str) -> bool {
        if START_KEYS.contains(&code) {
            self.start_pending = true;
            return true;
        }
        self.set_key(code, true)
    }

    /// Handle a key-up. Returns true if the key is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        if START_KEYS.contains(&code) {
            return true;
        }
        self.set_key(code, false)
    }

    /// Forget every held key (focus loss swallows key-ups)
    pub fn release_all(&mut self) {
        self.pressed = Default::default();
    }

    fn set_key(&mut self, code: &str, down: bool) -> bool {
        match DIRECTION_KEYS.iter().position(|(key, _)| *key == code) {
            Some(i) => {
                self.pressed[i] = down;
                true
            }
            None => false,
        }
    }
}

impl InputSource for Keyboard {
    fn held_directions(&self) -> Directions {
        let mut held = Directions::default();
        for (i, (_, dir)) in DIRECTION_KEYS.iter().enumerate() {
            if self.pressed[i] {
                held.set(*dir, true);
            }
        }
        held
    }

    fn consume_start_signal(&mut self) -> bool {
        std::mem::take(&mut self.start_pending)
    }
}

/// Obstacles closer than this (after look-ahead) push the autopilot away
const AUTOPILOT_DANGER_RADIUS: f32 = 160.0;
/// Frames of obstacle motion the autopilot predicts
const AUTOPILOT_LOOKAHEAD: f32 = 12.0;
/// Pull back toward the arena center
const AUTOPILOT_CENTER_PULL: f32 = 0.004;
/// Steering components smaller than this are ignored
const AUTOPILOT_DEADZONE: f32 = 0.15;
/// Observed frames to wait on the game-over screen before restarting
const AUTOPILOT_RESTART_DELAY: u32 = 90;

/// Demo/attract-mode input: dodges on its own and restarts after death
#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    held: Directions,
    start_pending: bool,
    idle_frames: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the autopilot wants to go, as an unnormalized steering vector
    pub fn steering(session: &Session) -> Vec2 {
        let player = session.player.pos;
        let mut push = (session.config.center() - player) * AUTOPILOT_CENTER_PULL;

        for obstacle in &session.obstacles {
            let ahead = obstacle.pos + obstacle.vel * session.speed_mult * AUTOPILOT_LOOKAHEAD;
            let away = player - ahead;
            let dist = away.length();
            if dist < AUTOPILOT_DANGER_RADIUS {
                let weight = 1.0 - dist / AUTOPILOT_DANGER_RADIUS;
                // Dead-on threats push sideways from their heading
                let dir = away
                    .try_normalize()
                    .unwrap_or_else(|| obstacle.vel.perp().normalize_or_zero());
                push += dir * weight * 2.0;
            }
        }

        push
    }
}

impl InputSource for Autopilot {
    fn held_directions(&self) -> Directions {
        self.held
    }

    fn consume_start_signal(&mut self) -> bool {
        std::mem::take(&mut self.start_pending)
    }

    fn observe(&mut self, session: &Session) {
        if session.phase != GamePhase::Playing {
            self.held = Directions::default();
            self.idle_frames += 1;
            let waited = self.idle_frames >= AUTOPILOT_RESTART_DELAY;
            if session.phase == GamePhase::Idle || waited {
                self.start_pending = true;
                self.idle_frames = 0;
            }
            return;
        }

        self.idle_frames = 0;
        let steer = Self::steering(session);
        self.held = Directions {
            up: steer.y < -AUTOPILOT_DEADZONE,
            down: steer.y > AUTOPILOT_DEADZONE,
            left: steer.x < -AUTOPILOT_DEADZONE,
            right: steer.x > AUTOPILOT_DEADZONE,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Color, Obstacle};

    #[test]
    fn test_axis() {
        let mut held = Directions::default();
        assert_eq!(held, Directions::default());
        assert_eq!(held.axis(), Vec2::ZERO);

        held.set(Direction::Right, true);
        held.set(Direction::Up, true);
        assert_eq!(held.axis(), Vec2::new(1.0, -1.0));

        held.set(Direction::Left, true);
        assert_eq!(held.axis(), Vec2::new(0.0, -1.0));
        assert!(held.left);
    }

    #[test]
    fn test_keyboard_bindings() {
        let mut kb = Keyboard::new();
        assert!(kb.key_down("KeyA"));
        assert!(kb.key_down("ArrowDown"));
        assert!(!kb.key_down("KeyQ"));

        let held = kb.held_directions();
        assert!(held.left && held.down && !held.up && !held.right);

        kb.key_up("KeyA");
        assert!(!kb.held_directions().left);
    }

    #[test]
    fn test_keyboard_alias_keys_overlap() {
        let mut kb = Keyboard::new();
        kb.key_down("ArrowLeft");
        kb.key_down("KeyA");
        kb.key_up("ArrowLeft");
        // Still held through the other binding
        assert!(kb.held_directions().left);
        kb.release_all();
        assert_eq!(kb.held_directions(), Directions::default());
    }

    #[test]
    fn test_start_signal_is_one_shot() {
        let mut kb = Keyboard::new();
        assert!(!kb.consume_start_signal());
        kb.key_down("Space");
        assert!(kb.consume_start_signal());
        assert!(!kb.consume_start_signal());
        kb.key_down("Enter");
        kb.key_up("Enter");
        assert!(kb.consume_start_signal());
    }

    #[test]
    fn test_autopilot_starts_from_idle() {
        let session = Session::new(1);
        let mut pilot = Autopilot::new();
        pilot.observe(&session);
        assert!(pilot.consume_start_signal());
        assert!(!pilot.consume_start_signal());
    }

    #[test]
    fn test_autopilot_waits_after_death() {
        let mut session = Session::new(1);
        session.phase = GamePhase::Dead;
        let mut pilot = Autopilot::new();
        for _ in 0..AUTOPILOT_RESTART_DELAY - 1 {
            pilot.observe(&session);
            assert!(!pilot.consume_start_signal());
        }
        pilot.observe(&session);
        assert!(pilot.consume_start_signal());
    }

    #[test]
    fn test_autopilot_steers_away_from_threat() {
        let mut session = Session::new(1);
        session.start_game(0.0);
        let pos = session.player.pos;
        session.obstacles.push(Obstacle {
            id: 1,
            pos: pos + Vec2::new(60.0, 0.0),
            vel: Vec2::ZERO,
            radius: 14.0,
            color: Color::hsl(190, 90, 65),
        });

        let mut pilot = Autopilot::new();
        pilot.observe(&session);
        let held = pilot.held_directions();
        assert!(held.left);
        assert!(!held.right);
    }

    #[test]
    fn test_autopilot_idle_at_center() {
        let mut session = Session::new(1);
        session.start_game(0.0);
        let mut pilot = Autopilot::new();
        pilot.observe(&session);
        assert_eq!(pilot.held_directions(), Directions::default());
    }
}
