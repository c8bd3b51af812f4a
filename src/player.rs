use crate::collision::{Collidable, CollisionLayer};
use crate::config::PlayerConfig;
use crate::game::Controls;
use sdl2::rect::Rect;
use std::time::Duration;

/// Which sprite the ship shows this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipState {
    Idle,
    MovingLeft,
    MovingRight,
    /// Flashing after being hit
    Hit,
}

pub struct PlayerShip {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    pub lives: u32,
    pub state: ShipState,
    right_margin: i32,
    muzzle_offset: i32,
    move_interval: Duration,
    fire_cooldown: Duration,
    invulnerable_for: Duration,
    move_timer: Duration,
    fire_timer: Duration,
    invulnerable_timer: Duration,
    wants_to_fire: bool,
}

impl PlayerShip {
    pub fn new(x: i32, y: i32, config: &PlayerConfig) -> Self {
        PlayerShip {
            x,
            y,
            width: config.width,
            height: config.height,
            speed: config.speed,
            lives: config.lives,
            state: ShipState::Idle,
            right_margin: config.right_margin,
            muzzle_offset: config.muzzle_offset,
            move_interval: Duration::from_millis(config.move_interval_ms),
            fire_cooldown: Duration::from_millis(config.fire_cooldown_ms),
            invulnerable_for: Duration::from_millis(config.invulnerable_ms),
            move_timer: Duration::ZERO,
            fire_timer: Duration::ZERO,
            invulnerable_timer: Duration::ZERO,
            wants_to_fire: false,
        }
    }

    /// Spawns the ship centred at the bottom of the playfield.
    pub fn spawn(field_width: u32, field_height: u32, config: &PlayerConfig) -> Self {
        let x = (field_width as i32 - config.width as i32) / 2;
        let y = field_height as i32 - config.height as i32 - 20;
        Self::new(x, y, config)
    }

    /// Advances the ship by one tick.
    ///
    /// The ship moves in whole `speed` steps, at most one per `move_interval`.
    /// Left takes precedence when both directions are held.
    pub fn step(&mut self, controls: &Controls, dt: Duration, max_x: i32) {
        self.move_timer = self.move_timer.saturating_sub(dt);
        self.fire_timer = self.fire_timer.saturating_sub(dt);
        self.invulnerable_timer = self.invulnerable_timer.saturating_sub(dt);

        if self.move_timer.is_zero() {
            if controls.left {
                if self.x - self.speed > 0 {
                    self.x -= self.speed;
                }
                self.move_timer = self.move_interval;
            } else if controls.right {
                if self.x + self.speed + self.right_margin < max_x {
                    self.x += self.speed;
                }
                self.move_timer = self.move_interval;
            }
        }

        if controls.fire && self.fire_timer.is_zero() {
            self.wants_to_fire = true;
            self.fire_timer = self.fire_cooldown;
        }

        self.state = if self.is_invulnerable() {
            ShipState::Hit
        } else if controls.left {
            ShipState::MovingLeft
        } else if controls.right {
            ShipState::MovingRight
        } else {
            ShipState::Idle
        };
    }

    /// Consumes a pending fire request, returning the muzzle position.
    pub fn take_shot(&mut self) -> Option<(i32, i32)> {
        if self.wants_to_fire {
            self.wants_to_fire = false;
            Some(self.muzzle())
        } else {
            None
        }
    }

    pub fn muzzle(&self) -> (i32, i32) {
        (self.x + self.muzzle_offset, self.y - 5)
    }

    /// Registers a hit. Returns true if a life was lost.
    pub fn hit(&mut self) -> bool {
        if self.is_invulnerable() || self.lives == 0 {
            return false;
        }

        self.lives -= 1;
        self.invulnerable_timer = self.invulnerable_for;
        self.state = ShipState::Hit;
        true
    }

    pub fn is_invulnerable(&self) -> bool {
        !self.invulnerable_timer.is_zero()
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl Collidable for PlayerShip {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(10);

    fn ship_at(x: i32) -> PlayerShip {
        PlayerShip::new(x, 600, &PlayerConfig::default())
    }

    fn held(left: bool, right: bool, fire: bool) -> Controls {
        Controls { left, right, fire }
    }

    #[test]
    fn test_moves_one_step_per_interval() {
        let mut ship = ship_at(500);
        let left = held(true, false, false);

        ship.step(&left, TICK, 1280);
        assert_eq!(ship.x, 480);
        assert_eq!(ship.state, ShipState::MovingLeft);

        // Still inside the 50ms move interval
        ship.step(&left, TICK, 1280);
        ship.step(&left, TICK, 1280);
        assert_eq!(ship.x, 480);

        ship.step(&left, Duration::from_millis(50), 1280);
        assert_eq!(ship.x, 460);
    }

    #[test]
    fn test_left_edge_blocks_movement() {
        let mut ship = ship_at(20);
        ship.step(&held(true, false, false), TICK, 1280);
        assert_eq!(ship.x, 20);

        let mut ship = ship_at(21);
        ship.step(&held(true, false, false), TICK, 1280);
        assert_eq!(ship.x, 1);
    }

    #[test]
    fn test_right_edge_respects_margin() {
        // 1190 + 20 + 70 == 1280, not strictly less
        let mut ship = ship_at(1190);
        ship.step(&held(false, true, false), TICK, 1280);
        assert_eq!(ship.x, 1190);

        let mut ship = ship_at(1189);
        ship.step(&held(false, true, false), TICK, 1280);
        assert_eq!(ship.x, 1209);
        assert_eq!(ship.state, ShipState::MovingRight);
    }

    #[test]
    fn test_left_wins_when_both_held() {
        let mut ship = ship_at(500);
        ship.step(&held(true, true, false), TICK, 1280);
        assert_eq!(ship.x, 480);
    }

    #[test]
    fn test_fire_request_is_consumed_once() {
        let mut ship = ship_at(500);
        ship.step(&held(false, false, true), TICK, 1280);

        assert_eq!(ship.take_shot(), Some((550, 595)));
        assert_eq!(ship.take_shot(), None);

        // Cooldown holds back the next shot
        ship.step(&held(false, false, true), TICK, 1280);
        assert_eq!(ship.take_shot(), None);

        ship.step(&held(false, false, true), Duration::from_millis(250), 1280);
        assert!(ship.take_shot().is_some());
    }

    #[test]
    fn test_hit_grants_invulnerability() {
        let mut ship = ship_at(500);
        assert!(ship.hit());
        assert_eq!(ship.lives, 2);
        assert!(!ship.hit());
        assert_eq!(ship.lives, 2);

        ship.step(&Controls::default(), Duration::from_millis(1500), 1280);
        assert!(!ship.is_invulnerable());
        assert!(ship.hit());
        assert_eq!(ship.lives, 1);
    }

    #[test]
    fn test_state_shows_hit_while_invulnerable() {
        let mut ship = ship_at(500);
        ship.hit();
        ship.step(&held(true, false, false), TICK, 1280);
        assert_eq!(ship.state, ShipState::Hit);
    }

    #[test]
    fn test_spawn_is_centred() {
        let ship = PlayerShip::spawn(1280, 720, &PlayerConfig::default());
        assert_eq!(ship.position(), (590, 630));
        assert!(ship.is_alive());
    }
}
