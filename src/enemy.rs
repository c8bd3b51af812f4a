//! Enemy ships and their patrol behaviour.
//!
//! Each enemy walks a small square route, one step every `step_interval`.
//! A round starts with a pause, then picks either the aggressive route (shoot
//! first, then circle) or the drift route. After every round the enemy
//! re-rolls its speed. Moves that would leave the playfield are skipped and
//! the next step runs straight away.
//!
//! All timing is countdown based and advanced by the fixed simulation tick.

use crate::collision::{Collidable, CollisionLayer};
use crate::config::EnemyConfig;
use rand::Rng;
use sdl2::rect::Rect;
use std::time::Duration;

/// Rounds that make up one full patrol routine
pub const ROUNDS_PER_ROUTINE: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolStep {
    Fire,
    Left,
    Down,
    Right,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Fire, then circle counter-clockwise
    Aggressive,
    /// Circle clockwise without firing
    Drift,
}

impl Route {
    pub fn steps(self) -> &'static [PatrolStep] {
        use PatrolStep::*;

        match self {
            Route::Aggressive => &[Fire, Left, Down, Right, Up],
            Route::Drift => &[Right, Up, Left, Down],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Waiting out the pause that opens every round
    Opening,
    Running { route: Route, cursor: usize },
}

/// Which sprite the enemy shows this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyState {
    Idle,
    Moving,
    Firing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyEvent {
    /// The enemy shot downwards from this muzzle position
    Fired { x: i32, y: i32 },
}

pub struct Enemy {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub speed: i32,
    pub min_speed: i32,
    pub state: EnemyState,
    pub rounds_completed: u32,
    config: EnemyConfig,
    phase: Phase,
    wait: Duration,
    pose_timer: Duration,
}

impl Enemy {
    pub fn new(id: u32, x: i32, y: i32, min_speed: i32, config: &EnemyConfig) -> Self {
        Enemy {
            id,
            x,
            y,
            width: config.width,
            height: config.height,
            speed: min_speed,
            min_speed,
            state: EnemyState::Idle,
            rounds_completed: 0,
            config: config.clone(),
            phase: Phase::Opening,
            wait: Duration::from_millis(config.step_interval_ms.max(1)),
            pose_timer: Duration::ZERO,
        }
    }

    fn step_interval(&self) -> Duration {
        // A zero interval would spin the patrol loop forever
        Duration::from_millis(self.config.step_interval_ms.max(1))
    }

    /// Advances the patrol by one tick inside a `max_x` by `max_y` playfield.
    pub fn tick<R: Rng>(
        &mut self,
        dt: Duration,
        rng: &mut R,
        max_x: i32,
        max_y: i32,
    ) -> Option<EnemyEvent> {
        self.pose_timer = self.pose_timer.saturating_sub(dt);
        self.wait = self.wait.saturating_sub(dt);

        let mut event = None;

        while self.wait.is_zero() {
            match self.phase {
                Phase::Opening => {
                    let route = if rng.gen_bool(self.config.aggressive_chance.clamp(0.0, 1.0)) {
                        Route::Aggressive
                    } else {
                        Route::Drift
                    };
                    self.phase = Phase::Running { route, cursor: 0 };
                }
                Phase::Running { route, cursor } => {
                    let steps = route.steps();
                    let step = steps[cursor];

                    if self.perform(step, max_x, max_y, &mut event) {
                        self.wait = self.step_interval();
                    }

                    if cursor + 1 < steps.len() {
                        self.phase = Phase::Running {
                            route,
                            cursor: cursor + 1,
                        };
                    } else {
                        self.finish_round(rng);
                    }
                }
            }
        }

        if self.pose_timer.is_zero() {
            self.state = EnemyState::Idle;
        }

        event
    }

    /// Runs a single step. Returns false when a move was blocked by the edge.
    fn perform(
        &mut self,
        step: PatrolStep,
        max_x: i32,
        max_y: i32,
        event: &mut Option<EnemyEvent>,
    ) -> bool {
        let moved = match step {
            PatrolStep::Fire => {
                *event = Some(EnemyEvent::Fired {
                    x: self.x + self.config.muzzle_offset,
                    y: self.y + self.height as i32,
                });
                self.set_pose(EnemyState::Firing);
                return true;
            }
            PatrolStep::Left if self.x - self.speed > 0 => {
                self.x -= self.speed;
                true
            }
            PatrolStep::Down if self.y + self.speed + self.config.bottom_margin < max_y => {
                self.y += self.speed;
                true
            }
            PatrolStep::Right if self.x + self.speed + self.config.right_margin < max_x => {
                self.x += self.speed;
                true
            }
            PatrolStep::Up if self.y - self.speed > 0 => {
                self.y -= self.speed;
                true
            }
            _ => false,
        };

        if moved && self.state != EnemyState::Firing {
            self.set_pose(EnemyState::Moving);
        }
        moved
    }

    fn set_pose(&mut self, state: EnemyState) {
        self.state = state;
        self.pose_timer = Duration::from_millis(self.config.fire_flash_ms);
    }

    fn finish_round<R: Rng>(&mut self, rng: &mut R) {
        let spread = self.config.speed_spread.max(0);
        self.speed = self.min_speed + rng.gen_range(0..=spread);
        self.rounds_completed += 1;
        if self.rounds_completed % ROUNDS_PER_ROUTINE == 0 {
            log::debug!("Enemy {} finished a patrol routine", self.id);
        }

        self.phase = Phase::Opening;
        self.wait += self.step_interval();
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Enemy
    }
}
