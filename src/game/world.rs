// GameWorld struct and entity management
//
// This module contains the GameWorld struct which owns every ship and shot in
// play. One call to `update` is one fixed simulation tick.

use crate::bullet::{Bullet, BulletOwner};
use crate::collision;
use crate::config::GameConfig;
use crate::enemy::{Enemy, EnemyEvent};
use crate::input_system::GameAction;
use crate::player::PlayerShip;
use rand::rngs::StdRng;
use std::time::Duration;

use super::{Controls, GameState, WorldEvent};

/// GameWorld encapsulates all game entities and world state
pub struct GameWorld {
    pub player: PlayerShip,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub wave: u32,
    pub state: GameState,
    config: GameConfig,
    rng: StdRng,
    next_enemy_id: u32,
    next_bullet_id: u64,
}

impl GameWorld {
    pub fn new(config: GameConfig, rng: StdRng) -> Self {
        let player = PlayerShip::spawn(config.window.width, config.window.height, &config.player);

        let mut world = GameWorld {
            player,
            enemies: Vec::new(),
            bullets: Vec::new(),
            score: 0,
            wave: 1,
            state: GameState::Playing,
            config,
            rng,
            next_enemy_id: 0,
            next_bullet_id: 0,
        };
        world.spawn_wave();
        world
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Playfield size as signed coordinates
    pub fn field(&self) -> (i32, i32) {
        (self.config.window.width as i32, self.config.window.height as i32)
    }

    /// Enemy minimum speed for the current wave
    pub fn wave_min_speed(&self) -> i32 {
        let bonus = self.config.rules.wave_speed_bonus * (self.wave as i32 - 1);
        self.config.enemy.min_speed + bonus
    }

    /// Spawns a fresh formation for the current wave.
    ///
    /// A formation always has at least one row and one column, otherwise an
    /// empty wave would count as cleared on every tick.
    fn spawn_wave(&mut self) {
        let formation = &self.config.formation;
        let min_speed = self.wave_min_speed();

        for row in 0..formation.rows.max(1) {
            for col in 0..formation.cols.max(1) {
                let x = formation.origin_x + col as i32 * formation.spacing_x;
                let y = formation.origin_y + row as i32 * formation.spacing_y;
                self.enemies
                    .push(Enemy::new(self.next_enemy_id, x, y, min_speed, &self.config.enemy));
                self.next_enemy_id += 1;
            }
        }

        log::info!(
            "Wave {} spawned: {} enemies, min speed {}",
            self.wave,
            self.enemies.len(),
            min_speed
        );
    }

    /// Adds a shot leaving `muzzle`
    pub fn spawn_bullet(&mut self, muzzle: (i32, i32), owner: BulletOwner) {
        let bullet_config = &self.config.bullet;
        let (speed, range) = match owner {
            BulletOwner::Player => (bullet_config.player_speed, bullet_config.player_range),
            BulletOwner::Enemy => (bullet_config.enemy_speed, bullet_config.enemy_range),
        };

        self.bullets.push(Bullet::new(
            self.next_bullet_id,
            muzzle,
            owner,
            speed,
            range,
            (bullet_config.width, bullet_config.height),
        ));
        self.next_bullet_id += 1;
    }

    /// Turns a pending fire request from the player into a shot.
    ///
    /// Returns true if a shot was fired.
    pub fn scan_shoot(&mut self) -> bool {
        match self.player.take_shot() {
            Some(muzzle) => {
                self.spawn_bullet(muzzle, BulletOwner::Player);
                true
            }
            None => false,
        }
    }

    /// Handles a one-shot action. `Quit` is left to the caller.
    pub fn apply(&mut self, action: GameAction) {
        match (action, self.state) {
            (GameAction::TogglePause, GameState::Playing) => {
                self.state = GameState::Paused;
                log::info!("Paused");
            }
            (GameAction::TogglePause, GameState::Paused) => {
                self.state = GameState::Playing;
                log::info!("Resumed");
            }
            (GameAction::Restart, GameState::GameOver) => self.restart(),
            _ => {}
        }
    }

    fn restart(&mut self) {
        log::info!("Restarting");
        self.player = PlayerShip::spawn(
            self.config.window.width,
            self.config.window.height,
            &self.config.player,
        );
        self.enemies.clear();
        self.bullets.clear();
        self.score = 0;
        self.wave = 1;
        self.state = GameState::Playing;
        self.spawn_wave();
    }

    /// Runs one fixed simulation tick
    pub fn update(&mut self, controls: &Controls, dt: Duration) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        if self.state != GameState::Playing {
            return events;
        }

        let (max_x, max_y) = self.field();

        self.player.step(controls, dt, max_x);
        self.scan_shoot();

        let mut muzzles = Vec::new();
        for enemy in self.enemies.iter_mut() {
            if let Some(EnemyEvent::Fired { x, y }) = enemy.tick(dt, &mut self.rng, max_x, max_y) {
                muzzles.push((x, y));
            }
        }
        for muzzle in muzzles {
            self.spawn_bullet(muzzle, BulletOwner::Enemy);
        }

        let dt_secs = dt.as_secs_f32();
        let field_height = self.config.window.height;
        for bullet in self.bullets.iter_mut() {
            bullet.update(dt_secs);
        }
        self.bullets.retain(|bullet| !bullet.is_spent(field_height));

        self.resolve_collisions(&mut events);

        if !self.player.is_alive() {
            self.state = GameState::GameOver;
            log::info!("Game over: score {}, wave {}", self.score, self.wave);
            events.push(WorldEvent::GameOver {
                score: self.score,
                wave: self.wave,
            });
        } else if self.enemies.is_empty() {
            log::info!("Wave {} cleared", self.wave);
            events.push(WorldEvent::WaveCleared { wave: self.wave });
            self.wave += 1;
            self.bullets.clear();
            self.spawn_wave();
        }

        events
    }

    fn resolve_collisions(&mut self, events: &mut Vec<WorldEvent>) {
        let mut enemy_destroyed = vec![false; self.enemies.len()];
        let mut bullet_spent = vec![false; self.bullets.len()];

        for (i, bullet) in self.bullets.iter().enumerate() {
            match bullet.owner {
                BulletOwner::Player => {
                    // A shot takes out at most one enemy
                    let target = collision::check_collisions_with_collection(bullet, &self.enemies)
                        .into_iter()
                        .find(|&index| !enemy_destroyed[index]);

                    if let Some(index) = target {
                        enemy_destroyed[index] = true;
                        bullet_spent[i] = true;

                        let points = self.config.enemy.points;
                        self.score += points;
                        log::debug!(
                            "Shot {} destroyed enemy {}",
                            bullet.id,
                            self.enemies[index].id
                        );
                        events.push(WorldEvent::EnemyDestroyed {
                            enemy_id: self.enemies[index].id,
                            points,
                        });
                    }
                }
                BulletOwner::Enemy => {
                    if collision::collides(bullet, &self.player) {
                        bullet_spent[i] = true;
                        log::debug!("Shot {} hit the player", bullet.id);
                        if self.player.hit() {
                            events.push(WorldEvent::PlayerHit {
                                lives_left: self.player.lives,
                            });
                        }
                    }
                }
            }
        }

        let rammed = collision::check_collisions_with_collection(&self.player, &self.enemies)
            .into_iter()
            .any(|index| !enemy_destroyed[index]);
        if rammed && self.player.hit() {
            events.push(WorldEvent::PlayerHit {
                lives_left: self.player.lives,
            });
        }

        if !events.is_empty() {
            log::debug!("Collision events: {:?}", events);
        }

        let mut destroyed = enemy_destroyed.into_iter();
        self.enemies.retain(|_| !destroyed.next().unwrap_or(false));
        let mut spent = bullet_spent.into_iter();
        self.bullets.retain(|_| !spent.next().unwrap_or(false));
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::GameOver
    }
}
