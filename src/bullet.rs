use crate::collision::{Collidable, CollisionLayer};
use sdl2::rect::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// A shot travelling straight up (player) or down (enemy).
///
/// Positions are kept as floats so slow shots still move on every tick; the
/// collision box is snapped to whole pixels.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    /// Vertical speed in pixels per second, negative is up
    pub vy: f32,
    pub width: u32,
    pub height: u32,
    pub owner: BulletOwner,
    pub travelled: f32,
    pub range: f32,
}

impl Bullet {
    /// Creates a shot centred on the muzzle position.
    pub fn new(
        id: u64,
        muzzle: (i32, i32),
        owner: BulletOwner,
        speed: f32,
        range: f32,
        size: (u32, u32),
    ) -> Self {
        let vy = match owner {
            BulletOwner::Player => -speed.abs(),
            BulletOwner::Enemy => speed.abs(),
        };
        let (width, height) = size;

        Bullet {
            id,
            x: muzzle.0 as f32 - width as f32 / 2.0,
            y: match owner {
                BulletOwner::Player => muzzle.1 as f32 - height as f32,
                BulletOwner::Enemy => muzzle.1 as f32,
            },
            vy,
            width,
            height,
            owner,
            travelled: 0.0,
            range,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let dy = self.vy * dt;
        self.y += dy;
        self.travelled += dy.abs();
    }

    /// A shot is spent once it has covered its range or left the field.
    pub fn is_spent(&self, field_height: u32) -> bool {
        self.travelled >= self.range
            || self.y + (self.height as f32) < 0.0
            || self.y > field_height as f32
    }

    /// Centre line of the shot, top to bottom.
    pub fn line(&self) -> ((i32, i32), (i32, i32)) {
        let cx = (self.x + self.width as f32 / 2.0).round() as i32;
        let top = self.y.round() as i32;
        ((cx, top), (cx, top + self.height as i32))
    }
}

impl Collidable for Bullet {
    fn get_bounds(&self) -> Rect {
        Rect::new(
            self.x.round() as i32,
            self.y.round() as i32,
            self.width,
            self.height,
        )
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        match self.owner {
            BulletOwner::Player => CollisionLayer::PlayerShot,
            BulletOwner::Enemy => CollisionLayer::EnemyShot,
        }
    }
}
