/// Sprite loading and world rendering
///
/// Every ship and enemy state has its own texture. Textures are loaded once at
/// startup from the paths in [`SpriteConfig`]; a state whose image can't be
/// loaded is drawn as a coloured rectangle instead so the game stays playable
/// without assets.
///
/// Shots are drawn as lines: yellow for the player, green for enemies.
use crate::bullet::{Bullet, BulletOwner};
use crate::config::SpriteConfig;
use crate::enemy::{Enemy, EnemyState};
use crate::game::GameWorld;
use crate::player::{PlayerShip, ShipState};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;

pub const BACKGROUND_COLOR: Color = Color::RGB(0, 0, 0);
pub const PLAYER_SHOT_COLOR: Color = Color::RGB(255, 255, 0);
pub const ENEMY_SHOT_COLOR: Color = Color::RGB(0, 255, 0);

/// Identifies one texture in the [`SpriteSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    Ship(ShipState),
    Enemy(EnemyState),
}

impl SpriteKey {
    pub fn all() -> [SpriteKey; 7] {
        [
            SpriteKey::Ship(ShipState::Idle),
            SpriteKey::Ship(ShipState::MovingLeft),
            SpriteKey::Ship(ShipState::MovingRight),
            SpriteKey::Ship(ShipState::Hit),
            SpriteKey::Enemy(EnemyState::Idle),
            SpriteKey::Enemy(EnemyState::Moving),
            SpriteKey::Enemy(EnemyState::Firing),
        ]
    }

    /// Image path for this sprite
    pub fn path(self, config: &SpriteConfig) -> &str {
        match self {
            SpriteKey::Ship(ShipState::Idle) => &config.ship_idle,
            SpriteKey::Ship(ShipState::MovingLeft) => &config.ship_left,
            SpriteKey::Ship(ShipState::MovingRight) => &config.ship_right,
            SpriteKey::Ship(ShipState::Hit) => &config.ship_hit,
            SpriteKey::Enemy(EnemyState::Idle) => &config.enemy_idle,
            SpriteKey::Enemy(EnemyState::Moving) => &config.enemy_moving,
            SpriteKey::Enemy(EnemyState::Firing) => &config.enemy_firing,
        }
    }

    /// Colour drawn when the texture is missing
    pub fn fallback_color(self) -> Color {
        match self {
            SpriteKey::Ship(ShipState::Hit) => Color::RGB(255, 60, 60),
            SpriteKey::Ship(_) => Color::RGB(80, 160, 255),
            SpriteKey::Enemy(EnemyState::Firing) => Color::RGB(255, 160, 0),
            SpriteKey::Enemy(_) => Color::RGB(0, 200, 0),
        }
    }
}

pub struct SpriteSet<'a> {
    textures: HashMap<SpriteKey, Texture<'a>>,
}

impl<'a> SpriteSet<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &SpriteConfig,
    ) -> Self {
        let mut textures = HashMap::new();

        for key in SpriteKey::all() {
            let path = key.path(config);
            match texture_creator.load_texture(path) {
                Ok(texture) => {
                    textures.insert(key, texture);
                }
                Err(e) => log::warn!("Failed to load {} for {:?}: {}", path, key, e),
            }
        }

        log::info!("Loaded {} of {} sprites", textures.len(), SpriteKey::all().len());
        SpriteSet { textures }
    }

    pub fn texture(&self, key: SpriteKey) -> Option<&Texture<'a>> {
        self.textures.get(&key)
    }

    /// Draws the sprite for `key` into `dest`
    pub fn draw(&self, canvas: &mut Canvas<Window>, key: SpriteKey, dest: Rect) -> Result<(), String> {
        match self.texture(key) {
            Some(texture) => canvas.copy(texture, None, Some(dest)),
            None => {
                canvas.set_draw_color(key.fallback_color());
                canvas.fill_rect(dest)
            }
        }
    }
}

fn ship_rect(player: &PlayerShip) -> Rect {
    Rect::new(player.x, player.y, player.width, player.height)
}

fn enemy_rect(enemy: &Enemy) -> Rect {
    Rect::new(enemy.x, enemy.y, enemy.width, enemy.height)
}

pub fn shot_color(owner: BulletOwner) -> Color {
    match owner {
        BulletOwner::Player => PLAYER_SHOT_COLOR,
        BulletOwner::Enemy => ENEMY_SHOT_COLOR,
    }
}

pub fn draw_bullet(canvas: &mut Canvas<Window>, bullet: &Bullet) -> Result<(), String> {
    let (start, end) = bullet.line();
    canvas.set_draw_color(shot_color(bullet.owner));
    canvas.draw_line(Point::from(start), Point::from(end))
}

/// Clears the canvas and draws the whole world. Does not present.
pub fn render_world(
    canvas: &mut Canvas<Window>,
    sprites: &SpriteSet,
    world: &GameWorld,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    for enemy in &world.enemies {
        sprites.draw(canvas, SpriteKey::Enemy(enemy.state), enemy_rect(enemy))?;
    }

    if world.player.is_alive() {
        sprites.draw(
            canvas,
            SpriteKey::Ship(world.player.state),
            ship_rect(&world.player),
        )?;
    }

    for bullet in &world.bullets {
        draw_bullet(canvas, bullet)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    // Drawing needs an SDL window, so only the lookup tables are tested here.
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_state_has_a_sprite_key() {
        let keys: HashSet<SpriteKey> = SpriteKey::all().into_iter().collect();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_sprite_paths_follow_config() {
        let config = SpriteConfig {
            ship_left: "left.png".to_string(),
            enemy_firing: "boom.png".to_string(),
            ..SpriteConfig::default()
        };

        assert_eq!(SpriteKey::Ship(ShipState::MovingLeft).path(&config), "left.png");
        assert_eq!(SpriteKey::Enemy(EnemyState::Firing).path(&config), "boom.png");
        assert_eq!(
            SpriteKey::Ship(ShipState::Idle).path(&config),
            "assets/sprites/ship.png"
        );
    }

    #[test]
    fn test_hit_and_firing_fallbacks_stand_out() {
        assert_ne!(
            SpriteKey::Ship(ShipState::Hit).fallback_color(),
            SpriteKey::Ship(ShipState::Idle).fallback_color()
        );
        assert_ne!(
            SpriteKey::Enemy(EnemyState::Firing).fallback_color(),
            SpriteKey::Enemy(EnemyState::Moving).fallback_color()
        );
    }

    #[test]
    fn test_shot_colors() {
        assert_eq!(shot_color(BulletOwner::Player), Color::RGB(255, 255, 0));
        assert_eq!(shot_color(BulletOwner::Enemy), Color::RGB(0, 255, 0));
    }
}
