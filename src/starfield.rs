//! Warp-speed starfield.
//!
//! Stars fly outwards from the centre of the screen. Each one picks a random
//! direction and speed when spawned, brightens while it travels and respawns
//! near the centre once it leaves the screen. The demo draws into an RGBA
//! pixel buffer which the front end uploads to a streaming texture.

use crate::config::StarfieldConfig;
use rand::Rng;

/// Bytes per pixel in the RGBA buffer
pub const BYTES_PER_PIXEL: usize = 4;

/// Brightness gained per tick while a star is on screen
const BRIGHTNESS_STEP: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub brightness: u8,
}

impl Star {
    /// Spawns a star a short distance from `centre`, heading outwards.
    pub fn spawn<R: Rng>(rng: &mut R, centre: Vec2) -> Self {
        let angle = rng.gen_range(-3.14..3.14_f64);
        let speed = 255.0 * rng.gen_range(0.3..1.0_f64).powi(2);
        let (dy, dx) = angle.sin_cos();
        let distance = rng.gen_range(25..125) as f64;

        Star {
            pos: Vec2 {
                x: centre.x + dx * distance,
                y: centre.y + dy * distance,
            },
            vel: Vec2 {
                x: speed * dx,
                y: speed * dy,
            },
            brightness: 0,
        }
    }
}

pub struct Starfield {
    pub stars: Vec<Star>,
    width: u32,
    height: u32,
    warp_factor: f64,
}

impl Starfield {
    pub fn new<R: Rng>(config: &StarfieldConfig, rng: &mut R) -> Self {
        let mut starfield = Starfield {
            stars: Vec::with_capacity(config.star_count),
            width: config.width,
            height: config.height,
            warp_factor: config.warp_factor,
        };

        let centre = starfield.centre();
        for _ in 0..config.star_count {
            starfield.stars.push(Star::spawn(rng, centre));
        }
        starfield
    }

    pub fn centre(&self) -> Vec2 {
        Vec2 {
            x: (self.width / 2) as f64,
            y: (self.height / 2) as f64,
        }
    }

    /// Moves every star one tick, respawning those that leave the screen.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        let centre = self.centre();
        let (width, height) = (self.width as f64, self.height as f64);

        for star in self.stars.iter_mut() {
            let x = star.pos.x + star.vel.x * self.warp_factor;
            let y = star.pos.y + star.vel.y * self.warp_factor;

            if x > width || y > height || x < 0.0 || y < 0.0 {
                *star = Star::spawn(rng, centre);
            } else {
                star.pos = Vec2 { x, y };
                star.brightness = star.brightness.saturating_add(BRIGHTNESS_STEP);
            }
        }
    }

    pub fn draw(&self, pixels: &mut PixelBuffer) {
        for star in &self.stars {
            pixels.set_pixel(star.pos.x as i64, star.pos.y as i64, star.brightness);
        }
    }
}

/// RGBA framebuffer the starfield draws into.
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Writes grey level `c` to the pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i64, y: i64, c: u8) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        self.data[index..index + 3].fill(c);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        Some(&self.data[index..index + BYTES_PER_PIXEL])
    }

    /// Bytes per row, as SDL wants it for texture updates
    pub fn pitch(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn small_config() -> StarfieldConfig {
        StarfieldConfig {
            width: 400,
            height: 300,
            star_count: 50,
            ..StarfieldConfig::default()
        }
    }

    #[test]
    fn test_spawned_stars_start_near_centre() {
        let mut rng = StdRng::seed_from_u64(11);
        let centre = Vec2 { x: 640.0, y: 360.0 };

        for _ in 0..200 {
            let star = Star::spawn(&mut rng, centre);
            let distance = ((star.pos.x - centre.x).powi(2) + (star.pos.y - centre.y).powi(2)).sqrt();
            let speed = (star.vel.x.powi(2) + star.vel.y.powi(2)).sqrt();

            assert!((24.999..125.0).contains(&distance), "distance {}", distance);
            assert!((255.0 * 0.09 - 1e-9..=255.0).contains(&speed), "speed {}", speed);
            assert_eq!(star.brightness, 0);
        }
    }

    #[test]
    fn test_update_moves_and_brightens() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut starfield = Starfield::new(&small_config(), &mut rng);
        starfield.stars[0] = Star {
            pos: Vec2 { x: 200.0, y: 150.0 },
            vel: Vec2 { x: 100.0, y: -50.0 },
            brightness: 0,
        };

        starfield.update(&mut rng);

        let star = starfield.stars[0];
        assert_relative_eq!(star.pos.x, 210.0);
        assert_relative_eq!(star.pos.y, 145.0);
        assert_eq!(star.brightness, 40);
    }

    #[test]
    fn test_brightness_saturates() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut starfield = Starfield::new(&small_config(), &mut rng);
        starfield.stars[0] = Star {
            pos: Vec2 { x: 200.0, y: 150.0 },
            vel: Vec2 { x: 0.0, y: 0.0 },
            brightness: 240,
        };

        starfield.update(&mut rng);
        assert_eq!(starfield.stars[0].brightness, 255);
    }

    #[test]
    fn test_star_leaving_screen_respawns() {
        let mut rng = StdRng::seed_from_u64(14);
        let mut starfield = Starfield::new(&small_config(), &mut rng);
        starfield.stars[0] = Star {
            pos: Vec2 { x: 399.0, y: 150.0 },
            vel: Vec2 { x: 100.0, y: 0.0 },
            brightness: 200,
        };

        starfield.update(&mut rng);

        let star = starfield.stars[0];
        assert_eq!(star.brightness, 0);
        let centre = starfield.centre();
        assert!((star.pos.x - centre.x).abs() < 125.0);
        assert!((star.pos.y - centre.y).abs() < 125.0);
    }

    #[test]
    fn test_set_pixel_writes_grey() {
        let mut pixels = PixelBuffer::new(4, 3);
        pixels.set_pixel(2, 1, 90);

        assert_eq!(pixels.pixel(2, 1), Some(&[90, 90, 90, 0][..]));
        assert_eq!(pixels.pixel(1, 1), Some(&[0, 0, 0, 0][..]));
        assert_eq!(pixels.pitch(), 16);
    }

    #[test]
    fn test_set_pixel_ignores_out_of_range() {
        let mut pixels = PixelBuffer::new(4, 3);
        pixels.set_pixel(-1, 0, 255);
        pixels.set_pixel(4, 0, 255);
        pixels.set_pixel(0, 3, 255);

        assert!(pixels.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draw_then_clear() {
        let starfield = Starfield {
            stars: vec![Star {
                pos: Vec2 { x: 1.7, y: 2.2 },
                vel: Vec2 { x: 0.0, y: 0.0 },
                brightness: 120,
            }],
            width: 4,
            height: 3,
            warp_factor: 0.1,
        };

        let mut pixels = PixelBuffer::new(4, 3);
        starfield.draw(&mut pixels);
        assert_eq!(pixels.pixel(1, 2), Some(&[120, 120, 120, 0][..]));

        pixels.clear();
        assert!(pixels.as_bytes().iter().all(|&b| b == 0));
    }
}
