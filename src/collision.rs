/// Collision detection for ships and shots
///
/// Everything in the playfield is an axis-aligned box, so collision is a plain
/// AABB overlap test followed by a layer check deciding whether the two kinds
/// of object care about each other at all.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by the player ship, enemies and bullets
/// - `CollisionLayer`: what kind of object a box belongs to
/// - AABB functions: pure functions over `sdl2::rect::Rect`
use sdl2::rect::Rect;

/// Categories of collidable objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    Player,
    Enemy,
    /// Shots fired by the player ship
    PlayerShot,
    /// Shots fired by enemies
    EnemyShot,
}

/// Returns true when objects on these two layers can hit each other.
///
/// Player shots only hit enemies. Enemy shots and enemy hulls only hit the
/// player. Shots never hit shots.
pub fn layers_interact(a: CollisionLayer, b: CollisionLayer) -> bool {
    use CollisionLayer::*;

    matches!(
        (a, b),
        (PlayerShot, Enemy)
            | (Enemy, PlayerShot)
            | (EnemyShot, Player)
            | (Player, EnemyShot)
            | (Enemy, Player)
            | (Player, Enemy)
    )
}

/// Trait for anything that occupies a box in the playfield.
///
/// Implemented by the player ship, enemies and bullets so the world can test
/// any of them against any other with the same functions.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this object.
    ///
    /// The returned `Rect` should match the object's position and size as
    /// drawn on screen. Bullets snap their float position to whole pixels.
    fn get_bounds(&self) -> Rect;

    /// Returns the collision layer this object belongs to.
    ///
    /// Used by [`layers_interact`] to filter out pairs that never collide,
    /// such as two shots or two enemies.
    fn get_collision_layer(&self) -> CollisionLayer;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect when they overlap on both axes. Edges are
/// exclusive, so boxes that merely touch do not collide.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Full collision test: boxes overlap and the layers interact.
pub fn collides(a: &impl Collidable, b: &impl Collidable) -> bool {
    layers_interact(a.get_collision_layer(), b.get_collision_layer())
        && aabb_intersect(&a.get_bounds(), &b.get_bounds())
}

/// Checks one collidable against a collection and returns the indices hit,
/// in collection order.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let mut collisions = Vec::new();

    for (index, other) in entities.iter().enumerate() {
        if collides(entity, other) {
            collisions.push(index);
        }
    }

    collisions
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        rect: Rect,
        layer: CollisionLayer,
    }

    impl Collidable for Probe {
        fn get_bounds(&self) -> Rect {
            self.rect
        }

        fn get_collision_layer(&self) -> CollisionLayer {
            self.layer
        }
    }

    fn probe(x: i32, y: i32, layer: CollisionLayer) -> Probe {
        Probe {
            rect: Rect::new(x, y, 32, 32),
            layer,
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &Rect::new(32, 0, 32, 32)));
        assert!(!aabb_intersect(&rect_a, &Rect::new(0, 32, 32, 32)));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 4, 16);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        assert!(!aabb_intersect(&Rect::new(0, 0, 32, 32), &Rect::new(100, 100, 32, 32)));
    }

    #[test]
    fn test_layer_filtering() {
        assert!(layers_interact(CollisionLayer::PlayerShot, CollisionLayer::Enemy));
        assert!(layers_interact(CollisionLayer::EnemyShot, CollisionLayer::Player));
        assert!(layers_interact(CollisionLayer::Enemy, CollisionLayer::Player));

        assert!(!layers_interact(CollisionLayer::PlayerShot, CollisionLayer::Player));
        assert!(!layers_interact(CollisionLayer::EnemyShot, CollisionLayer::Enemy));
        assert!(!layers_interact(CollisionLayer::PlayerShot, CollisionLayer::EnemyShot));
        assert!(!layers_interact(CollisionLayer::Enemy, CollisionLayer::Enemy));
    }

    #[test]
    fn test_overlapping_but_friendly_does_not_collide() {
        let shot = probe(0, 0, CollisionLayer::PlayerShot);
        let ship = probe(10, 10, CollisionLayer::Player);

        assert!(!collides(&shot, &ship));
    }

    #[test]
    fn test_check_collisions_with_collection() {
        let shot = probe(0, 0, CollisionLayer::PlayerShot);
        let enemies = vec![
            probe(16, 16, CollisionLayer::Enemy),
            probe(200, 0, CollisionLayer::Enemy),
            probe(-10, 5, CollisionLayer::Enemy),
            probe(5, 5, CollisionLayer::EnemyShot),
        ];

        assert_eq!(check_collisions_with_collection(&shot, &enemies), vec![0, 2]);
    }
}
