//! Food pool
//!
//! A fixed number of food points scattered over the world. Eating a point
//! removes it and drops a new one somewhere random, so the count never changes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::{WORLD_HEIGHT, WORLD_WIDTH};

/// Fixed-capacity set of consumable food points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePool {
    points: Vec<Vec2>,
}

impl ResourcePool {
    /// Create a pool with `capacity` randomly placed points
    pub fn new<R: Rng + ?Sized>(capacity: usize, rng: &mut R) -> Self {
        let points = (0..capacity).map(|_| random_point(rng)).collect();
        Self { points }
    }

    /// Create a pool from known points
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Eat at most one food point inside `region`.
    ///
    /// The first point in storage order wins. It is removed and a fresh random
    /// point is appended. Returns false and leaves the pool untouched when no
    /// point is inside.
    pub fn try_consume<R: Rng + ?Sized>(&mut self, region: &Rect, rng: &mut R) -> bool {
        let Some(index) = self.points.iter().position(|&p| region.contains(p)) else {
            return false;
        };

        self.points.remove(index);
        self.points.push(random_point(rng));
        true
    }

    /// Number of food points (constant over the pool's lifetime)
    pub fn capacity(&self) -> usize {
        self.points.len()
    }

    /// Food positions (for rendering)
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }
}

fn random_point<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..WORLD_WIDTH),
        rng.random_range(0.0..WORLD_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    fn region_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(10.0, 10.0))
    }

    #[test]
    fn test_pool_creation() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(1);
        let pool = ResourcePool::new(200, &mut rng);

        assert_eq!(pool.capacity(), 200);
        for p in pool.points() {
            assert!(p.x >= 0.0 && p.x < WORLD_WIDTH);
            assert!(p.y >= 0.0 && p.y < WORLD_HEIGHT);
        }
    }

    #[test]
    fn test_consume_miss_leaves_pool_unchanged() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(2);
        let mut pool = ResourcePool::from_points(vec![Vec2::new(100.0, 100.0)]);

        assert!(!pool.try_consume(&region_at(300.0, 300.0), &mut rng));
        assert_eq!(pool.points(), &[Vec2::new(100.0, 100.0)]);
    }

    #[test]
    fn test_consume_takes_only_first_match() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let first = Vec2::new(101.0, 101.0);
        let second = Vec2::new(102.0, 102.0);
        let outside = Vec2::new(500.0, 500.0);
        let mut pool = ResourcePool::from_points(vec![outside, first, second]);

        assert!(pool.try_consume(&region_at(100.0, 100.0), &mut rng));

        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.points()[0], outside);
        assert_eq!(pool.points()[1], second);
        // Second match survives, eaten point replaced at the back
        assert_ne!(pool.points()[2], first);
    }

    #[test]
    fn test_capacity_is_invariant() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(4);
        let mut pool = ResourcePool::new(50, &mut rng);

        for i in 0..500 {
            let x = (i * 37 % 800) as f32;
            let y = (i * 53 % 600) as f32;
            pool.try_consume(&Rect::new(Vec2::new(x, y), Vec2::new(40.0, 40.0)), &mut rng);
            assert_eq!(pool.capacity(), 50);
        }
    }

    #[test]
    fn test_empty_pool_never_consumes() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(5);
        let mut pool = ResourcePool::new(0, &mut rng);
        let everything = Rect::new(Vec2::ZERO, Vec2::new(WORLD_WIDTH, WORLD_HEIGHT));

        assert!(!pool.try_consume(&everything, &mut rng));
        assert_eq!(pool.capacity(), 0);
    }
}
