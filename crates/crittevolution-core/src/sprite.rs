//! Shared critter sprite
//!
//! Every critter is drawn with the same small mask: a round head with a
//! triangular tail. The mask is built once, on first use, and only ever
//! handed out by reference. Its size is also the critter's collision box.

use glam::Vec2;
use once_cell::sync::OnceCell;

const SPRITE_WIDTH: usize = 10;
const SPRITE_HEIGHT: usize = 17;
const HEAD_RADIUS: f32 = 5.0;
/// Tail triangle corners in sprite space
const TAIL: [Vec2; 3] = [Vec2::new(0.0, 5.0), Vec2::new(5.0, 17.0), Vec2::new(10.0, 5.0)];

static SPRITE: OnceCell<CritterSprite> = OnceCell::new();

/// Read-only coverage mask shared by all critters
#[derive(Debug)]
pub struct CritterSprite {
    width: usize,
    height: usize,
    /// Row-major, true where the sprite is opaque
    mask: Vec<bool>,
}

impl CritterSprite {
    /// Process-wide sprite, rasterized on first call
    pub fn shared() -> &'static CritterSprite {
        SPRITE.get_or_init(|| {
            log::debug!("Rasterizing critter sprite");
            Self::rasterize()
        })
    }

    fn rasterize() -> Self {
        let mut mask = Vec::with_capacity(SPRITE_WIDTH * SPRITE_HEIGHT);
        let center = Vec2::splat(HEAD_RADIUS);

        for y in 0..SPRITE_HEIGHT {
            for x in 0..SPRITE_WIDTH {
                // Sample at pixel centers
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let in_head = p.distance(center) <= HEAD_RADIUS;
                mask.push(in_head || in_triangle(p, TAIL));
            }
        }

        Self {
            width: SPRITE_WIDTH,
            height: SPRITE_HEIGHT,
            mask,
        }
    }

    /// Sprite dimensions in world units
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Whether the pixel at (x, y) is drawn. Out of range is transparent.
    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.mask[y * self.width + x]
    }

    /// Number of opaque pixels
    pub fn opaque_pixels(&self) -> usize {
        self.mask.iter().filter(|&&m| m).count()
    }
}

fn in_triangle(p: Vec2, [a, b, c]: [Vec2; 3]) -> bool {
    let edge = |from: Vec2, to: Vec2| (to - from).perp_dot(p - from);
    let (d1, d2, d3) = (edge(a, b), edge(b, c), edge(c, a));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
