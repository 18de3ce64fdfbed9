//! Critters: the simulated creatures
//!
//! A critter follows its gait, pays health for every unit it moves, eats food
//! it bumps into and, while in its prime, mates once with another eligible
//! critter it touches. It dies when it reaches the configured age limit.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::geometry::{Rect, wrap_position};
use crate::movement::MovementSequence;
use crate::resource::ResourcePool;
use crate::sprite::CritterSprite;
use crate::{WORLD_HEIGHT, WORLD_WIDTH};

/// Color channels are drawn from this range so critters stay visible on black
const COLOR_CHANNEL_MIN: u8 = 50;

/// Result of a critter update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Vitality {
    Alive,
    Dead,
}

impl Vitality {
    pub fn is_alive(self) -> bool {
        self == Vitality::Alive
    }
}

/// Critter tint. Purely cosmetic, inherited from one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random color with every channel in [50, 255]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
            g: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
            b: rng.random_range(COLOR_CHANNEL_MIN..=u8::MAX),
        }
    }
}

/// A simulated creature
#[derive(Debug, Clone)]
pub struct Agent {
    /// Top-left corner of the critter in world coordinates
    pub position: Vec2,
    pub color: Color,
    /// Unclamped, goes negative when a critter moves more than it eats
    pub health: f32,
    /// Frames lived
    pub age: u32,
    sequence: MovementSequence,
    /// Heading in degrees, [0, 360)
    rotation: f32,
    /// Set on the first mating, never cleared
    mated: bool,
    sprite: &'static CritterSprite,
}

impl Agent {
    /// Create a newborn critter
    pub fn new(position: Vec2, color: Color, sequence: MovementSequence) -> Self {
        Self {
            position,
            color,
            health: 0.0,
            age: 0,
            sequence,
            rotation: 0.0,
            mated: false,
            sprite: CritterSprite::shared(),
        }
    }

    /// Create a critter with a random position, color and gait
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = Color::random(rng);
        let position = Vec2::new(
            rng.random_range(0.0..=WORLD_WIDTH),
            rng.random_range(0.0..=WORLD_HEIGHT),
        );
        let sequence = MovementSequence::random(rng);
        Self::new(position, color, sequence)
    }

    /// Create the child of two critters.
    ///
    /// The gait is recombined slot by slot. Position and color each come from
    /// one parent, picked independently.
    pub fn offspring<R: Rng + ?Sized>(parent1: &Agent, parent2: &Agent, rng: &mut R) -> Self {
        let position = if rng.random_bool(0.5) {
            parent1.position
        } else {
            parent2.position
        };
        let sequence = MovementSequence::inherit(&parent1.sequence, &parent2.sequence, rng);
        let color = if rng.random_bool(0.5) {
            parent1.color
        } else {
            parent2.color
        };
        Self::new(position, color, sequence)
    }

    /// Builder: set starting health
    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health;
        self
    }

    /// Builder: set starting age
    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    /// Run one frame of the critter's life.
    ///
    /// `others` are the rest of the population in iteration order and are
    /// scanned for a mate. A child is pushed onto `offspring` and only joins
    /// the population once the frame is over.
    pub fn update<'a, R: Rng + ?Sized>(
        &mut self,
        pool: &mut ResourcePool,
        others: impl IntoIterator<Item = &'a mut Agent>,
        offspring: &mut Vec<Agent>,
        config: &SimConfig,
        rng: &mut R,
    ) -> Vitality {
        let movement = self.sequence.advance();

        // Age and lose health according to how much it moved
        self.age += 1;
        self.health -= movement.x.abs() + movement.y.abs();

        if self.age >= config.age_limit {
            return Vitality::Dead;
        }

        if pool.try_consume(&self.bounds(), rng) {
            self.health += config.food_power as f32;
        }

        if self.can_mate(config) {
            let bounds = self.bounds();
            let mate = others
                .into_iter()
                .find(|other| other.bounds().intersects(&bounds) && other.can_mate(config));

            if let Some(mate) = mate {
                offspring.push(Agent::offspring(self, mate, rng));
                self.mated = true;
                mate.mated = true;
            }
        }

        let old_position = self.position;
        self.position = wrap_position(self.position + movement);
        self.rotation = heading(old_position, self.position);

        Vitality::Alive
    }

    /// In mating age (inclusive window), healthy enough, and not mated before
    pub fn can_mate(&self, config: &SimConfig) -> bool {
        let in_prime = (config.mating_age_min()..=config.mating_age_max()).contains(&self.age);
        in_prime && self.health >= config.mate_health as f32 && !self.mated
    }

    pub fn mated(&self) -> bool {
        self.mated
    }

    /// Flag the critter as having mated. Cannot be undone.
    pub fn mark_mated(&mut self) {
        self.mated = true;
    }

    /// Heading in degrees, [0, 360). Only used for drawing.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Collision box used for eating, mating and drawing
    pub fn bounds(&self) -> Rect {
        Rect::new(self.position, self.sprite.size())
    }

    pub fn sequence(&self) -> &MovementSequence {
        &self.sequence
    }

    pub fn sprite(&self) -> &'static CritterSprite {
        self.sprite
    }

    /// Get render data for this critter
    pub fn render_data(&self) -> CritterRenderData {
        CritterRenderData {
            position: self.position,
            rotation: self.rotation,
            bounds: self.bounds(),
            color: self.color,
        }
    }
}

/// Sprite rotation for a step from `from` to `to`. The sprite faces up (head
/// first), hence the quarter-turn offset.
fn heading(from: Vec2, to: Vec2) -> f32 {
    let delta = from - to;
    let degrees = (delta.y.atan2(delta.x).to_degrees() - 90.0).rem_euclid(360.0);
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Render data for a critter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CritterRenderData {
    pub position: Vec2,
    pub rotation: f32,
    pub bounds: Rect,
    pub color: Color,
}
