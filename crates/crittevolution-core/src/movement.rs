//! Critter movement: trigonometric patterns chained into a repeating gait
//!
//! A [`MovementPattern`] combines a steady drift with a sine/cosine wobble and
//! lasts a fixed number of frames. A [`MovementSequence`] cycles through
//! [`NUM_MOVEMENTS`] patterns for the whole life of a critter and is the part
//! of the critter that gets recombined when two critters mate.

use glam::Vec2;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

/// Number of patterns that make up a critter's gait
pub const NUM_MOVEMENTS: usize = 3;

/// Standard deviation of the steady drift per axis
const VELOCITY_SIGMA: f32 = 1.0;
/// Standard deviation of the wobble amplitude per axis
const AMPLITUDE_SIGMA: f32 = 3.0;
/// Standard deviation of the per-frame phase increment per axis
const PHASE_STEP_SIGMA: f32 = 0.2;
/// Pattern durations are drawn from this frame range
const DURATION_RANGE: std::ops::Range<u32> = 20..200;

/// One time-bounded segment of motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementPattern {
    /// Steady movement along each axis
    velocity: Vec2,
    /// Wobble amplitude (x uses cosine, y uses sine)
    amplitude: Vec2,
    /// Phase advance per frame
    phase_step: Vec2,
    /// Running phase
    phase: Vec2,
    /// How many frames the pattern lasts
    duration: u32,
    /// Frames left before the pattern is exhausted
    remaining: u32,
}

impl MovementPattern {
    /// Create a pattern with explicit parameters. Duration is at least one frame.
    pub fn new(velocity: Vec2, amplitude: Vec2, phase_step: Vec2, duration: u32) -> Self {
        Self {
            velocity,
            amplitude,
            phase_step,
            phase: Vec2::ZERO,
            duration: duration.max(1),
            remaining: 0,
        }
    }

    /// Create a pattern with all parameters drawn at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let velocity = normal_vec2(rng, VELOCITY_SIGMA);
        let amplitude = normal_vec2(rng, AMPLITUDE_SIGMA);
        let phase_step = normal_vec2(rng, PHASE_STEP_SIGMA);
        let duration = rng.random_range(DURATION_RANGE);
        Self::new(velocity, amplitude, phase_step, duration)
    }

    /// Pattern that never moves, for fixtures and stationary critters
    pub fn stationary(duration: u32) -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO, Vec2::ZERO, duration)
    }

    /// Reset the countdown so the pattern runs for its full duration again
    pub fn start(&mut self) {
        self.remaining = self.duration;
    }

    /// Execute one frame of the pattern.
    ///
    /// Returns `None` once the pattern is exhausted. A started pattern yields
    /// exactly `duration` displacements before that.
    pub fn advance(&mut self) -> Option<Vec2> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        self.phase += self.phase_step;

        Some(Vec2::new(
            self.velocity.x + self.phase.x.cos() * self.amplitude.x,
            self.velocity.y + self.phase.y.sin() * self.amplitude.y,
        ))
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn amplitude(&self) -> Vec2 {
        self.amplitude
    }

    pub fn phase_step(&self) -> Vec2 {
        self.phase_step
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Frames left before exhaustion
    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

fn normal_vec2<R: Rng + ?Sized>(rng: &mut R, sigma: f32) -> Vec2 {
    let x: f32 = rng.sample(StandardNormal);
    let y: f32 = rng.sample(StandardNormal);
    Vec2::new(x * sigma, y * sigma)
}

/// A critter's lifelong gait: patterns played in order, wrapping around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSequence {
    patterns: [MovementPattern; NUM_MOVEMENTS],
    current: usize,
}

impl MovementSequence {
    /// Build a sequence from patterns and start the first one
    pub fn from_patterns(patterns: [MovementPattern; NUM_MOVEMENTS]) -> Self {
        let mut sequence = Self {
            patterns,
            current: 0,
        };
        sequence.patterns[0].start();
        sequence
    }

    /// Build a sequence of fresh random patterns
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_patterns(std::array::from_fn(|_| MovementPattern::random(rng)))
    }

    /// Recombine two parent gaits.
    ///
    /// Each slot is copied whole from one parent, chosen independently per slot.
    pub fn inherit<R: Rng + ?Sized>(
        parent1: &MovementSequence,
        parent2: &MovementSequence,
        rng: &mut R,
    ) -> Self {
        Self::from_patterns(std::array::from_fn(|slot| {
            if rng.random_bool(0.5) {
                parent1.patterns[slot]
            } else {
                parent2.patterns[slot]
            }
        }))
    }

    /// Displacement for the next frame.
    ///
    /// When the active pattern runs out the next slot is started and its first
    /// displacement is used, so every call yields a movement.
    pub fn advance(&mut self) -> Vec2 {
        if let Some(displacement) = self.patterns[self.current].advance() {
            return displacement;
        }

        self.current = (self.current + 1) % NUM_MOVEMENTS;
        let next = &mut self.patterns[self.current];
        next.start();
        next.advance().unwrap_or(Vec2::ZERO)
    }

    pub fn patterns(&self) -> &[MovementPattern; NUM_MOVEMENTS] {
        &self.patterns
    }

    /// Index of the active pattern
    pub fn current_index(&self) -> usize {
        self.current
    }
}
