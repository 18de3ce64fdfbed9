//! Population management
//!
//! Owns every live critter, the food pool and the run's random stream, and
//! drives one frame at a time. Births and deaths are staged during the pass
//! and applied once it is over, so the set of critters updated in a frame is
//! exactly the set alive when the frame started.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::agent::{Agent, CritterRenderData, Vitality};
use crate::config::SimConfig;
use crate::resource::ResourcePool;
use crate::stats::FrameStats;

/// Manages the critter population and its food
pub struct Population {
    config: SimConfig,
    agents: Vec<Agent>,
    pool: ResourcePool,
    rng: Xoshiro256StarStar,
    frame: u64,
}

impl Population {
    /// Create a population of random critters and a full food pool.
    ///
    /// `seed` initializes the single random stream used for the whole run.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let pool = ResourcePool::new(config.foods as usize, &mut rng);
        let agents = (0..config.critters).map(|_| Agent::random(&mut rng)).collect();

        log::info!(
            "Spawned {} critters and {} foods (seed {})",
            config.critters,
            config.foods,
            seed
        );

        Self {
            config,
            agents,
            pool,
            rng,
            frame: 0,
        }
    }

    /// Create a population from prepared critters and food
    pub fn from_parts(
        config: SimConfig,
        agents: Vec<Agent>,
        pool: ResourcePool,
        seed: u64,
    ) -> Self {
        Self {
            config,
            agents,
            pool,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            frame: 0,
        }
    }

    /// Simulate one frame.
    ///
    /// Every critter alive at the start of the frame is updated once, in
    /// order. Dead critters are removed afterwards (survivors keep their
    /// order) and newborns are appended; newborns first move next frame.
    pub fn step(&mut self) -> FrameStats {
        self.frame += 1;

        let mut dead = Vec::new();
        let mut offspring = Vec::new();

        for index in 0..self.agents.len() {
            let (before, rest) = self.agents.split_at_mut(index);
            let Some((agent, after)) = rest.split_first_mut() else {
                break;
            };

            let vitality = agent.update(
                &mut self.pool,
                before.iter_mut().chain(after.iter_mut()),
                &mut offspring,
                &self.config,
                &mut self.rng,
            );

            if vitality == Vitality::Dead {
                dead.push(index);
            }
        }

        // Remove dead critters
        let deaths = dead.len();
        if deaths > 0 {
            let mut index = 0;
            self.agents.retain(|_| {
                let keep = dead.binary_search(&index).is_err();
                index += 1;
                keep
            });
        }

        // Newborns join after the pass
        let births = offspring.len();
        self.agents.extend(offspring);

        if births > 0 || deaths > 0 {
            log::debug!(
                "Frame {}: {} born, {} died. Population: {}",
                self.frame,
                births,
                deaths,
                self.agents.len()
            );
        }

        FrameStats::collect(
            self.frame,
            &self.agents,
            births,
            deaths,
            self.pool.capacity(),
        )
    }

    /// Number of frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get number of live critters
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    /// True once every critter has died
    pub fn is_extinct(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn pool(&self) -> &ResourcePool {
        &self.pool
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Get render data for all critters (for rendering)
    pub fn render_data(&self) -> Vec<CritterRenderData> {
        self.agents.iter().map(Agent::render_data).collect()
    }
}
