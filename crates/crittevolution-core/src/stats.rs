//! Per-frame population statistics

use serde::{Deserialize, Serialize};

use crate::agent::Agent;

/// Summary of one simulated frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Critters alive after the frame
    pub population: usize,
    /// Critters born this frame
    pub births: usize,
    /// Critters that reached the age limit this frame
    pub deaths: usize,
    /// Food points in the world
    pub food: usize,
    pub mean_health: f32,
    pub mean_age: f32,
    /// Critters that have already mated
    pub mated: usize,
}

impl FrameStats {
    /// Summarize the population as it stands after a frame
    pub fn collect(
        frame: u64,
        agents: &[Agent],
        births: usize,
        deaths: usize,
        food: usize,
    ) -> Self {
        let population = agents.len();
        let (mean_health, mean_age) = if population == 0 {
            (0.0, 0.0)
        } else {
            let health: f32 = agents.iter().map(|a| a.health).sum();
            let age: u64 = agents.iter().map(|a| a.age as u64).sum();
            (health / population as f32, age as f32 / population as f32)
        };

        Self {
            frame,
            population,
            births,
            deaths,
            food,
            mean_health,
            mean_age,
            mated: agents.iter().filter(|a| a.mated()).count(),
        }
    }
}

impl std::fmt::Display for FrameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame {}: {} critters (+{} -{}), mean health {:.1}, mean age {:.0}, {} mated",
            self.frame,
            self.population,
            self.births,
            self.deaths,
            self.mean_health,
            self.mean_age,
            self.mated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Color;
    use crate::movement::{MovementPattern, MovementSequence};
    use glam::Vec2;

    fn critter(health: f32, age: u32) -> Agent {
        let sequence = MovementSequence::from_patterns([MovementPattern::stationary(10); 3]);
        Agent::new(Vec2::ZERO, Color::new(50, 50, 50), sequence)
            .with_health(health)
            .with_age(age)
    }

    #[test]
    fn test_empty_population_stats() {
        let stats = FrameStats::collect(3, &[], 0, 2, 10);
        assert_eq!(stats.population, 0);
        assert_eq!(stats.deaths, 2);
        assert_eq!(stats.mean_health, 0.0);
        assert_eq!(stats.mean_age, 0.0);
    }

    #[test]
    fn test_means_and_mated_count() {
        let mut mated = critter(300.0, 100);
        mated.mark_mated();
        let agents = vec![critter(100.0, 10), critter(-100.0, 30), mated];

        let stats = FrameStats::collect(1, &agents, 1, 0, 200);

        assert_eq!(stats.population, 3);
        assert!((stats.mean_health - 100.0).abs() < 1e-4);
        assert!((stats.mean_age - 140.0 / 3.0).abs() < 1e-4);
        assert_eq!(stats.mated, 1);
        assert_eq!(stats.food, 200);
    }
}
