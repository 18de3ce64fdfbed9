//! Simulation parameters

use serde::{Deserialize, Serialize};

/// Parameters fixed for the duration of a run.
///
/// Passed explicitly to the population and to each critter update so tests can
/// run with any combination of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Frames a critter lives before dying
    pub age_limit: u32,
    /// Minimum health required to mate
    pub mate_health: u32,
    /// Number of food points in the world
    pub foods: u32,
    /// Health gained per food eaten
    pub food_power: u32,
    /// Number of critters at simulation start
    pub critters: u32,
}

impl SimConfig {
    pub const DEFAULT_AGE_LIMIT: u32 = 2000;
    pub const DEFAULT_MATE_HEALTH: u32 = 300;
    pub const DEFAULT_FOODS: u32 = 200;
    pub const DEFAULT_FOOD_POWER: u32 = 300;
    pub const DEFAULT_CRITTERS: u32 = 20;

    /// Youngest age at which a critter may mate
    pub fn mating_age_min(&self) -> u32 {
        self.age_limit / 4
    }

    /// Oldest age at which a critter may mate
    pub fn mating_age_max(&self) -> u32 {
        (self.age_limit / 4) * 3
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            age_limit: Self::DEFAULT_AGE_LIMIT,
            mate_health: Self::DEFAULT_MATE_HEALTH,
            foods: Self::DEFAULT_FOODS,
            food_power: Self::DEFAULT_FOOD_POWER,
            critters: Self::DEFAULT_CRITTERS,
        }
    }
}

impl std::fmt::Display for SimConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "age limit {}, min mate health {}, foods {}, food power {}, initial critters {}",
            self.age_limit, self.mate_health, self.foods, self.food_power, self.critters
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.age_limit, 2000);
        assert_eq!(config.mate_health, 300);
        assert_eq!(config.foods, 200);
        assert_eq!(config.food_power, 300);
        assert_eq!(config.critters, 20);
    }

    #[test]
    fn test_mating_window() {
        let config = SimConfig::default();
        assert_eq!(config.mating_age_min(), 500);
        assert_eq!(config.mating_age_max(), 1500);

        // Integer division truncates before scaling
        let odd = SimConfig {
            age_limit: 10,
            ..SimConfig::default()
        };
        assert_eq!(odd.mating_age_min(), 2);
        assert_eq!(odd.mating_age_max(), 6);
    }
}
