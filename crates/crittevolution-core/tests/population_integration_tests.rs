//! End-to-end scenarios for critter lifecycles and population frames

use crittevolution_core::{
    Agent, Color, MovementPattern, MovementSequence, Population, Rect, ResourcePool, SimConfig,
    Vitality,
};
use glam::Vec2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn still_critter(position: Vec2) -> Agent {
    let sequence = MovementSequence::from_patterns([MovementPattern::stationary(100); 3]);
    Agent::new(position, Color::new(120, 180, 240), sequence)
}

fn no_food() -> ResourcePool {
    ResourcePool::from_points(Vec::new())
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_still_critter_lives_until_age_limit() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(1);
    let config = SimConfig::default();
    let mut pool = no_food();
    let mut critter = still_critter(Vec2::new(400.0, 300.0)).with_health(1000.0);

    for frame in 1..2000 {
        let vitality = critter.update(&mut pool, [], &mut Vec::new(), &config, &mut rng);
        assert_eq!(vitality, Vitality::Alive, "died early at frame {}", frame);
        assert_eq!(critter.age, frame);
    }

    let vitality = critter.update(&mut pool, [], &mut Vec::new(), &config, &mut rng);
    assert_eq!(vitality, Vitality::Dead);
    assert_eq!(critter.age, 2000);
    assert_eq!(critter.health, 1000.0);
}

#[test]
fn test_dead_critter_is_removed_from_population() {
    let config = SimConfig {
        age_limit: 100,
        ..SimConfig::default()
    };
    let old = still_critter(Vec2::new(100.0, 100.0)).with_age(98);
    let young = still_critter(Vec2::new(500.0, 100.0));
    let mut population = Population::from_parts(config, vec![old, young], no_food(), 9);

    let stats = population.step();
    assert_eq!(stats.deaths, 0);
    assert_eq!(population.count(), 2);

    let stats = population.step();
    assert_eq!(stats.deaths, 1);
    assert_eq!(population.count(), 1);
    assert_eq!(population.agents()[0].age, 2);
}

// ============================================================================
// Mating
// ============================================================================

#[test]
fn test_colocated_pair_produces_one_child() {
    let config = SimConfig::default();
    let position = Vec2::new(250.0, 250.0);
    let parents = vec![
        still_critter(position).with_age(500).with_health(300.0),
        still_critter(position).with_age(500).with_health(300.0),
    ];
    let mut population = Population::from_parts(config, parents, no_food(), 11);

    let stats = population.step();

    assert_eq!(stats.births, 1);
    assert_eq!(population.count(), 3);
    assert!(population.agents()[0].mated());
    assert!(population.agents()[1].mated());

    // Newborn is appended and has not been updated yet
    let child = &population.agents()[2];
    assert_eq!(child.age, 0);
    assert!(!child.mated());
}

#[test]
fn test_parents_never_mate_twice() {
    let config = SimConfig::default();
    let position = Vec2::new(250.0, 250.0);
    let parents = vec![
        still_critter(position).with_age(600).with_health(5000.0),
        still_critter(position).with_age(600).with_health(5000.0),
    ];
    let mut population = Population::from_parts(config, parents, no_food(), 12);

    let births: usize = (0..50).map(|_| population.step().births).sum();

    assert_eq!(births, 1);
}

#[test]
fn test_crowd_pairs_each_critter_at_most_once() {
    let config = SimConfig::default();
    let position = Vec2::new(400.0, 400.0);
    let crowd: Vec<Agent> = (0..5)
        .map(|_| still_critter(position).with_age(700).with_health(1000.0))
        .collect();
    let mut population = Population::from_parts(config, crowd, no_food(), 13);

    let stats = population.step();

    // Five eligible critters form two pairs, one is left over
    assert_eq!(stats.births, 2);
    let mated = population.agents()[..5].iter().filter(|a| a.mated()).count();
    assert_eq!(mated, 4);
    assert!(!population.agents()[4].mated());
}

#[test]
fn test_newborns_skip_birth_frame() {
    let config = SimConfig::default();
    let position = Vec2::new(250.0, 250.0);
    let parents = vec![
        still_critter(position).with_age(500).with_health(300.0),
        still_critter(position).with_age(500).with_health(300.0),
    ];
    let mut population = Population::from_parts(config, parents, no_food(), 14);

    population.step();
    assert_eq!(population.agents()[2].age, 0);

    population.step();
    assert_eq!(population.agents()[2].age, 1);
}

// ============================================================================
// Food
// ============================================================================

#[test]
fn test_single_food_pool_refills() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(15);
    let food = Vec2::new(55.0, 55.0);
    let mut pool = ResourcePool::from_points(vec![food]);
    let region = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(10.0, 17.0));

    assert!(pool.try_consume(&region, &mut rng));
    assert_eq!(pool.capacity(), 1);
    assert_ne!(pool.points()[0], food);
}

#[test]
fn test_critter_eats_one_food_per_frame() {
    let config = SimConfig::default();
    let position = Vec2::new(100.0, 100.0);
    let pool = ResourcePool::from_points(vec![
        Vec2::new(101.0, 101.0),
        Vec2::new(102.0, 102.0),
        Vec2::new(103.0, 103.0),
    ]);
    let mut population = Population::from_parts(config, vec![still_critter(position)], pool, 16);

    population.step();

    assert_eq!(population.agents()[0].health, 300.0);
    assert_eq!(population.pool().capacity(), 3);
}

// ============================================================================
// Long runs
// ============================================================================

#[test]
fn test_long_run_invariants() {
    let config = SimConfig::default();
    let mut population = Population::new(config.clone(), 2024);

    for _ in 0..3000 {
        let before = population.count();
        let stats = population.step();

        assert_eq!(stats.population, before + stats.births - stats.deaths);
        assert_eq!(population.pool().capacity(), config.foods as usize);
        for agent in population.agents() {
            assert!(agent.age < config.age_limit);
            assert!((0.0..=800.0).contains(&agent.position.x));
            assert!((0.0..=600.0).contains(&agent.position.y));
            assert!((0.0..360.0).contains(&agent.rotation()));
        }

        if population.is_extinct() {
            break;
        }
    }
}
