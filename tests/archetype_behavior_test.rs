//! Integration test: Archetype attack behavior
//!
//! Samples each archetype's attack many times from a seeded generator and
//! checks damage bounds and how often each special effect fires.

use duel::{roster_combatant, Archetype, AttackOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SAMPLES: usize = 10_000;

fn sample(archetype: Archetype, seed: u64) -> Vec<AttackOutcome> {
    let combatant = roster_combatant(archetype);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..SAMPLES).map(|_| combatant.attack(&mut rng)).collect()
}

fn rate(outcomes: &[AttackOutcome], pred: impl Fn(&AttackOutcome) -> bool) -> f64 {
    outcomes.iter().filter(|o| pred(o)).count() as f64 / outcomes.len() as f64
}

#[test]
fn test_precise_is_plain_damage() {
    let outcomes = sample(Archetype::Precise, 1);

    for o in &outcomes {
        assert!((15..=25).contains(&o.damage), "damage {}", o.damage);
        assert!(!o.critical && !o.missed);
        assert_eq!(o.self_heal, 0);
    }

    // Both ends of the range show up
    assert!(outcomes.iter().any(|o| o.damage == 15));
    assert!(outcomes.iter().any(|o| o.damage == 25));
}

#[test]
fn test_agile_crits_about_one_in_five() {
    let outcomes = sample(Archetype::Agile, 2);

    let crit_rate = rate(&outcomes, |o| o.critical);
    assert!(
        (0.18..=0.22).contains(&crit_rate),
        "crit rate {:.3}",
        crit_rate
    );

    for o in &outcomes {
        if o.critical {
            assert!((20..=36).contains(&o.damage), "crit damage {}", o.damage);
            assert_eq!(o.damage % 2, 0);
        } else {
            assert!((10..=18).contains(&o.damage), "damage {}", o.damage);
        }
        assert!(!o.missed);
        assert_eq!(o.self_heal, 0);
    }
}

#[test]
fn test_heavy_misses_about_one_in_ten() {
    let outcomes = sample(Archetype::Heavy, 3);

    let miss_rate = rate(&outcomes, |o| o.missed);
    assert!(
        (0.08..=0.12).contains(&miss_rate),
        "miss rate {:.3}",
        miss_rate
    );

    for o in &outcomes {
        if o.missed {
            assert_eq!(o.damage, 0);
        } else {
            assert!((20..=30).contains(&o.damage), "damage {}", o.damage);
        }
        assert!(!o.critical);
        assert_eq!(o.self_heal, 0);
    }
}

#[test]
fn test_balanced_heals_about_three_in_ten() {
    let outcomes = sample(Archetype::Balanced, 4);

    let heal_rate = rate(&outcomes, |o| o.self_heal > 0);
    assert!(
        (0.27..=0.33).contains(&heal_rate),
        "heal rate {:.3}",
        heal_rate
    );

    for o in &outcomes {
        assert!((12..=22).contains(&o.damage), "damage {}", o.damage);
        assert!(o.self_heal == 0 || (5..=10).contains(&o.self_heal));
        assert!(!o.critical && !o.missed);
    }
}

#[test]
fn test_average_damage_ordering() {
    // Heavy hits hardest on average even after misses
    let mean = |archetype| {
        let outcomes = sample(archetype, 5);
        outcomes.iter().map(|o| o.damage as f64).sum::<f64>() / SAMPLES as f64
    };

    let heavy = mean(Archetype::Heavy);
    let precise = mean(Archetype::Precise);
    let balanced = mean(Archetype::Balanced);
    let agile = mean(Archetype::Agile);

    assert!(heavy > precise, "heavy {:.2} precise {:.2}", heavy, precise);
    assert!(precise > balanced, "precise {:.2} balanced {:.2}", precise, balanced);
    assert!(precise > agile, "precise {:.2} agile {:.2}", precise, agile);
}
