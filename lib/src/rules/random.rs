//! Random rules.

use super::{
    age::{AgeLife, AgeSet, RuleSet},
    life::{Counts, Life},
};
use crate::grid::Age;
use log::info;
use rand::{seq::index, Rng};

/// Random counts are drawn from `0..=8`, as in rule strings.
const RANDOM_COUNTS: usize = 9;

/// Random age sets are drawn from `1..=15`, whatever the age limit.
pub const RANDOM_AGE_LIMIT: Age = 15;

fn random_counts<R: Rng + ?Sized>(rng: &mut R) -> Counts {
    let amount = rng.gen_range(0..=5);
    index::sample(rng, RANDOM_COUNTS, amount)
        .into_iter()
        .map(|count| count as u8)
        .collect()
}

/// The full age range with `amount` random ages removed.
fn thinned_ages<R: Rng + ?Sized>(rng: &mut R, amount: usize) -> AgeSet {
    let removed = index::sample(rng, RANDOM_AGE_LIMIT as usize, amount).into_vec();
    (1..=RANDOM_AGE_LIMIT)
        .filter(|&age| !removed.contains(&(age as usize - 1)))
        .collect()
}

fn random_ages<R: Rng + ?Sized>(rng: &mut R) -> AgeSet {
    let amount = rng.gen_range(5..=10);
    index::sample(rng, RANDOM_AGE_LIMIT as usize, amount)
        .into_iter()
        .map(|i| i as Age + 1)
        .collect()
}

/// Generates a random rule.
///
/// The birth and survival sets are independent random subsets of `0..=8`,
/// each with at most 5 elements.
///
/// In age-weighted mode, the age sets are usually (with probability 0.8)
/// the full range `1..=15` with a few ages removed from each; the same number
/// of ages, at most 3, is removed from both sets. Otherwise they are random
/// subsets of 5 to 10 ages.
pub fn randomize<R: Rng + ?Sized>(rng: &mut R, age_weighted: bool) -> RuleSet {
    let life = Life::new(random_counts(rng), random_counts(rng));
    let rule: RuleSet = if age_weighted {
        let (birth_age, survive_age) = if rng.gen_bool(0.8) {
            let amount = rng.gen_range(0..=3);
            (thinned_ages(rng, amount), thinned_ages(rng, amount))
        } else {
            (random_ages(rng), random_ages(rng))
        };
        AgeLife::new(life, birth_age, survive_age).into()
    } else {
        life.into()
    };
    info!("Randomized rules: {}", rule);
    rule
}
