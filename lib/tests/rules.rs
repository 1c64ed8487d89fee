use bagolife_lib::{
    randomize,
    rules::{preset_name, AGE_PRESETS, MAX_COUNT, PRESETS, RANDOM_AGE_LIMIT},
    select_preset, AgeLife, AgeSet, Counts, Error as BagError, Life, RuleSet,
};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

#[test]
fn parse_rule_string() -> Result<(), Box<dyn Error>> {
    let life: Life = "B36/S23".parse()?;
    assert_eq!(life.birth.iter().collect::<Vec<_>>(), [3, 6]);
    assert_eq!(life.survive.iter().collect::<Vec<_>>(), [2, 3]);
    assert_eq!(life.to_string(), "B36/S23");
    assert!("foo".parse::<Life>().is_err());
    Ok(())
}

#[test]
fn preset_catalog() -> Result<(), Box<dyn Error>> {
    assert_eq!(PRESETS[0].rule.to_string(), "B3/S23");
    assert_eq!(PRESETS[6].rule, "B24/S456".parse::<Life>()?);
    assert_eq!(PRESETS[7].rule.to_string(), "B056/S19");
    assert!(PRESETS[7].rule.survive.contains(MAX_COUNT));
    for (preset, age_preset) in PRESETS.iter().zip(AGE_PRESETS.iter()).take(8) {
        assert_eq!(preset.rule, age_preset.life);
    }
    assert_eq!(preset_name(8, true), Some("Game Boy shrinking window"));
    assert_eq!(preset_name(2, false), Some("HighLife"));
    assert_eq!(preset_name(10, false), None);
    Ok(())
}

#[test]
fn select_plain_preset() -> Result<(), Box<dyn Error>> {
    let rule = select_preset(2, false)?;
    assert_eq!(rule, RuleSet::Plain("B36/S23".parse()?));
    assert!(!rule.is_age_weighted());

    let aged = rule.with_age_weighting(true, 15);
    assert_eq!(
        aged,
        RuleSet::AgeWeighted(AgeLife::new(
            "B36/S23".parse()?,
            AgeSet::full(15),
            AgeSet::full(15)
        ))
    );
    Ok(())
}

#[test]
fn select_age_preset() -> Result<(), Box<dyn Error>> {
    let rule = select_preset(9, true)?;
    let expected = AgeLife::new(
        "B1/S138".parse()?,
        AgeSet::from_ages([1, 4, 6, 7, 8, 9, 11, 13, 14, 15])?,
        AgeSet::from_ages([2, 3, 4, 5, 6, 7, 8, 11, 12, 14])?,
    );
    assert_eq!(rule, RuleSet::AgeWeighted(expected));
    Ok(())
}

#[test]
fn unknown_preset() {
    assert_eq!(select_preset(10, false), Err(BagError::UnknownPreset(10)));
    assert_eq!(select_preset(42, true), Err(BagError::UnknownPreset(42)));
}

#[test]
fn toggle_twice() -> Result<(), Box<dyn Error>> {
    let mut rule = select_preset(0, true)?;
    let original = rule.clone();
    for count in 0..=MAX_COUNT {
        let present = rule.life().birth.contains(count);
        assert_eq!(rule.toggle_birth(count)?, !present);
        assert_eq!(rule.toggle_birth(count)?, present);
        let present = rule.life().survive.contains(count);
        assert_eq!(rule.toggle_survive(count)?, !present);
        assert_eq!(rule.toggle_survive(count)?, present);
    }
    for age in 1..=15 {
        rule.toggle_birth_age(age)?;
        rule.toggle_birth_age(age)?;
        rule.toggle_survive_age(age)?;
        rule.toggle_survive_age(age)?;
    }
    assert_eq!(rule, original);
    Ok(())
}

#[test]
fn toggle_errors() -> Result<(), Box<dyn Error>> {
    let mut rule = select_preset(0, false)?;
    assert_eq!(rule.toggle_birth(10), Err(BagError::CountOutOfRange(10)));
    assert_eq!(rule.toggle_birth_age(3), Err(BagError::NotAgeWeighted));
    assert_eq!(rule, select_preset(0, false)?);

    let mut aged = select_preset(0, true)?;
    assert_eq!(aged.toggle_survive_age(0), Err(BagError::AgeOutOfRange(0)));
    Ok(())
}

#[test]
fn counts_reject_out_of_range() {
    assert_eq!(
        Counts::from_counts([1, 2, 12]),
        Err(BagError::CountOutOfRange(12))
    );
    let counts: Counts = [0, 9, 12].into_iter().collect();
    assert_eq!(counts.iter().collect::<Vec<_>>(), [0, 9]);
    assert_eq!(counts.to_string(), "09");
}

#[test]
fn random_plain_rules() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let rule = randomize(&mut rng, false);
        assert!(!rule.is_age_weighted());
        let life = rule.life();
        for counts in [life.birth, life.survive] {
            assert!(counts.len() <= 5);
            assert!(counts.iter().all(|count| count <= 8));
        }
    }
}

#[test]
fn random_age_rules() {
    let mut rng = StdRng::seed_from_u64(2025);
    let mut thinned = 0;
    for _ in 0..200 {
        match randomize(&mut rng, true) {
            RuleSet::AgeWeighted(rule) => {
                for ages in [&rule.birth_age, &rule.survive_age] {
                    assert!(ages.iter().all(|age| (1..=RANDOM_AGE_LIMIT).contains(&age)));
                }
                let (birth, survive) = (rule.birth_age.len(), rule.survive_age.len());
                if birth >= 12 {
                    // The same number of ages is removed from both sets.
                    assert_eq!(birth, survive);
                    thinned += 1;
                } else {
                    assert!((5..=10).contains(&birth));
                    assert!((5..=10).contains(&survive));
                }
            }
            RuleSet::Plain(_) => panic!("expected an age-weighted rule"),
        }
    }
    assert!(thinned > 100);
}

#[test]
fn random_rules_are_reproducible() {
    let first = randomize(&mut StdRng::seed_from_u64(5), true);
    let second = randomize(&mut StdRng::seed_from_u64(5), true);
    assert_eq!(first, second);
}

#[test]
fn age_sets_across_words() -> Result<(), Box<dyn Error>> {
    let full = AgeSet::full(64);
    assert_eq!(full.len(), 64);
    assert!(!full.contains(0));
    assert!(full.contains(1) && full.contains(63) && full.contains(64));
    assert!(!full.contains(65));
    assert_eq!(AgeSet::full(15).iter().collect::<Vec<_>>(), (1..=15).collect::<Vec<_>>());

    let mut ages = full.clone();
    assert!(ages.toggle(200)?);
    assert!(!ages.toggle(200)?);
    assert_eq!(ages, full);
    assert!(!ages.toggle(64)?);
    assert_eq!(ages, AgeSet::full(63));

    let sparse = AgeSet::from_ages([130, 2, 3, 4, 9])?;
    assert_eq!(sparse.iter().collect::<Vec<_>>(), [2, 3, 4, 9, 130]);
    assert_eq!(sparse.to_string(), "2-4,9,130");
    assert!(AgeSet::default().is_empty());
    assert_eq!(AgeSet::from_ages([5, 0]), Err(BagError::AgeOutOfRange(0)));
    Ok(())
}
