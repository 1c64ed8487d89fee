use bagolife_lib::{
    age_limit, rules::PRESETS, AgeSet, Cadence, Config, Error as BagError, Grid, Rgb, RuleSet,
    Selection, MAX_SIZE, MIN_SIZE,
};
use rand::{rngs::StdRng, SeedableRng};
use std::error::Error;

#[test]
fn default_config() -> Result<(), Box<dyn Error>> {
    let config = Config::default();
    assert_eq!((config.width, config.height), (64, 48));
    assert_eq!(config.resolution, 4);
    assert_eq!(config.rule_string, "B24/S456");
    assert_eq!(config.palette, Selection::Catalog(0));
    assert!(config.reverse_palette && config.flicker_reduction);
    assert_eq!((config.fps, config.frames_per_step), (10, 4));

    let world = config.world()?;
    assert_eq!(world.rule(), &RuleSet::Plain(PRESETS[6].rule));
    assert_eq!(world.age_limit(), 15);
    assert_eq!(world.palette().colors().len(), 16);
    assert!(world.grid().is_empty());
    Ok(())
}

#[test]
fn config_errors() {
    assert_eq!(
        Config::new(0, 10).world().err(),
        Some(BagError::SizeOutOfRange(0, 10))
    );
    assert_eq!(
        Config::new(4, 10).world().err(),
        Some(BagError::SizeOutOfRange(4, 10))
    );
    assert_eq!(
        Config::new(10, 601).world().err(),
        Some(BagError::SizeOutOfRange(10, 601))
    );
    assert_eq!(
        Config::new(10, 10).set_resolution(21).world().err(),
        Some(BagError::ResolutionOutOfRange(21))
    );
    assert_eq!(
        Config::new(10, 10).set_preset(Some(10)).world().err(),
        Some(BagError::UnknownPreset(10))
    );
    assert_eq!(
        Config::new(10, 10).set_palette(Selection::Catalog(20)).world().err(),
        Some(BagError::UnknownPalette(20))
    );
    assert!(Config::new(10, 10).set_rule_string("B3/Q23").world().is_err());
}

#[test]
fn age_limits() -> Result<(), Box<dyn Error>> {
    assert_eq!(age_limit(1)?, 1);
    assert_eq!(age_limit(4)?, 15);
    assert_eq!(age_limit(20)?, 1_048_575);
    assert_eq!(age_limit(0), Err(BagError::ResolutionOutOfRange(0)));
    Ok(())
}

#[test]
fn rule_string_in_age_mode() -> Result<(), Box<dyn Error>> {
    let config = Config::new(10, 10)
        .set_rule_string("B3/S23")
        .set_age_weighted(true)
        .set_resolution(3);
    match config.world()?.rule() {
        RuleSet::AgeWeighted(rule) => {
            assert_eq!(rule.birth_age, AgeSet::full(7));
            assert_eq!(rule.survive_age, AgeSet::full(7));
        }
        RuleSet::Plain(_) => panic!("expected an age-weighted rule"),
    }
    Ok(())
}

#[test]
fn grid_editing() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(4, 3, 15)?;
    assert_eq!(grid.toggle((1, 2))?, 1);
    grid.set((3, 0), 15)?;
    assert_eq!(grid.population(), 2);
    assert_eq!(grid.set((3, 0), 16), Err(BagError::AgeOutOfRange(16)));
    assert_eq!(grid.set((4, 0), 1), Err(BagError::SetCellError((4, 0))));
    assert_eq!(grid.get((4, 0)), None);
    assert_eq!(grid.to_string(), "...O\n....\n.O..\n");
    assert_eq!(grid.toggle((3, 0))?, 0);
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(Grid::new(0, 3, 15), Err(BagError::NonPositiveError));
    Ok(())
}

#[test]
fn resize_keeps_overlap() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(4, 4, 15)?;
    grid.set((0, 0), 3)?;
    grid.set((3, 3), 5)?;
    grid.set((1, 2), 1)?;

    let larger = grid.resize(6, 5)?;
    assert_eq!(larger.get((0, 0)), Some(3));
    assert_eq!(larger.get((3, 3)), Some(5));
    assert_eq!(larger.get((1, 2)), Some(1));
    assert_eq!(larger.population(), 3);

    let smaller = grid.resize(2, 3)?;
    assert_eq!(smaller.to_string(), "O.\n..\n.O\n");
    Ok(())
}

#[test]
fn seed_pattern() -> Result<(), Box<dyn Error>> {
    let glider = [[0u32, 1, 0], [0, 0, 1], [1, 1, 1]];
    let grid = Grid::from_pattern(&glider, 7, 6, 15)?;
    assert_eq!(
        grid.to_string(),
        ".......\n\
         ...O...\n\
         ....O..\n\
         ..OOO..\n\
         .......\n\
         .......\n"
    );
    assert_eq!(
        Grid::from_pattern(&glider, 2, 6, 15),
        Err(BagError::PatternTooLarge {
            pattern_width: 3,
            pattern_height: 3,
            width: 2,
            height: 6,
        })
    );
    Ok(())
}

#[test]
#[should_panic]
fn row_out_of_range() {
    if let Ok(grid) = Grid::new(3, 2, 15) {
        grid.row(2);
    }
}

#[cfg(feature = "serde")]
#[test]
fn grid_serde_checks_cells() -> Result<(), Box<dyn Error>> {
    let mut grid = Grid::new(3, 2, 7)?;
    grid.set((1, 0), 7)?;
    let json = serde_json::to_string(&grid)?;
    assert_eq!(serde_json::from_str::<Grid>(&json)?, grid);

    let short = r#"{"width": 3, "height": 2, "age_limit": 7, "cells": [0, 0, 0]}"#;
    assert!(serde_json::from_str::<Grid>(short).is_err());
    let old = r#"{"width": 1, "height": 2, "age_limit": 7, "cells": [0, 8]}"#;
    assert!(serde_json::from_str::<Grid>(old).is_err());
    let empty = r#"{"width": 0, "height": 0, "age_limit": 7, "cells": []}"#;
    assert!(serde_json::from_str::<Grid>(empty).is_err());
    Ok(())
}

#[test]
fn world_steps() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(5, 5).set_preset(Some(0)).world()?;
    world.seed(&[[1u32, 1, 1]])?;
    world.step();
    assert_eq!(world.generation(), 1);
    assert_eq!(world.grid().population(), 5);
    world.run(2);
    assert_eq!(world.generation(), 3);
    assert!(world.grid().is_empty());

    world.toggle_cell((2, 2))?;
    world.set_cell((1, 1), 7)?;
    assert_eq!(world.grid().population(), 2);
    world.clear();
    assert_eq!(world.generation(), 0);
    assert!(world.grid().is_empty());
    Ok(())
}

#[test]
fn world_resize_clamps() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).world()?;
    world.set_cell((1, 1), 4)?;
    world.resize(2, 1000)?;
    assert_eq!((world.width(), world.height()), (MIN_SIZE, MAX_SIZE));
    assert_eq!(world.grid().get((1, 1)), Some(4));
    world.step();
    assert_eq!(world.grid().width(), MIN_SIZE);

    let mut smallest = Config::new(MIN_SIZE, MIN_SIZE).world()?;
    smallest.resize(MIN_SIZE, MIN_SIZE)?;
    assert_eq!((smallest.width(), smallest.height()), (MIN_SIZE, MIN_SIZE));
    Ok(())
}

#[test]
fn presets_and_modes() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).world()?;
    world.select_preset(2)?;
    assert_eq!(world.rule().to_string(), "B36/S23");

    world.set_age_weighted(true)?;
    assert!(world.is_age_weighted());
    assert!(!world.toggle_birth_age(4)?);
    assert_eq!(world.toggle_survive_age(16), Err(BagError::AgeOutOfRange(16)));

    world.select_preset(8)?;
    assert_eq!(world.rule().life().to_string(), "B012378/S0123456");

    let before = world.rule().clone();
    assert_eq!(world.select_preset(10), Err(BagError::UnknownPreset(10)));
    assert_eq!(world.rule(), &before);

    world.set_age_weighted(false)?;
    assert_eq!(world.toggle_birth_age(1), Err(BagError::NotAgeWeighted));
    Ok(())
}

#[test]
fn b0_tints_dead_color() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).set_preset(Some(0)).world()?;
    assert_eq!(world.palette().dead_color(), Rgb::new(30, 30, 30));

    assert!(world.toggle_birth(0)?);
    assert_eq!(world.palette().dead_color(), Rgb::new(85, 0, 153));

    world.set_flicker_reduction(false)?;
    assert_eq!(world.palette().dead_color(), Rgb::new(30, 30, 30));
    world.set_flicker_reduction(true)?;

    world.set_reverse_palette(false)?;
    assert_eq!(world.palette().dead_color(), Rgb::new(153, 0, 0));

    assert!(!world.toggle_birth(0)?);
    assert_eq!(world.palette().dead_color(), Rgb::new(30, 30, 30));
    Ok(())
}

#[test]
fn palette_changes() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).world()?;
    world.set_palette(Selection::Catalog(2))?;
    assert_eq!(world.palette().name(), "Fire");
    assert_eq!(world.palette().colors().len(), 16);

    assert_eq!(
        world.set_palette(Selection::Catalog(11)),
        Err(BagError::UnknownPalette(11))
    );
    assert_eq!(world.palette().name(), "Fire");
    assert_eq!(world.palette_settings().selection, Selection::Catalog(2));
    Ok(())
}

#[test]
fn resolution_changes() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(10, 10).set_preset(Some(0)).world()?;
    world.set_cell((0, 0), 12)?;
    world.set_age_weighted(true)?;
    world.toggle_birth_age(3)?;

    world.set_resolution(2)?;
    assert_eq!(world.age_limit(), 3);
    assert_eq!(world.grid().get((0, 0)), Some(3));
    assert_eq!(world.palette().colors().len(), 4);
    match world.rule() {
        RuleSet::AgeWeighted(rule) => assert_eq!(rule.birth_age, AgeSet::full(3)),
        RuleSet::Plain(_) => panic!("expected an age-weighted rule"),
    }

    assert_eq!(world.set_resolution(0), Err(BagError::ResolutionOutOfRange(0)));
    assert_eq!(world.resolution(), 2);

    world.set_resolution(5)?;
    assert_eq!(world.palette().colors().len(), 32);
    world.step();
    assert!(world.grid().rows().flatten().all(|&age| age <= 31));
    Ok(())
}

#[test]
fn world_randomize() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(1);
    let mut world = Config::new(10, 10).set_age_weighted(true).world()?;
    world.randomize(&mut rng)?;
    assert!(world.is_age_weighted());
    let expected_dead = if world.rule().has_b0() {
        world.palette().colors()[0].scale(0.6)
    } else {
        Rgb::new(30, 30, 30)
    };
    assert_eq!(world.palette().dead_color(), expected_dead);
    Ok(())
}

#[test]
fn cadence() -> Result<(), Box<dyn Error>> {
    let mut cadence = Config::default().cadence()?;
    assert!(!cadence.is_running());
    assert!(!cadence.tick());

    assert!(cadence.toggle_running());
    let due: Vec<bool> = (0..8).map(|_| cadence.tick()).collect();
    assert_eq!(due.iter().filter(|&&due| due).count(), 2);

    cadence.set_running(false);
    assert!((0..8).all(|_| !cadence.tick()));
    assert_eq!(Cadence::new(0), Err(BagError::NonPositiveError));
    Ok(())
}

#[test]
fn toggles_at_finest_resolution() -> Result<(), Box<dyn Error>> {
    let mut world = Config::new(64, 48)
        .set_rule_string("B3/S23")
        .set_age_weighted(true)
        .set_resolution(20)
        .world()?;
    for count in 0..=8 {
        let present = world.rule().life().birth.contains(count);
        assert_eq!(world.toggle_birth(count)?, !present);
        assert_eq!(world.toggle_birth(count)?, present);
    }
    assert_eq!(world.rule().life().to_string(), "B3/S23");

    assert!(!world.toggle_birth_age(1_048_575)?);
    assert!(world.toggle_birth_age(1_048_575)?);
    match world.rule() {
        RuleSet::AgeWeighted(rule) => {
            assert_eq!(rule.birth_age, AgeSet::full(1_048_575));
            assert_eq!(rule.survive_age.len(), 1_048_575);
        }
        RuleSet::Plain(_) => panic!("expected an age-weighted rule"),
    }
    Ok(())
}
