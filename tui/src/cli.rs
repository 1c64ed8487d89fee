use crate::args::Args;
use bagolife_lib::{parse_plaintext, Pattern, World};
use log::{info, warn};
use std::error::Error;

/// Seeded when no pattern file is given.
const BANNER: &str = "\
O...OOO.OOO.OOO
O....O..O...O..
O....O..OO..OO.
O....O..O...O..
OOO.OOO.O...OOO
";

pub(crate) fn banner() -> Pattern {
    parse_plaintext(BANNER).unwrap_or_default()
}

/// Clears the world and seeds the pattern at its center.
///
/// A pattern that does not fit only leaves a warning.
pub(crate) fn reseed(world: &mut World, pattern: &Pattern) {
    match world.seed(pattern) {
        Ok(()) => info!("Seeded a {}x{} pattern", pattern_width(pattern), pattern.len()),
        Err(e) => {
            world.clear();
            warn!("Cannot seed the pattern: {}", e);
        }
    }
}

fn pattern_width(pattern: &Pattern) -> usize {
    pattern.iter().map(Vec::len).max().unwrap_or(0)
}

/// The world in plaintext, with its rule and generation as comments.
pub(crate) fn plaintext(world: &World) -> String {
    format!(
        "!Rule: {}\n!Generation: {}\n!Population: {}\n{}",
        world.rule(),
        world.generation(),
        world.grid().population(),
        world.grid()
    )
}

pub(crate) fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut world = args.world;
    let pattern = args.pattern.unwrap_or_else(banner);
    reseed(&mut world, &pattern);

    #[cfg(feature = "tui")]
    if !args.no_tui {
        return crate::tui::run(world, args.cadence, args.fps, pattern, args.seed);
    }

    world.run(args.generations);
    print!("{}", plaintext(&world));
    Ok(())
}
