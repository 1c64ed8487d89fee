//! Parsing command-line arguments.

use bagolife_lib::{
    palette::PALETTES, parse_pattern, rules::PRESETS, Cadence, Config, Life, Pattern,
    Selection, World, MAX_RESOLUTION, MAX_SIZE, MIN_RESOLUTION, MIN_SIZE,
};
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, value_parser,
    Arg, ArgAction, Command, Error,
};
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

type ClapResult<T> = Result<T, Error>;

fn is_size(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(n) if (MIN_SIZE..=MAX_SIZE).contains(&n) => Ok(n),
        _ => Err(format!(
            "must be an integer from {} to {}",
            MIN_SIZE, MAX_SIZE
        )),
    }
}

fn is_positive(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

fn is_resolution(s: &str) -> Result<u32, String> {
    match s.parse() {
        Ok(n) if (MIN_RESOLUTION..=MAX_RESOLUTION).contains(&n) => Ok(n),
        _ => Err(format!(
            "must be an integer from {} to {}",
            MIN_RESOLUTION, MAX_RESOLUTION
        )),
    }
}

fn is_preset(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(n) if n < PRESETS.len() => Ok(n),
        _ => Err(format!("must be an integer from 0 to {}", PRESETS.len() - 1)),
    }
}

fn is_palette(s: &str) -> Result<usize, String> {
    match s.parse() {
        Ok(n) if n < PALETTES.len() => Ok(n),
        _ => Err(format!("must be an integer from 0 to {}", PALETTES.len() - 1)),
    }
}

fn is_rule(s: &str) -> Result<String, String> {
    s.parse::<Life>()
        .map(|_| s.to_owned())
        .map_err(|e| e.to_string())
}

/// Parses a configuration file in the format given by its extension.
pub(crate) fn parse_config(text: &str, extension: &str) -> Result<Config, String> {
    match extension {
        "toml" => toml::from_str(text).map_err(|e| e.to_string()),
        "yaml" | "yml" => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        "json" => serde_json::from_str(text).map_err(|e| e.to_string()),
        _ => Err(format!("unknown configuration format: {:?}", extension)),
    }
}

fn read_config(path: &Path) -> ClapResult<Config> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("cannot read {}: {}\n", path.display(), e),
        )
    })?;
    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .unwrap_or_default();
    parse_config(&text, extension).map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid configuration {}: {}\n", path.display(), e),
        )
    })
}

fn read_pattern(path: &Path) -> ClapResult<Pattern> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("cannot read {}: {}\n", path.display(), e),
        )
    })?;
    parse_pattern(&text).map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid pattern {}: {}\n", path.display(), e),
        )
    })
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) cadence: Cadence,
    pub(crate) fps: u32,
    /// The pattern from `--pattern`.
    pub(crate) pattern: Option<Pattern>,
    pub(crate) seed: Option<u64>,
    pub(crate) generations: u64,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        Args::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> ClapResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(
                "Bag O' Life: a Life-like cellular automaton whose cells remember their ages.\n\
                 \n\
                 Neighbor counts include the cell itself, so they range from 0 to 9.\n\
                 In age-weighted mode, a neighbor only counts toward birth (or survival) \
                 when its age is in the birth-age (or survive-age) set.\n\
                 \n\
                 Keys in the TUI:\n\
                 * [space] runs or pauses, [n] advances one generation;\n\
                 * [c] clears, [h] reseeds the pattern;\n\
                 * [r] randomizes the rule, [0]-[9] select a preset;\n\
                 * [a] toggles age-weighted mode;\n\
                 * [b] or [s] followed by a digit toggles a birth or survival count;\n\
                 * [p] cycles palettes, [v] reverses the palette, \
                 [f] toggles flicker reduction;\n\
                 * [ and ] change the age resolution;\n\
                 * [q] or [Esc] quits.\n\
                 The left mouse button sets a cell alive, the right one kills it.\n",
            )
            .arg(
                Arg::new("X")
                    .help("Width of the grid")
                    .index(1)
                    .value_parser(is_size),
            )
            .arg(
                Arg::new("Y")
                    .help("Height of the grid")
                    .index(2)
                    .value_parser(is_size),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Configuration file (TOML, YAML or JSON)")
                    .long_help(
                        "Configuration file (TOML, YAML or JSON)\n\
                         The format is chosen by the extension. Other options override \
                         the values in the file.\n",
                    )
                    .short('C')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("RULE")
                    .help("Rule of the cellular automaton, in B/S notation")
                    .short('r')
                    .long("rule")
                    .value_parser(is_rule)
                    .conflicts_with("PRESET"),
            )
            .arg(
                Arg::new("PRESET")
                    .help("Numbered rule preset (0-9)")
                    .short('p')
                    .long("preset")
                    .value_parser(is_preset),
            )
            .arg(
                Arg::new("AGE")
                    .help("Age-weighted mode")
                    .short('a')
                    .long("age")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("RESOLUTION")
                    .help("Bits per age; ages saturate at 2^BITS - 1")
                    .long("resolution")
                    .value_name("BITS")
                    .value_parser(is_resolution),
            )
            .arg(
                Arg::new("PALETTE")
                    .help("Numbered palette (0-10)")
                    .long("palette")
                    .value_parser(is_palette),
            )
            .arg(
                Arg::new("NOREVERSE")
                    .help("Do not reverse the palette")
                    .long("no-reverse")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("NOFLICKER")
                    .help("Do not tint the dead color under rules with B0")
                    .long("no-flicker-reduction")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("FPS")
                    .help("Frames per second")
                    .long("fps")
                    .value_parser(is_positive),
            )
            .arg(
                Arg::new("FRAMES")
                    .help("Frames per generation")
                    .long("frames-per-step")
                    .value_parser(is_positive),
            )
            .arg(
                Arg::new("PATTERN")
                    .help("Pattern file (RLE or Plaintext) to seed the grid with")
                    .short('P')
                    .long("pattern")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed of the rule randomizer")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            );

        let generations = Arg::new("GENERATIONS")
            .help("Number of generations to run before printing the grid")
            .short('g')
            .long("generations")
            .value_parser(value_parser!(u64));

        #[cfg(feature = "tui")]
        {
            command = command
                .arg(generations.requires("NOTUI"))
                .arg(
                    Arg::new("NOTUI")
                        .help("Runs without entering the TUI, printing the final grid")
                        .short('n')
                        .long("no-tui")
                        .action(ArgAction::SetTrue),
                );
        }

        #[cfg(not(feature = "tui"))]
        {
            command = command.arg(generations);
        }

        let matches = command.try_get_matches_from(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };
        if let Some(&width) = matches.get_one::<usize>("X") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<usize>("Y") {
            config.height = height;
        }
        if let Some(rule_string) = matches.get_one::<String>("RULE") {
            config = config.set_rule_string(rule_string).set_preset(None);
        }
        if let Some(&preset) = matches.get_one::<usize>("PRESET") {
            config = config.set_preset(Some(preset));
        }
        if matches.get_flag("AGE") {
            config = config.set_age_weighted(true);
        }
        if let Some(&resolution) = matches.get_one::<u32>("RESOLUTION") {
            config = config.set_resolution(resolution);
        }
        if let Some(&palette) = matches.get_one::<usize>("PALETTE") {
            config = config.set_palette(Selection::Catalog(palette));
        }
        if matches.get_flag("NOREVERSE") {
            config = config.set_reverse_palette(false);
        }
        if matches.get_flag("NOFLICKER") {
            config = config.set_flicker_reduction(false);
        }
        if let Some(&fps) = matches.get_one::<u32>("FPS") {
            config = config.set_fps(fps);
        }
        if let Some(&frames_per_step) = matches.get_one::<u32>("FRAMES") {
            config = config.set_frames_per_step(frames_per_step);
        }

        let pattern = match matches.get_one::<PathBuf>("PATTERN") {
            Some(path) => Some(read_pattern(path)?),
            None => None,
        };

        let invalid = |e: bagolife_lib::Error| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e));
        let world = config.world().map_err(invalid)?;
        let cadence = config.cadence().map_err(invalid)?;
        if config.fps == 0 {
            return Err(Error::raw(
                ErrorKind::InvalidValue,
                "fps must be a positive integer\n",
            ));
        }

        Ok(Args {
            world,
            cadence,
            fps: config.fps,
            pattern,
            seed: matches.get_one::<u64>("SEED").copied(),
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
