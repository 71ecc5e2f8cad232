//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command, Error,
};
use log::LevelFilter;
use std::{ffi::OsString, path::PathBuf, time::Duration};

/// Names of the available user interfaces. The first one is the default.
#[cfg(feature = "tui")]
const INTERFACES: [&str; 2] = ["tui", "text"];
#[cfg(not(feature = "tui"))]
const INTERFACES: [&str; 1] = ["text"];

/// The user interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Interface {
    /// Prints every generation to the standard output.
    Text,
    /// A terminal user interface.
    #[cfg(feature = "tui")]
    Tui,
}

/// A struct to store the parse results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    pub(crate) path: PathBuf,
    pub(crate) generations: u64,
    pub(crate) interface: Interface,
    pub(crate) delay: Duration,
    pub(crate) manual: bool,
    pub(crate) verbose: u8,
}

impl Args {
    fn command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(
                "Conway's Game of Life on a finite grid\n\
                 \n\
                 Cells outside the grid are always dead.\n\
                 \n\
                 The initial state is read from a file. Files ending with `.toml`, \n\
                 `.yaml`, `.yml` or `.json` are read as a configuration with the \n\
                 fields `rows`, `columns` and `alive`. Any other file is read as \n\
                 a list of integers: the numbers of rows and columns, followed by \n\
                 the row and column of each living cell, one cell per line.\n\
                 \n\
                 The grid is displayed in Plaintext format.\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`.\n",
            )
            .arg(
                Arg::new("PATH")
                    .help("File containing the initial state")
                    .required(true)
                    .index(1)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to compute")
                    .required(true)
                    .index(2)
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("INTERFACE")
                    .help("User interface")
                    .short('i')
                    .long("interface")
                    .value_parser(INTERFACES)
                    .default_value(INTERFACES[0]),
            )
            .arg(
                Arg::new("NOTUI")
                    .help("Prints every generation, without entering the TUI")
                    .long_help(
                        "Prints every generation, without entering the TUI\n\
                         The same as `--interface text`.\n",
                    )
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("INTERFACE"),
            )
            .arg(
                Arg::new("DELAY")
                    .help("Milliseconds to wait between generations")
                    .short('d')
                    .long("delay")
                    .value_parser(value_parser!(u64))
                    .default_value("500"),
            )
            .arg(
                Arg::new("MANUAL")
                    .help("Waits for a key press before each generation")
                    .long_help(
                        "Waits for a key press before each generation\n\
                         In the text interface, press [Enter] for the next generation, \
                         or type `q` to quit.\n\
                         In the TUI, the game starts paused.\n",
                    )
                    .short('m')
                    .long("manual")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Logs more details; can be repeated")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count),
            )
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let path = matches.get_one::<PathBuf>("PATH").unwrap().clone();
        let generations = *matches.get_one::<u64>("GENERATIONS").unwrap();
        let interface = if matches.get_flag("NOTUI") {
            Interface::Text
        } else {
            match matches.get_one::<String>("INTERFACE").unwrap().as_str() {
                #[cfg(feature = "tui")]
                "tui" => Interface::Tui,
                _ => Interface::Text,
            }
        };
        let delay = Duration::from_millis(*matches.get_one::<u64>("DELAY").unwrap());
        let manual = matches.get_flag("MANUAL");
        let verbose = matches.get_count("VERBOSE");

        Args {
            path,
            generations,
            interface,
            delay,
            manual,
            verbose,
        }
    }

    /// Parses the given command-line arguments.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// The log level chosen by `--verbose`.
    pub(crate) fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults() -> Result<(), Error> {
        let args = Args::parse_from(["liferun", "glider.txt", "10"])?;
        assert_eq!(args.path, PathBuf::from("glider.txt"));
        assert_eq!(args.generations, 10);
        assert_eq!(args.delay, Duration::from_millis(500));
        assert!(!args.manual);
        assert_eq!(args.log_level(), LevelFilter::Warn);
        #[cfg(feature = "tui")]
        assert_eq!(args.interface, Interface::Tui);
        #[cfg(not(feature = "tui"))]
        assert_eq!(args.interface, Interface::Text);
        Ok(())
    }

    #[test]
    fn options() -> Result<(), Error> {
        let args = Args::parse_from([
            "liferun", "-n", "-d", "0", "-m", "-vv", "state.yaml", "3",
        ])?;
        assert_eq!(args.interface, Interface::Text);
        assert_eq!(args.delay, Duration::ZERO);
        assert!(args.manual);
        assert_eq!(args.log_level(), LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn interface() -> Result<(), Error> {
        let args = Args::parse_from(["liferun", "--interface", "text", "state", "1"])?;
        assert_eq!(args.interface, Interface::Text);
        Ok(())
    }

    #[test]
    fn errors() {
        fn kind(args: &[&str]) -> ErrorKind {
            Args::parse_from(args).unwrap_err().kind()
        }
        assert_eq!(
            kind(&["liferun", "state"]),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(kind(&["liferun", "state", "ten"]), ErrorKind::ValueValidation);
        assert_eq!(
            kind(&["liferun", "-i", "graphic", "state", "1"]),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            kind(&["liferun", "-n", "-i", "text", "state", "1"]),
            ErrorKind::ArgumentConflict
        );
    }
}
