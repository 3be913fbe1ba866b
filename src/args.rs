use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Directory containing the extension sources
    pub path: Option<PathBuf>,

    /// Archive to write, relative to the base directory unless absolute
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(command().get_matches())
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
        }
    }
}

fn command() -> Command {
    Command::new("extension-pack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle browser extension assets into a zip archive")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .value_name("DIR")
                .help("Directory containing the extension files (default: current directory)")
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Archive file to create (defaults to extension.zip)")
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("List every file added to the archive")
        )
}
