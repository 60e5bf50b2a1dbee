use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

use crate::model::HandicapIndex;

pub const DEFAULT_NAME: &str = "MyName";
pub const DEFAULT_HANDICAP_INDEX: f64 = 13.0;
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Parser, Debug)]
#[command(author, version, about = "Golf round scoring with handicap strokes", long_about = None)]
pub struct Cli {
    /// Optional toml file with defaults for the settings below.
    #[arg(long, value_name = "CONFIG_TOML", value_parser = crate::args::validation::check_readable_file)]
    pub config_toml: Option<PathBuf>,
    /// Directory holding courses/ and rounds/.
    #[arg(long, value_name = "DATA_DIR", value_parser = crate::args::validation::check_writable_dir)]
    pub data_dir: Option<PathBuf>,
    #[arg(long, value_name = "NAME")]
    pub my_name: Option<String>,
    #[arg(long, value_name = "HANDICAP_INDEX", value_parser = crate::args::validation::check_handicap_index)]
    pub my_handicap_index: Option<HandicapIndex>,
    #[arg(short, long)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the scorecard of a saved round.
    Scorecard {
        #[arg(long)]
        round: Uuid,
    },
    /// Compute a course handicap.
    Handicap {
        #[arg(long, allow_hyphen_values = true, value_parser = crate::args::validation::check_handicap_index)]
        index: HandicapIndex,
        #[arg(long)]
        slope: i32,
        #[arg(long)]
        rating: f64,
        #[arg(long)]
        par: i32,
    },
    /// List the courses and tees in the catalog.
    Courses,
    /// Start a round on a course tee with the configured player.
    NewRound {
        #[arg(long)]
        course: Uuid,
        #[arg(long)]
        tee: Uuid,
        #[arg(long, default_value_t = 1, value_parser = crate::args::validation::check_player_count)]
        players: usize,
    },
    /// Record gross strokes for one hole of a saved round.
    Score {
        #[arg(long)]
        round: Uuid,
        /// One-based player number.
        #[arg(long, default_value_t = 1, value_parser = crate::args::validation::check_player_number)]
        player: usize,
        /// One-based hole number.
        #[arg(long)]
        hole: usize,
        #[arg(long)]
        strokes: i32,
    },
    /// Print a scorecard of generated players.
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Group size; picked at random when omitted.
        #[arg(long, value_parser = crate::args::validation::check_player_count)]
        players: Option<usize>,
        #[arg(long, default_value_t = 18)]
        holes: usize,
    },
}

/// Settings file contents; every key is optional.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub my_name: Option<String>,
    pub my_handicap_index: Option<f64>,
}

/// Run settings, passed explicitly to whatever needs them.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub my_name: String,
    pub my_handicap_index: HandicapIndex,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            my_name: DEFAULT_NAME.to_string(),
            my_handicap_index: HandicapIndex::from(DEFAULT_HANDICAP_INDEX),
        }
    }
}

impl Settings {
    #[must_use]
    pub fn merge(cli: &Cli, file: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: cli
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or(defaults.data_dir),
            my_name: cli
                .my_name
                .clone()
                .or(file.my_name)
                .unwrap_or(defaults.my_name),
            my_handicap_index: cli
                .my_handicap_index
                .or(file.my_handicap_index.map(HandicapIndex::from))
                .unwrap_or(defaults.my_handicap_index),
        }
    }
}
