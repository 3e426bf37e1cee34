use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "swiss-tournament", author, version, about = "Swiss-system tournament manager")]
pub struct Cli {
    /// Path to the SQLite database (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Create the tournament tables if they do not exist
    Init,
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Print the number of registered players
    Count,
    /// List registered players
    Players,
    /// Show players ranked by wins
    Standings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Record the result of a match
    Report {
        /// Id of the winning player
        winner: i64,
        /// Id of the losing player
        loser: i64,
    },
    /// List every recorded match
    Matches,
    /// Pair players for the next round
    Pairings {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete recorded matches and registered players
    Reset {
        /// Delete matches only, keep players
        #[arg(long)]
        matches_only: bool,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
