use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Hong Kong mahjong score keeper")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start a new match between two named players
    Setup {
        player1: String,
        player2: String,
    },
    /// Show the current match standing
    Status,
    /// List the scoring criteria catalog
    Criteria,
    /// Record a win for the given player
    Win {
        /// Winning player (1 or 2)
        #[arg(short, long)]
        winner: u8,
        /// Scoring criterion id (repeatable)
        #[arg(short, long = "criterion")]
        criteria: Vec<String>,
        /// Point value for the "other" criterion
        #[arg(long)]
        other_points: Option<i64>,
    },
    /// Record a drawn game
    Draw,
    /// Reset all scores but keep the players
    StartOver,
    /// Clear the match entirely and return to setup
    Reset,
    /// Archive the current match to history and clear the session
    EndMatch,
    /// List archived matches for the signed-in user
    History,
    /// Delete an archived match by id
    DeleteMatch {
        id: i64,
    },
    /// Sign in as the given user
    Login {
        name: String,
    },
    /// Sign out
    Logout,
}
