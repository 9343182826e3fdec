use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Catalog id of the wildcard criterion whose point value is supplied at
/// scoring time instead of coming from the catalog.
pub const OTHER_CRITERION_ID: &str = "other";

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerNumber {
    One,
    Two,
}

impl PlayerNumber {
    pub fn number(self) -> u8 {
        match self {
            PlayerNumber::One => 1,
            PlayerNumber::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerNumber::One => PlayerNumber::Two,
            PlayerNumber::Two => PlayerNumber::One,
        }
    }
}

impl TryFrom<u8> for PlayerNumber {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerNumber::One),
            2 => Ok(PlayerNumber::Two),
            other => Err(ValidationError::InvalidWinner(other)),
        }
    }
}

/// A named scoring rule a winning hand may satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringCriterion {
    pub id: String,
    pub name: String,
    pub points: u32,
    pub category: String,
}

/// Display grouping of criteria. Grouping only; the uniqueness of ids is a
/// catalog-wide property.
#[derive(Debug, Clone)]
pub struct ScoringCategory {
    pub name: String,
    pub criteria: Vec<ScoringCriterion>,
    pub collapsible: bool,
    pub default_collapsed: bool,
}

/// Cumulative state of the match currently being played.
///
/// Net amounts are a zero-sum pair: every win transfers the payout from the
/// loser to the winner, so `player1_net_amount + player2_net_amount == 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub player1_name: String,
    pub player1_total_points: u32,
    pub player1_win_count: u32,
    pub player1_net_amount: i64,
    pub player2_name: String,
    pub player2_total_points: u32,
    pub player2_win_count: u32,
    pub player2_net_amount: i64,
    pub current_game_number: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GameSession {
    /// Fresh session between two named players, all counters zeroed.
    pub fn new(player1_name: &str, player2_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            player1_name: player1_name.to_string(),
            player1_total_points: 0,
            player1_win_count: 0,
            player1_net_amount: 0,
            player2_name: player2_name.to_string(),
            player2_total_points: 0,
            player2_win_count: 0,
            player2_net_amount: 0,
            current_game_number: 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn player_name(&self, player: PlayerNumber) -> &str {
        match player {
            PlayerNumber::One => &self.player1_name,
            PlayerNumber::Two => &self.player2_name,
        }
    }

    /// Completed games, wins and draws included.
    pub fn games_played(&self) -> u32 {
        self.current_game_number - 1
    }

    /// Draws are not stored; they are the games no one won.
    pub fn draw_count(&self) -> u32 {
        self.games_played() - self.player1_win_count - self.player2_win_count
    }

    /// Current leader by net amount. Raw point totals are intentionally not
    /// consulted; the payout conversion is what ranks players economically.
    pub fn leader(&self) -> Option<PlayerNumber> {
        if self.player1_net_amount > self.player2_net_amount {
            Some(PlayerNumber::One)
        } else if self.player2_net_amount > self.player1_net_amount {
            Some(PlayerNumber::Two)
        } else {
            None
        }
    }
}

/// Audit entry for a single won game within the current match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub id: i64,
    pub game_number: u32,
    pub winner_player_number: u8,
    pub winner_name: String,
    pub points: u32,
    pub scoring_criteria: Vec<ScoringCriterion>,
    pub timestamp: DateTime<Utc>,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
}

/// Payload for archiving a finished match into history. Ids and timestamps
/// are assigned by the backend on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatchRecord {
    pub player1_name: String,
    pub player2_name: String,
    pub player1_total_points: u32,
    pub player2_total_points: u32,
    pub player1_net_amount: i64,
    pub player2_net_amount: i64,
    pub total_games: u32,
    pub draw_count: u32,
    pub winner_name: Option<String>,
}

impl NewMatchRecord {
    /// Snapshot a session for archival. The match winner is decided by net
    /// amount; equal nets mean a tie and no winner name.
    pub fn from_session(session: &GameSession) -> Self {
        let winner_name = session
            .leader()
            .map(|p| session.player_name(p).to_string());

        Self {
            player1_name: session.player1_name.clone(),
            player2_name: session.player2_name.clone(),
            player1_total_points: session.player1_total_points,
            player2_total_points: session.player2_total_points,
            player1_net_amount: session.player1_net_amount,
            player2_net_amount: session.player2_net_amount,
            total_games: session.games_played(),
            draw_count: session.draw_count(),
            winner_name,
        }
    }
}
