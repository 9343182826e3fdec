use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One archived match, immutable after insert. `winner_name` is NULL for a
/// tie. Rows are always owned by a user and every query filters on
/// `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub user_id: String,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_total_points: u32,
    pub player2_total_points: u32,
    pub player1_net_amount: i64,
    pub player2_net_amount: i64,
    pub total_games: u32,
    pub draw_count: u32,
    pub winner_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
}
