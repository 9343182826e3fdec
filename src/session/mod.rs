//! Match-scoped state machine: one active session, two per-player
//! accumulators and a monotonically increasing game counter, mirrored to
//! local persistence after every mutation.

use chrono::Utc;
use log::{info, warn};

use crate::domain::{GameResult, GameSession, NewMatchRecord, PlayerNumber, ScoringCriterion};
use crate::errors::ValidationError;
use crate::payout::PayoutTable;
use crate::storage::LocalStore;

pub struct SessionStore {
    store: LocalStore,
    payout: PayoutTable,
    session: Option<GameSession>,
    results: Vec<GameResult>,
}

impl SessionStore {
    /// Read any persisted session and audit log into memory. Absence of a
    /// persisted session is the normal "no active match" state.
    pub fn load(store: LocalStore, payout: PayoutTable) -> Self {
        let session = store.load_game_session();
        let results = store.load_game_results();
        Self {
            store,
            payout,
            session,
            results,
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    /// Start a match between two named players. Names are trimmed and must
    /// be non-empty and distinct; the UI checks this too, but the invariant
    /// is re-asserted here.
    pub fn create_session(
        &mut self,
        player1_name: &str,
        player2_name: &str,
    ) -> Result<(), ValidationError> {
        let player1 = player1_name.trim();
        let player2 = player2_name.trim();

        if player1.is_empty() || player2.is_empty() {
            return Err(ValidationError::EmptyPlayerName);
        }
        if player1 == player2 {
            return Err(ValidationError::DuplicatePlayerNames);
        }

        let session = GameSession::new(player1, player2, Utc::now());
        self.store.save_game_session(&session);
        self.store.clear_game_results();

        info!("Started match: {} vs {}", player1, player2);
        self.session = Some(session);
        self.results.clear();
        Ok(())
    }

    /// Commit a scored win: credit the winner's points and win count,
    /// transfer the payout from loser to winner, advance the game counter
    /// and append an audit entry. Without an active session this is a
    /// logged no-op.
    pub fn record_win(
        &mut self,
        winner: PlayerNumber,
        points: u32,
        scoring_criteria: Vec<ScoringCriterion>,
    ) {
        let Some(session) = self.session.as_mut() else {
            warn!("record_win without an active session; ignoring");
            return;
        };

        let now = Utc::now();
        let payout = self.payout.payout(points as i64);

        match winner {
            PlayerNumber::One => {
                session.player1_total_points += points;
                session.player1_win_count += 1;
                session.player1_net_amount += payout;
                session.player2_net_amount -= payout;
            }
            PlayerNumber::Two => {
                session.player2_total_points += points;
                session.player2_win_count += 1;
                session.player2_net_amount += payout;
                session.player1_net_amount -= payout;
            }
        }

        let result = GameResult {
            id: self.results.last().map(|r| r.id + 1).unwrap_or(1),
            game_number: session.current_game_number,
            winner_player_number: winner.number(),
            winner_name: session.player_name(winner).to_string(),
            points,
            scoring_criteria,
            timestamp: now,
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
        };

        session.current_game_number += 1;
        session.updated_at = now;

        info!(
            "Game {}: {} won {} faan (${} payout)",
            result.game_number, result.winner_name, points, payout
        );

        self.store.save_game_session(session);
        self.results.push(result);
        self.store.save_game_results(&self.results);
    }

    /// A drawn game advances the counter and nothing else. Draws are only
    /// visible through the derived count.
    pub fn record_draw(&mut self) {
        let Some(session) = self.session.as_mut() else {
            warn!("record_draw without an active session; ignoring");
            return;
        };

        session.current_game_number += 1;
        session.updated_at = Utc::now();

        info!("Game {} was a draw", session.current_game_number - 1);
        self.store.save_game_session(session);
    }

    /// Keep the players, restart the match: all counters zeroed, game
    /// number back to 1, audit log cleared.
    pub fn start_over(&mut self) {
        let Some(session) = self.session.as_ref() else {
            warn!("start_over without an active session; ignoring");
            return;
        };

        let fresh = GameSession::new(&session.player1_name, &session.player2_name, Utc::now());
        self.store.save_game_session(&fresh);
        self.store.clear_game_results();

        info!("Match restarted: {} vs {}", fresh.player1_name, fresh.player2_name);
        self.session = Some(fresh);
        self.results.clear();
    }

    /// Clear the session and audit log from persistence and memory. Only
    /// `create_session` is valid afterwards.
    pub fn reset_game(&mut self) {
        self.store.clear_game_data();
        self.session = None;
        self.results.clear();
        info!("Match cleared");
    }

    /// Current leader by net amount; `None` for a tie or no session.
    pub fn leader(&self) -> Option<PlayerNumber> {
        self.session.as_ref().and_then(GameSession::leader)
    }

    pub fn draw_count(&self) -> u32 {
        self.session.as_ref().map_or(0, GameSession::draw_count)
    }

    /// Archive payload for the current match. Requires at least one
    /// completed game.
    pub fn match_payload(&self) -> Result<NewMatchRecord, ValidationError> {
        let session = self.session.as_ref().ok_or(ValidationError::NoGamesPlayed)?;
        if session.games_played() == 0 {
            return Err(ValidationError::NoGamesPlayed);
        }
        Ok(NewMatchRecord::from_session(session))
    }
}
