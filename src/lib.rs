pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod history;
pub mod payout;
pub mod scoring;
pub mod session;
pub mod storage;

use anyhow::{Result, bail};
use clap::Parser;
use cli::Cli;

use crate::auth::{AuthProvider, StoredAuth};
use crate::cli::Command;
use crate::config::criteria;
use crate::config::settings::AppConfig;
use crate::domain::{OTHER_CRITERION_ID, PlayerNumber};
use crate::errors::ValidationError;
use crate::history::HistoryStore;
use crate::scoring::ScoringSelection;
use crate::session::SessionStore;
use crate::storage::LocalStore;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_local_store(config: &AppConfig) -> Result<LocalStore> {
    let data_dir =
        std::env::var("DATA_DIR").unwrap_or_else(|_| config.storage.data_dir.to_string());
    LocalStore::new(data_dir)
}

fn open_session_store(config: &AppConfig) -> Result<SessionStore> {
    let store = open_local_store(config)?;
    Ok(SessionStore::load(store, config.payout.table))
}

fn open_history_store(config: &AppConfig) -> Result<HistoryStore> {
    let db_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| config.storage.database_file.to_string());
    let pool = database::create_pool(&db_path)?;
    let mut conn = database::get_connection(&pool)?;
    database::setup::init_schema(&mut conn)?;
    Ok(HistoryStore::new(pool))
}

pub fn handle_setup(player1: &str, player2: &str) -> Result<()> {
    let config = AppConfig::new();
    let mut sessions = open_session_store(&config)?;

    sessions.create_session(player1, player2)?;
    let session = sessions.session().expect("session was just created");
    println!(
        "Match started: {} vs {}. Game 1 is up.",
        session.player1_name, session.player2_name
    );
    Ok(())
}

pub fn handle_status() -> Result<()> {
    let config = AppConfig::new();
    let sessions = open_session_store(&config)?;

    let Some(session) = sessions.session() else {
        println!("No active match. Start one with `setup <player1> <player2>`.");
        return Ok(());
    };

    println!("Game {}", session.current_game_number);
    for player in [PlayerNumber::One, PlayerNumber::Two] {
        let (points, wins, net) = match player {
            PlayerNumber::One => (
                session.player1_total_points,
                session.player1_win_count,
                session.player1_net_amount,
            ),
            PlayerNumber::Two => (
                session.player2_total_points,
                session.player2_win_count,
                session.player2_net_amount,
            ),
        };
        println!(
            "  {}: {} 番, {} wins, net ${}",
            session.player_name(player),
            points,
            wins,
            net
        );
    }
    println!("  Draws: {}", session.draw_count());

    match sessions.leader() {
        Some(player) => println!("Leader: {}", session.player_name(player)),
        None => println!("Leader: none (even money)"),
    }
    Ok(())
}

pub fn handle_criteria() -> Result<()> {
    for category in criteria::scoring_categories() {
        println!("{}", category.name);
        for criterion in &category.criteria {
            println!("  {:<22} {:>2} 番  {}", criterion.id, criterion.points, criterion.name);
        }
    }
    Ok(())
}

pub fn handle_win(winner: u8, criteria_ids: &[String], other_points: Option<i64>) -> Result<()> {
    let config = AppConfig::new();
    let mut sessions = open_session_store(&config)?;

    if sessions.session().is_none() {
        bail!("no active match; start one with `setup <player1> <player2>`");
    }

    let winner = PlayerNumber::try_from(winner)?;

    let mut selection = ScoringSelection::new();
    for id in criteria_ids {
        let criterion = criteria::find_criterion(id)
            .ok_or_else(|| ValidationError::UnknownCriterion(id.clone()))?;
        selection.toggle(&criterion);
    }
    // Out-of-range input for the wildcard is coerced to 0 here, at the
    // boundary, and only counts while "other" is selected.
    if selection.is_selected(OTHER_CRITERION_ID) {
        selection.set_other_points(other_points.unwrap_or(0).max(0) as u32);
    }
    selection.set_winner(winner);

    let total = selection.total_points();
    let payout = config.payout.table.payout(total as i64);
    sessions.record_win(winner, total, selection.selected_criteria().to_vec());
    selection.reset();

    let session = sessions.session().expect("session checked above");
    println!(
        "{} wins game {} with {} 番 (${} payout). Next up: game {}.",
        session.player_name(winner),
        session.current_game_number - 1,
        total,
        payout,
        session.current_game_number
    );
    Ok(())
}

pub fn handle_draw() -> Result<()> {
    let config = AppConfig::new();
    let mut sessions = open_session_store(&config)?;

    if sessions.session().is_none() {
        bail!("no active match; start one with `setup <player1> <player2>`");
    }

    sessions.record_draw();
    let session = sessions.session().expect("session checked above");
    println!(
        "Draw recorded. Next up: game {}.",
        session.current_game_number
    );
    Ok(())
}

pub fn handle_start_over() -> Result<()> {
    let config = AppConfig::new();
    let mut sessions = open_session_store(&config)?;

    if sessions.session().is_none() {
        bail!("no active match to restart");
    }

    sessions.start_over();
    println!("Scores reset. Game 1 is up again.");
    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let config = AppConfig::new();
    let mut sessions = open_session_store(&config)?;
    sessions.reset_game();
    println!("Match cleared. Run `setup` to start a new one.");
    Ok(())
}

pub fn handle_end_match() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let auth = StoredAuth::load(open_local_store(&config)?);
        let user = auth.current_user();

        let mut sessions = open_session_store(&config)?;
        let payload = sessions.match_payload()?;

        let mut history = open_history_store(&config)?;
        let record = history.save_match(user.as_ref(), payload).await?;

        // Only a successful archive clears the session; on failure the
        // match stays live so the caller can retry.
        sessions.reset_game();

        println!(
            "Match archived as #{}: {} vs {}, winner {}.",
            record.id,
            record.player1_name,
            record.player2_name,
            record.winner_name.as_deref().unwrap_or("none (tie)")
        );
        Ok(())
    })
}

pub fn handle_history() -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let auth = StoredAuth::load(open_local_store(&config)?);
        let user = auth.current_user();

        let mut history = open_history_store(&config)?;
        let matches = history.fetch_matches(user.as_ref()).await?;

        if matches.is_empty() {
            println!("No archived matches yet.");
            return Ok(());
        }

        for m in matches {
            let winner = m.winner_name.as_deref().unwrap_or("tie");
            println!(
                "#{:<4} {} vs {:<12} {} games ({} draws)  winner: {:<12} ended {}",
                m.id,
                m.player1_name,
                m.player2_name,
                m.total_games,
                m.draw_count,
                winner,
                m.ended_at.format("%Y-%m-%d %H:%M")
            );
        }
        Ok(())
    })
}

pub fn handle_delete_match(id: i64) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let auth = StoredAuth::load(open_local_store(&config)?);
        let user = auth.current_user();

        let mut history = open_history_store(&config)?;
        history.delete_match(user.as_ref(), id).await?;
        println!("Deleted match #{}.", id);
        Ok(())
    })
}

pub fn handle_login(name: &str) -> Result<()> {
    let config = AppConfig::new();
    let mut auth = StoredAuth::load(open_local_store(&config)?);
    let user = auth.sign_in(name)?;
    println!("Signed in as {} ({}).", user.display_name, user.id);
    Ok(())
}

pub fn handle_logout() -> Result<()> {
    let config = AppConfig::new();
    let mut auth = StoredAuth::load(open_local_store(&config)?);
    auth.sign_out();
    println!("Signed out.");
    Ok(())
}
