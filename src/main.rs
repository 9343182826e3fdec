use anyhow::Result;

use mahjong_score_keeper::cli::Command;
use mahjong_score_keeper::{
    handle_criteria, handle_delete_match, handle_draw, handle_end_match, handle_history,
    handle_login, handle_logout, handle_reset, handle_setup, handle_start_over, handle_status,
    handle_win, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Setup { player1, player2 } => handle_setup(player1, player2),
        Command::Status => handle_status(),
        Command::Criteria => handle_criteria(),
        Command::Win {
            winner,
            criteria,
            other_points,
        } => handle_win(*winner, criteria, *other_points),
        Command::Draw => handle_draw(),
        Command::StartOver => handle_start_over(),
        Command::Reset => handle_reset(),
        Command::EndMatch => handle_end_match(),
        Command::History => handle_history(),
        Command::DeleteMatch { id } => handle_delete_match(*id),
        Command::Login { name } => handle_login(name),
        Command::Logout => handle_logout(),
    }
}
