use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::params;

use super::connection::DbConn;
use super::models::MatchRecord;
use crate::domain::NewMatchRecord;
use crate::errors::database_context;

const MATCH_COLUMNS: &str = "id, user_id, player1_name, player2_name, \
    player1_total_points, player2_total_points, player1_net_amount, \
    player2_net_amount, total_games, draw_count, winner_name, created_at, ended_at";

/// Insert an archived match for `user_id`. Id and timestamps are assigned
/// here, never by the caller.
pub fn insert_match(
    conn: &mut DbConn,
    user_id: &str,
    record: &NewMatchRecord,
    now: DateTime<Utc>,
) -> Result<MatchRecord> {
    let sql = format!(
        "INSERT INTO match_history (user_id, player1_name, player2_name, \
         player1_total_points, player2_total_points, player1_net_amount, \
         player2_net_amount, total_games, draw_count, winner_name, created_at, ended_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) \
         RETURNING {MATCH_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            user_id,
            record.player1_name,
            record.player2_name,
            record.player1_total_points,
            record.player2_total_points,
            record.player1_net_amount,
            record.player2_net_amount,
            record.total_games,
            record.draw_count,
            record.winner_name,
            now,
            now,
        ],
        parse_match_row,
    )
    .with_context(|| database_context("insert match record"))
}

/// All matches owned by `user_id`, most recently ended first.
pub fn list_for_user(conn: &mut DbConn, user_id: &str) -> Result<Vec<MatchRecord>> {
    let sql = format!(
        "SELECT {MATCH_COLUMNS} FROM match_history \
         WHERE user_id = ?1 ORDER BY ended_at DESC, id DESC"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params![user_id], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .with_context(|| database_context("list match records"))?;

    Ok(rows)
}

/// Delete a match only if it belongs to `user_id`. Filtering by id alone
/// would let one user delete another's records; both keys are mandatory.
/// Returns whether a row was removed.
pub fn delete_for_user(conn: &mut DbConn, id: i64, user_id: &str) -> Result<bool> {
    let deleted = conn
        .execute(
            "DELETE FROM match_history WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
        )
        .with_context(|| database_context("delete match record"))?;

    Ok(deleted > 0)
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        user_id: row.get(1)?,
        player1_name: row.get(2)?,
        player2_name: row.get(3)?,
        player1_total_points: row.get(4)?,
        player2_total_points: row.get(5)?,
        player1_net_amount: row.get(6)?,
        player2_net_amount: row.get(7)?,
        total_games: row.get(8)?,
        draw_count: row.get(9)?,
        winner_name: row.get(10)?,
        created_at: row.get(11)?,
        ended_at: row.get(12)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{connection, setup};

    fn test_conn(name: &str) -> DbConn {
        let dir = std::env::temp_dir().join(format!("mahjong_db_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("history.db");
        let pool = connection::create_pool(path.to_str().unwrap()).unwrap();
        let mut conn = connection::get_connection(&pool).unwrap();
        setup::init_schema(&mut conn).unwrap();
        conn
    }

    fn payload(p1_net: i64) -> NewMatchRecord {
        NewMatchRecord {
            player1_name: "Alice".to_string(),
            player2_name: "Bob".to_string(),
            player1_total_points: 11,
            player2_total_points: 3,
            player1_net_amount: p1_net,
            player2_net_amount: -p1_net,
            total_games: 4,
            draw_count: 1,
            winner_name: if p1_net > 0 {
                Some("Alice".to_string())
            } else {
                None
            },
        }
    }

    #[test]
    fn test_insert_assigns_id_and_timestamps() {
        let mut conn = test_conn("insert");

        let record = insert_match(&mut conn, "user-a", &payload(256), Utc::now()).unwrap();
        assert!(record.id > 0);
        assert_eq!(record.user_id, "user-a");
        assert_eq!(record.winner_name.as_deref(), Some("Alice"));
        assert_eq!(record.total_games, 4);
    }

    #[test]
    fn test_list_is_scoped_to_the_owner() {
        let mut conn = test_conn("list_scoped");

        insert_match(&mut conn, "user-a", &payload(64), Utc::now()).unwrap();
        insert_match(&mut conn, "user-b", &payload(0), Utc::now()).unwrap();

        let mine = list_for_user(&mut conn, "user-a").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, "user-a");
    }

    #[test]
    fn test_delete_requires_matching_owner() {
        let mut conn = test_conn("delete_owner");

        let record = insert_match(&mut conn, "user-a", &payload(64), Utc::now()).unwrap();

        // Another user must not be able to remove the row
        assert!(!delete_for_user(&mut conn, record.id, "user-b").unwrap());
        assert_eq!(list_for_user(&mut conn, "user-a").unwrap().len(), 1);

        assert!(delete_for_user(&mut conn, record.id, "user-a").unwrap());
        assert!(list_for_user(&mut conn, "user-a").unwrap().is_empty());
    }
}
