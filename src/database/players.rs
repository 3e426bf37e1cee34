use anyhow::{Context, Result};

use super::connection::Database;
use super::models::Player;

pub fn delete_all(db: &Database) -> Result<usize> {
    db.execute("DELETE FROM players", &[])
        .context("Failed to delete players")
}

pub fn count(db: &Database) -> Result<i64> {
    db.query_one("SELECT COUNT(*) FROM players", &[], |row| row.get(0))
        .context("Failed to count players")
}

pub fn insert_player(db: &Database, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name";

    db.execute_returning(sql, &[name.into()], parse_player_row)
        .context("Failed to insert player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

pub fn list_all(db: &Database) -> Result<Vec<Player>> {
    db.query("SELECT id, name FROM players ORDER BY id", &[], parse_player_row)
        .context("Failed to list players")
}
