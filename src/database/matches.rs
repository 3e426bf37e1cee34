use anyhow::{Context, Result};

use super::connection::Database;
use super::models::{Match, PlayerId};

pub fn delete_all(db: &Database) -> Result<usize> {
    db.execute("DELETE FROM matches", &[])
        .context("Failed to delete matches")
}

pub fn insert_match(db: &Database, winner: PlayerId, loser: PlayerId) -> Result<Match> {
    let sql = "INSERT INTO matches (winner, loser) VALUES (?1, ?2) RETURNING id, winner, loser";

    db.execute_returning(sql, &[winner.into(), loser.into()], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<Match> {
    Ok(Match {
        id: row.get(0)?,
        winner: row.get(1)?,
        loser: row.get(2)?,
    })
}

pub fn list_all(db: &Database) -> Result<Vec<Match>> {
    db.query("SELECT id, winner, loser FROM matches ORDER BY id", &[], parse_match_row)
        .context("Failed to list matches")
}
