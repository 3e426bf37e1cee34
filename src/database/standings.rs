use anyhow::{Context, Result};

use super::connection::Database;
use super::models::{Pairing, Standing};

pub fn list_standings(db: &Database) -> Result<Vec<Standing>> {
    let sql = "SELECT id, name, wins, matches FROM player_standings ORDER BY wins DESC, id ASC";

    db.query(sql, &[], parse_standing_row)
        .context("Failed to fetch player standings")
}

fn parse_standing_row(row: &rusqlite::Row) -> rusqlite::Result<Standing> {
    Ok(Standing {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches: row.get(3)?,
    })
}

/// Every pair of distinct players sharing a win count, lower id first.
/// A player shows up in as many candidates as there are others on the same
/// number of wins.
pub fn list_pairing_candidates(db: &Database) -> Result<Vec<Pairing>> {
    let sql = "
        SELECT p1.id, p1.name, p2.id, p2.name
        FROM player_standings AS p1
        JOIN player_standings AS p2
            ON p1.wins = p2.wins AND p1.id < p2.id
        ORDER BY p1.id, p2.id
    ";

    db.query(sql, &[], |row| {
        Ok(Pairing {
            id1: row.get(0)?,
            name1: row.get(1)?,
            id2: row.get(2)?,
            name2: row.get(3)?,
        })
    })
    .context("Failed to fetch pairing candidates")
}
