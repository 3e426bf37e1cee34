use anyhow::{Context, Result};

use super::connection::Database;

const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the players and matches tables plus the standings view.
/// Safe to run against an already initialized database.
pub fn initialize_schema(db: &Database) -> Result<()> {
    let conn = db.connect_or_create()?;
    let statements = split_sql_statements(SCHEMA_SQL);

    for (idx, statement) in statements.iter().enumerate() {
        conn.execute(statement, [])
            .with_context(|| format!("Failed to execute schema statement {}", idx + 1))?;
    }

    log::info!("Database schema ready at {}", db.path().display());
    Ok(())
}

fn split_sql_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
