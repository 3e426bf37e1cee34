use std::path::Path;

/// Add context to connection errors
pub fn connection_context(path: &Path) -> String {
    format!("Failed to open database: {}", path.display())
}

/// Add context to statement errors
pub fn statement_context(sql: &str) -> String {
    format!("Failed to execute statement: {}", first_line(sql))
}

pub(crate) fn first_line(sql: &str) -> &str {
    sql.trim().lines().next().unwrap_or_default()
}
