use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::debug;

const CREATE_SYMBOLS: &str = "CREATE TABLE symbols (
    glyph TEXT PRIMARY KEY,
    name TEXT,
    category TEXT DEFAULT '',
    priority INTEGER
);";

/// Filled by the picker at runtime, never by the build.
const CREATE_COPIED: &str = "CREATE TABLE copied (
    glyph TEXT PRIMARY KEY,
    copies INTEGER,
    last_copied DATETIME
);";

const CREATE_KEYWORDS: &str = "CREATE TABLE keywords (
    keyword TEXT,
    glyph TEXT
);";

const CREATE_KEYWORD_INDEX: &str =
    "CREATE INDEX keyword_index ON keywords (keyword COLLATE NOCASE);";

/// Creates the tables and the case-insensitive keyword index on an empty database.
pub fn create_schema(conn: &Connection) -> Result<()> {
    for (name, sql) in [
        ("symbols", CREATE_SYMBOLS),
        ("copied", CREATE_COPIED),
        ("keywords", CREATE_KEYWORDS),
        ("keyword_index", CREATE_KEYWORD_INDEX),
    ] {
        conn.execute(sql, [])
            .with_context(|| format!("Failed to create {}", name))?;
        debug!(name, "Schema object created");
    }
    Ok(())
}
