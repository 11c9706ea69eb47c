use crate::config::BuildConfig;
use crate::load::load;
use crate::merge::{merge, Dataset};
use crate::parser::{read_emoji_keywords, read_unicode_data};
use crate::rank::Ranker;
use crate::schema::create_schema;
use crate::stats::BuildStats;
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Rebuilds the lookup database at `config.db_path` from scratch.
///
/// Both inputs are parsed in full before anything touches the filesystem.
/// The database is written to a sibling temporary file inside one
/// transaction and renamed over the destination only after the commit, so a
/// failed run leaves any previous database as it was.
pub fn build_database(config: &BuildConfig) -> Result<BuildStats> {
    let start = Instant::now();
    let mut stats = BuildStats::new();

    if config.db_path.file_name().is_none() {
        bail!(
            "Database path has no file name: {}",
            config.db_path.display()
        );
    }

    let characters = read_unicode_data(&config.unicode_data)?;
    let emoji_keywords = read_emoji_keywords(&config.emoji_keywords)?;
    stats.registry_rows = characters.len() as u64;
    stats.emoji_pairs = emoji_keywords.len() as u64;

    let dataset = merge(characters, emoji_keywords);
    stats.synthesized = dataset.synthesized as u64;
    let ranker = Ranker::new();

    install_database(&config.db_path, &dataset, &ranker, &mut stats)?;

    info!(
        path = ?config.db_path,
        symbols = stats.symbols_written,
        keywords = stats.keywords_written,
        duration_secs = start.elapsed().as_secs_f64(),
        "Database built"
    );
    Ok(stats)
}

/// Writes `dataset` to `<db_path>.tmp` and renames it over `db_path`.
///
/// Any failure after the temporary file exists removes it again, so the
/// destination is either the previous database or the complete new one.
fn install_database(
    db_path: &Path,
    dataset: &Dataset,
    ranker: &Ranker,
    stats: &mut BuildStats,
) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    let tmp_path = temp_path(db_path);
    if tmp_path.exists() {
        debug!(path = ?tmp_path, "Removing stale temporary database");
        fs::remove_file(&tmp_path)
            .with_context(|| format!("Failed to remove stale file: {}", tmp_path.display()))?;
    }

    let result = write_database(&tmp_path, dataset, ranker, stats).and_then(|()| {
        fs::rename(&tmp_path, db_path).with_context(|| {
            format!("Failed to move database into place: {}", db_path.display())
        })
    });

    if result.is_err() && tmp_path.exists() {
        if let Err(rm) = fs::remove_file(&tmp_path) {
            warn!(error = %rm, path = ?tmp_path, "Failed to remove temporary database");
        }
    }
    result
}

fn write_database(
    path: &Path,
    dataset: &Dataset,
    ranker: &Ranker,
    stats: &mut BuildStats,
) -> Result<()> {
    let mut conn = Connection::open(path)
        .with_context(|| format!("Failed to open database: {}", path.display()))?;

    let tx = conn.transaction().context("Failed to begin transaction")?;
    create_schema(&tx)?;
    load(&tx, dataset, ranker, stats)?;
    tx.commit().context("Failed to commit database")?;

    conn.close()
        .map_err(|(_, e)| e)
        .context("Failed to close database")?;
    Ok(())
}

/// `utf8.db` -> `utf8.db.tmp`, in the same directory so the final rename stays atomic.
fn temp_path(db_path: &Path) -> PathBuf {
    let mut name = db_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    db_path.with_file_name(name)
}
