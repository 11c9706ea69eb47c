use crate::merge::Dataset;
use crate::rank::Ranker;
use crate::stats::BuildStats;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rusqlite::{params, Connection};
use tracing::info;

const INSERT_SYMBOL: &str =
    "INSERT INTO symbols (name, glyph, category, priority) VALUES (?1, ?2, ?3, ?4)";

const INSERT_KEYWORD: &str = "INSERT INTO keywords (keyword, glyph) VALUES (?1, ?2)";

/// Writes every non-control character and every keyword pair.
///
/// Runs on whatever connection or transaction the caller hands in; committing
/// is the caller's job. A duplicate glyph surfaces as a constraint error.
pub fn load(
    conn: &Connection,
    dataset: &Dataset,
    ranker: &Ranker,
    stats: &mut BuildStats,
) -> Result<()> {
    let total = (dataset.characters.len() + dataset.keywords.len()) as u64;
    let pb = make_progress_bar(total)?;

    let mut insert_symbol = conn
        .prepare(INSERT_SYMBOL)
        .context("Failed to prepare symbol insert")?;
    for character in &dataset.characters {
        pb.inc(1);
        if character.is_control() {
            stats.inc_controls();
            continue;
        }
        let priority = ranker.priority(&character.glyph);
        insert_symbol
            .execute(params![
                character.name,
                character.glyph,
                character.category.map(|c| c.as_str()),
                priority,
            ])
            .with_context(|| format!("Failed to insert symbol {:?}", character.glyph))?;
        stats.add_symbol(priority);
    }

    let mut insert_keyword = conn
        .prepare(INSERT_KEYWORD)
        .context("Failed to prepare keyword insert")?;
    for keyword in &dataset.keywords {
        pb.inc(1);
        insert_keyword
            .execute(params![keyword.keyword, keyword.glyph])
            .with_context(|| {
                format!(
                    "Failed to insert keyword {:?} for {:?}",
                    keyword.keyword, keyword.glyph
                )
            })?;
        stats.inc_keywords();
    }

    pb.finish_and_clear();
    info!(
        symbols = stats.symbols_written,
        keywords = stats.keywords_written,
        controls_skipped = stats.controls_skipped,
        "Records loaded"
    );
    Ok(())
}

fn make_progress_bar(total: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("    {spinner:.cyan} Loading rows   [{bar:30.cyan/blue}] {pos}/{len}")
            .context("Invalid progress bar template")?
            .progress_chars("=> "),
    );
    Ok(pb)
}
