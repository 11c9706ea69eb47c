use crate::config::READ_BUFFER_SIZE;
use crate::models::{Category, Character, Keyword};
use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Reads the semicolon-delimited character registry at `path`.
pub fn read_unicode_data(path: &Path) -> Result<Vec<Character>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open character registry: {}", path.display()))?;
    let characters = parse_unicode_data(BufReader::with_capacity(READ_BUFFER_SIZE, file))
        .with_context(|| format!("Malformed character registry: {}", path.display()))?;
    info!(rows = characters.len(), "Character registry parsed");
    Ok(characters)
}

/// Parses registry rows (`code_point;NAME;Gc;...`) in file order.
///
/// Only the first three fields are consumed. Any malformed row aborts the
/// whole parse, including a blank line between rows.
pub fn parse_unicode_data<R: Read>(reader: R) -> Result<Vec<Character>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut characters = Vec::new();
    let mut expected_line = 1;
    for result in reader.records() {
        let record = result
            .with_context(|| format!("Failed to read registry line {}", expected_line))?;
        let line = record.position().map_or(expected_line, |p| p.line());
        // The csv reader skips empty lines; a gap in line numbers is one.
        if line > expected_line {
            bail!("line {}: expected at least 3 fields, found 0", expected_line);
        }
        expected_line = line + 1;
        if let Some(character) = parse_row(&record, line)? {
            characters.push(character);
        }
    }
    Ok(characters)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<Option<Character>> {
    if record.len() < 3 {
        bail!(
            "line {}: expected at least 3 fields, found {}",
            line,
            record.len()
        );
    }
    let (code, name, group) = (&record[0], &record[1], &record[2]);

    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("line {}: invalid hexadecimal code point {:?}", line, code);
    }
    let ordinal = u32::from_str_radix(code, 16)
        .with_context(|| format!("line {}: code point {:?} out of range", line, code))?;
    if ordinal > 0x10FFFF {
        bail!("line {}: code point U+{:X} beyond U+10FFFF", line, ordinal);
    }

    let name = name.to_lowercase();
    let glyph = match char::from_u32(ordinal) {
        Some(c) => c,
        // Surrogate range markers; they are placeholders and never stored.
        None if name.contains('<') => {
            debug!(line, code, "Skipping non-scalar placeholder row");
            return Ok(None);
        }
        None => bail!("line {}: U+{:X} is not a Unicode scalar value", line, ordinal),
    };

    let category = Category::classify(group, &name);
    Ok(Some(Character::new(glyph.to_string(), name, category)))
}

/// `{glyph: [keyword, ...]}` as published by emojilib.
#[derive(Deserialize)]
#[serde(transparent)]
struct EmojiKeywords(BTreeMap<String, Vec<String>>);

/// Reads the emoji keyword mapping at `path`.
pub fn read_emoji_keywords(path: &Path) -> Result<Vec<Keyword>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open emoji keywords: {}", path.display()))?;
    let keywords = parse_emoji_keywords(BufReader::new(file))
        .with_context(|| format!("Malformed emoji keywords: {}", path.display()))?;
    info!(pairs = keywords.len(), "Emoji keywords parsed");
    Ok(keywords)
}

/// Flattens `{glyph: [keyword, ...]}` into one pair per keyword, with
/// underscores turned into spaces. Each glyph's keywords keep their order.
pub fn parse_emoji_keywords<R: Read>(reader: R) -> Result<Vec<Keyword>> {
    let EmojiKeywords(mapping) =
        serde_json::from_reader(reader).context("Failed to decode emoji keyword JSON")?;

    Ok(mapping
        .into_iter()
        .flat_map(|(glyph, keywords)| {
            keywords
                .into_iter()
                .map(move |keyword| Keyword::new(keyword.replace('_', " "), glyph.clone()))
        })
        .collect())
}
