//! utfdb: Unicode character and emoji keyword lookup database builder
//!
//! This crate turns two public datasets into the SQLite cache a character
//! picker searches:
//!
//! 1. **Parse** -- Read the semicolon-delimited character registry
//!    (`UnicodeData.txt`) and the emoji keyword mapping (`emoji-en-US.json`)
//! 2. **Merge** -- Give every emoji glyph a character record, add each
//!    character's own name as a keyword, and deduplicate keyword pairs
//! 3. **Rank** -- Assign a commonness priority from two curated glyph lists
//! 4. **Load** -- Create the schema and write everything in one transaction
//!
//! Every run is a full rebuild. The database is written next to its final
//! location and renamed into place after the commit, so readers never see a
//! half-written file.
//!
//! # Schema
//!
//! - `symbols(glyph TEXT PRIMARY KEY, name TEXT, category TEXT DEFAULT '', priority INTEGER)`
//! - `copied(glyph TEXT PRIMARY KEY, copies INTEGER, last_copied DATETIME)` -- left
//!   empty; the picker records copy counts here
//! - `keywords(keyword TEXT, glyph TEXT)` with a `COLLATE NOCASE` index on `keyword`
//!
//! # Key Modules
//!
//! - [`parser`] -- Registry and keyword file parsing
//! - [`merge`] -- Record reconciliation and keyword deduplication
//! - [`rank`] -- Curated commonness lookup
//! - [`schema`] -- Table and index creation
//! - [`load`] -- Transactional inserts
//! - [`pipeline`] -- The `build_database` entry point
//! - [`models`] -- Core data types (Character, Category, Keyword)
//! - [`stats`] -- Per-run counters
//! - [`config`] -- Constants and the build configuration
//!
//! # Example Usage
//!
//! ```bash
//! # Rebuild the cache database from the bundled data files
//! utfdb
//!
//! # Write somewhere else with custom inputs
//! utfdb --db /tmp/utf8.db --unicode-data UnicodeData.txt --emoji-keywords emoji-en-US.json
//! ```

pub mod config;
pub mod load;
pub mod merge;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod rank;
pub mod schema;
pub mod stats;

pub use config::BuildConfig;
pub use pipeline::build_database;
