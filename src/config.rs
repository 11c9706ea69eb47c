use std::path::{Path, PathBuf};

/// Application identifier used to namespace the user cache directory
pub const APP_NAME: &str = "utf";

/// Organization identifier; only namespaces the cache directory on Windows
pub const APP_AUTHOR: &str = "treyhunner";

/// File name of the generated database inside the cache directory
pub const DB_FILE_NAME: &str = "utf8.db";

/// Bundled Unicode character registry (UnicodeData.txt format)
pub const UNICODE_DATA_FILE: &str = "UnicodeData.txt";

/// Bundled emoji keyword mapping (emojilib `emoji-en-US.json` format)
pub const EMOJI_KEYWORDS_FILE: &str = "emoji-en-US.json";

/// Priority for glyphs in the curated common emoji list
pub const PRIORITY_COMMON_EMOJI: i64 = 10;

/// Priority for glyphs in the curated common character list
pub const PRIORITY_COMMON_CHARACTER: i64 = 8;

/// Priority for everything else
pub const PRIORITY_UNRANKED: i64 = 0;

/// Read buffer for the registry file
pub const READ_BUFFER_SIZE: usize = 128 * 1024;

/// Inputs and output of a single rebuild.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub db_path: PathBuf,
    pub unicode_data: PathBuf,
    pub emoji_keywords: PathBuf,
}

impl BuildConfig {
    pub fn new(
        db_path: impl Into<PathBuf>,
        unicode_data: impl Into<PathBuf>,
        emoji_keywords: impl Into<PathBuf>,
    ) -> Self {
        Self {
            db_path: db_path.into(),
            unicode_data: unicode_data.into(),
            emoji_keywords: emoji_keywords.into(),
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        let data = bundled_data_dir();
        Self {
            db_path: default_db_path(),
            unicode_data: data.join(UNICODE_DATA_FILE),
            emoji_keywords: data.join(EMOJI_KEYWORDS_FILE),
        }
    }
}

/// Directory holding the bundled input files.
pub fn bundled_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// `<user cache dir>/utf/utf8.db`, falling back to the working directory when
/// the platform reports no cache directory.
pub fn default_db_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir_in(&base).join(DB_FILE_NAME)
}

fn cache_dir_in(base: &Path) -> PathBuf {
    if cfg!(windows) {
        base.join(APP_AUTHOR).join(APP_NAME)
    } else {
        base.join(APP_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_db_path_ends_with_app_and_file() {
        let path = default_db_path();
        assert_eq!(path.file_name().unwrap(), DB_FILE_NAME);
        assert_eq!(path.parent().unwrap().file_name().unwrap(), APP_NAME);
    }

    #[test]
    fn default_config_points_at_bundled_files() {
        let config = BuildConfig::default();
        assert!(config.unicode_data.ends_with("data/UnicodeData.txt"));
        assert!(config.emoji_keywords.ends_with("data/emoji-en-US.json"));
    }
}
