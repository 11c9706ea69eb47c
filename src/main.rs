use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use utfdb::BuildConfig;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "utfdb")]
#[command(about = "Build the Unicode character and emoji keyword lookup database")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Database to (re)build [default: user cache directory]
    #[arg(long)]
    db: Option<PathBuf>,

    /// Character registry in UnicodeData.txt format [default: bundled copy]
    #[arg(long)]
    unicode_data: Option<PathBuf>,

    /// Emoji keyword mapping in emojilib JSON format [default: bundled copy]
    #[arg(long)]
    emoji_keywords: Option<PathBuf>,
}

impl Cli {
    fn build_config(self) -> BuildConfig {
        let defaults = BuildConfig::default();
        BuildConfig {
            db_path: self.db.unwrap_or(defaults.db_path),
            unicode_data: self.unicode_data.unwrap_or(defaults.unicode_data),
            emoji_keywords: self.emoji_keywords.unwrap_or(defaults.emoji_keywords),
        }
    }
}

fn run(config: BuildConfig) -> Result<()> {
    let start = Instant::now();
    info!(path = ?config.db_path, "Building database");
    let stats = utfdb::build_database(&config)?;

    println!();
    println!("=== Summary ===");
    println!("Database:           {}", config.db_path.display());
    println!("Build time:         {:.2}s", start.elapsed().as_secs_f64());
    println!();
    println!("Registry rows:      {}", stats.registry_rows);
    println!("Emoji keywords:     {}", stats.emoji_pairs);
    println!("Emoji synthesized:  {}", stats.synthesized);
    println!("Controls skipped:   {}", stats.controls_skipped);
    println!("Symbols written:    {}", stats.symbols_written);
    println!("Ranked symbols:     {}", stats.ranked_symbols);
    println!("Keywords written:   {}", stats.keywords_written);
    println!("Rows written:       {}", stats.rows_written());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    match run(cli.build_config()) {
        Ok(()) => {
            info!("Completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Error: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
