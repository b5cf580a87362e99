//! Command line entry point for the court-pairing engine
//!
//! Loads a session snapshot, pairs the next round and prints it as JSON.
//! With `--publish` the rounds already in the JSON-lines round log count as
//! history, and the new round is appended to it.

use anyhow::Result;
use clap::Parser;
use court_pairing::config::{AppConfig, TeamSize};
use court_pairing::session::{
    CombinedHistory, JsonLinesRoundLog, PairingService, RoundHistoryStore, SessionSnapshot,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

/// Court Pairing - next-round matchmaking for club sessions
#[derive(Parser)]
#[command(
    name = "court-pairing",
    version,
    about = "Pair the next round of a badminton session",
    long_about = "Reads a session snapshot (roster plus prior rounds), assigns attendees to \
                 doubles or singles matches for the next round while balancing levels and \
                 avoiding recent partners and opponents, and prints the result as JSON."
)]
struct Args {
    /// Session snapshot file
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to session snapshot (JSON with attendees and rounds)"
    )]
    session: PathBuf,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Courts override
    #[arg(long, value_name = "N", help = "Override number of courts")]
    courts: Option<u32>,

    /// Play singles instead of doubles
    #[arg(long, help = "Pair singles matches instead of doubles")]
    singles: bool,

    /// Partner cooldown override
    #[arg(long, value_name = "ROUNDS", help = "Override partner cooldown")]
    partner_cooldown: Option<u32>,

    /// Opponent window override
    #[arg(long, value_name = "ROUNDS", help = "Override opponent window")]
    opponent_window: Option<u32>,

    /// Maximum level gap override
    #[arg(
        long,
        value_name = "LEVELS",
        help = "Override maximum level difference between partners (0 disables)"
    )]
    max_level_diff: Option<f64>,

    /// Prefer mixed doubles
    #[arg(long, help = "Prefer mixed-gender partnerships")]
    prefer_mixed_gender: bool,

    /// Publish target override
    #[arg(
        long,
        value_name = "FILE",
        help = "Append the round to this JSON-lines round log"
    )]
    publish: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and snapshot, then exit")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment/file and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }
    if args.debug {
        config.service.log_level = "debug".to_string();
    }
    if let Some(courts) = args.courts {
        config.pairing.courts = courts;
    }
    if args.singles {
        config.pairing.team_size = TeamSize::Singles;
    }
    if let Some(cooldown) = args.partner_cooldown {
        config.pairing.partner_cooldown = cooldown;
    }
    if let Some(window) = args.opponent_window {
        config.pairing.opponent_window = window;
    }
    if let Some(diff) = args.max_level_diff {
        config.pairing.max_level_diff_per_pair = diff;
    }
    if args.prefer_mixed_gender {
        config.pairing.prefer_mixed_gender = true;
    }
    if let Some(path) = &args.publish {
        config.storage.round_log_path = Some(path.clone());
    }

    court_pairing::config::validate_config(&config)?;
    Ok(config)
}

/// Display startup banner with the effective constraints
fn display_banner(config: &AppConfig) {
    info!("Court Pairing v{}", court_pairing::VERSION);
    info!("   Service: {}", config.service.name);
    info!(
        "   Format: {} on {} courts",
        config.pairing.team_size, config.pairing.courts
    );
    info!(
        "   Partner cooldown: {} rounds, opponent window: {} rounds",
        config.pairing.partner_cooldown, config.pairing.opponent_window
    );
    info!(
        "   Max partner level gap: {}",
        config.pairing.max_level_diff_per_pair
    );
    info!(
        "   Mixed gender preference: {}",
        config.pairing.prefer_mixed_gender
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_banner(&config);

    let snapshot = match SessionSnapshot::load(&args.session) {
        Ok(snapshot) => Arc::new(snapshot),
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    };

    if args.dry_run {
        info!("Dry run completed - configuration and snapshot are valid");
        return Ok(());
    }

    match &config.storage.round_log_path {
        Some(path) => {
            let round_log = Arc::new(JsonLinesRoundLog::new(path));
            info!(
                "Round log {} holds {} published rounds",
                round_log.path().display(),
                round_log.prior_rounds()?.len()
            );

            let history = CombinedHistory::new()
                .with_store(snapshot.clone())
                .with_store(round_log.clone());
            let service = PairingService::new(
                snapshot,
                Arc::new(history),
                round_log,
                config.pairing.clone(),
            );
            let round = service.publish_next_round().await?;
            println!("{}", serde_json::to_string_pretty(&round)?);
        }
        None => {
            let result = court_pairing::pair_round(
                &court_pairing::session::dedup_attendees(snapshot.attendees.clone()),
                &config.pairing,
                &snapshot.rounds,
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
