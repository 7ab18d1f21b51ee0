mod api;
mod config;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use encore_core::{EncoreResult, SignalRecord};
use encore_trust::TrustEngine;

#[derive(Parser)]
#[command(name = "encore")]
#[command(about = "Score marketplace trust signals and gate feature access")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Score {
        #[arg(help = "Path to a user signal record (JSON)")]
        record: String,
        #[arg(long, help = "RFC 3339 timestamp to evaluate at (defaults to now)")]
        now: Option<String>,
        #[arg(long, help = "Emit the breakdown as JSON")]
        json: bool,
    },
    Gate {
        #[arg(help = "Path to a user signal record (JSON)")]
        record: String,
        #[arg(help = "Feature key to check, e.g. canVideoCall")]
        feature: String,
        #[arg(long)]
        now: Option<String>,
    },
    Thresholds {
        #[arg(help = "Path to a user signal record (JSON)")]
        record: String,
    },
    Suggest {
        #[arg(help = "Path to a user signal record (JSON)")]
        record: String,
        #[arg(long)]
        now: Option<String>,
    },
    Serve {
        #[arg(short = 'f', long, default_value = "encore.toml", help = "Path to config file")]
        config: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "encore=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score { record, now, json } => run_score(record, now, json),
        Commands::Gate { record, feature, now } => run_gate(record, feature, now),
        Commands::Thresholds { record } => run_thresholds(record),
        Commands::Suggest { record, now } => run_suggest(record, now),
        Commands::Serve { config: config_path } => {
            match config::EncoreConfig::from_file(&config_path) {
                Ok(cfg) => run_serve(cfg).await,
                Err(e) => Err(format!("failed to load config {}: {}", config_path, e).into()),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn load_record(path: &str) -> EncoreResult<SignalRecord> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn parse_now(now: Option<String>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(&s)?.with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn run_score(path: String, now: Option<String>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&path)?;
    let now = parse_now(now)?;
    let engine = TrustEngine::default();
    let breakdown = engine.compute_score(&record, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    println!("--- trust score for {} ---", path);
    println!("role: {}", breakdown.role.as_str());
    println!("profile:   {:>3}/25", breakdown.profile);
    println!("longevity: {:>3}/10", breakdown.longevity);
    println!("activity:  {:>3}/40", breakdown.activity);
    println!("quality:   {:>3}/20", breakdown.quality);
    println!("content:   {:>3}/15", breakdown.content);
    println!("social:    {:>3}/10", breakdown.social);
    println!("penalty:   -{}", breakdown.penalty);
    println!("\nfinal score: {}/100", breakdown.final_score);
    println!("tier: {}", breakdown.tier.as_str());
    println!("stars: {:.1}", breakdown.stars);

    if let Some(unlock) = engine.next_unlock(&record, now) {
        println!(
            "next unlock: {} at {} ({} point(s) away)",
            unlock.feature, unlock.threshold, unlock.points_needed
        );
    } else {
        println!("next unlock: everything unlocked");
    }

    Ok(())
}

fn run_gate(path: String, feature: String, now: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&path)?;
    let now = parse_now(now)?;
    let engine = TrustEngine::default();
    let breakdown = engine.compute_score(&record, now);
    let allowed = engine
        .thresholds()
        .can_access(breakdown.role, &feature, breakdown.final_score);

    println!("feature: {}", feature);
    println!("role: {}", breakdown.role.as_str());
    println!("score: {}", breakdown.final_score);
    match engine.thresholds().threshold(breakdown.role, &feature) {
        Some(min) => println!("threshold: {}", min),
        None => println!("threshold: (unknown feature for this role)"),
    }
    if allowed {
        println!("access: granted");
    } else {
        match engine
            .thresholds()
            .points_needed(breakdown.role, &feature, breakdown.final_score)
        {
            Some(needed) => println!("access: denied ({} point(s) short)", needed),
            None => println!("access: denied"),
        }
    }

    Ok(())
}

fn run_thresholds(path: String) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&path)?;
    let engine = TrustEngine::default();
    let table = engine.feature_thresholds(&record);
    let role = encore_trust::resolve_role(&record);

    println!("--- feature thresholds for {} ---", role.as_str());
    for threshold in table {
        println!("{:>3}  {}", threshold.min_score, threshold.feature);
    }

    Ok(())
}

fn run_suggest(path: String, now: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let record = load_record(&path)?;
    let now = parse_now(now)?;
    let engine = TrustEngine::default();
    let breakdown = engine.compute_score(&record, now);
    let suggestions = engine.improvement_suggestions(&record, now);

    println!("current score: {}/100", breakdown.final_score);
    if suggestions.is_empty() {
        println!("no cheap improvements left");
        return Ok(());
    }

    println!("suggestions ({}):", suggestions.len());
    for suggestion in &suggestions {
        println!(
            "  +{} [{}] {}",
            suggestion.points_gain,
            suggestion.category.as_str(),
            suggestion.action
        );
    }

    Ok(())
}

async fn run_serve(config: config::EncoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let engine = TrustEngine::new(config.build_thresholds());
    api::run_api(&config.api.bind, config.api.port, engine).await
}
