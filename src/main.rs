use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use moodfood::catalog::MoodCatalog;
use moodfood::model::{MoodId, RecommendationKind};
use moodfood::services::MockLookup;
use moodfood::{FetchPolicy, MoodStore, RecommendationController, RequestState, StoreConfig};

/// Pick up to three moods and get food recommendations for them.
#[derive(Debug, Parser)]
#[command(name = "moodfood", version)]
struct Cli {
    /// Mood id from the catalog, repeatable (e.g. --mood happy --mood tired).
    #[arg(short, long = "mood")]
    moods: Vec<String>,

    /// Mood intensity, 1-10. Out-of-range values are clamped.
    #[arg(short, long, allow_negative_numbers = true)]
    intensity: Option<i64>,

    /// JSON store config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON mood catalog replacing the built-in one.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Overrides the mock lookup delay.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Reject overlapping requests instead of letting the last one win.
    #[arg(long)]
    single_flight: bool,

    /// List the catalog and exit.
    #[arg(long)]
    list: bool,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("setting default subscriber failed")?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => StoreConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => StoreConfig::default(),
    }
    .with_env_overrides();
    if let Some(delay) = cli.delay_ms {
        config.lookup_delay_ms = delay;
    }
    if cli.single_flight {
        config.fetch_policy = FetchPolicy::SingleFlight;
    }

    let catalog = match &cli.catalog {
        Some(path) => MoodCatalog::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => MoodCatalog::builtin(),
    };

    if cli.list {
        for mood in catalog.iter() {
            println!("{:<10} {} {:<10} {}", mood.id, mood.icon, mood.name, mood.description);
        }
        return Ok(());
    }

    let store = MoodStore::with_config(&config);
    let lookup = Arc::new(MockLookup::with_delay(config.lookup_delay()));
    let controller = RecommendationController::with_config(store.clone(), lookup, &config);

    if let Some(level) = cli.intensity {
        store.set_intensity(level).await;
    }

    for raw in &cli.moods {
        let id = MoodId::new(raw.as_str());
        match catalog.get(&id) {
            Some(mood) => {
                if !store.select_mood(mood).await {
                    tracing::warn!("Mood '{}' not added (duplicate or selection full)", id);
                }
            }
            None => tracing::warn!("Unknown mood '{}', see --list", id),
        }
    }

    let intensity = store.snapshot().await.intensity();
    tracing::info!("Intensity {}/10 ({})", intensity.level(), intensity.label());

    if let Err(e) = controller.fetch_recommendations().await {
        tracing::warn!("Recommendation request failed: {}", e);
    }
    let state = store.snapshot().await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    match state.request() {
        RequestState::Error(message) => {
            println!("{message}");
        }
        _ => {
            let names: Vec<String> = state.selected().iter().map(|m| format!("{} {}", m.icon, m.name)).collect();
            println!("Ready to find food for: {}", names.join(", "));
            println!("Intensity: {}/10 - {}", intensity.level(), intensity.guidance());
            println!();
            for item in state.recommendations() {
                let kind = match item.kind {
                    RecommendationKind::Recipe => "recipe",
                    RecommendationKind::Restaurant => "restaurant",
                    RecommendationKind::Snack => "snack",
                };
                println!("* {} [{}] {:.1}/5", item.name, kind, item.rating);
                println!("  {}", item.description);
                if item.preparation_time > 0 {
                    println!("  {} min, {:?}", item.preparation_time, item.difficulty);
                }
                if let Some(info) = &item.restaurant_info {
                    println!("  {} - {} ({})", info.name, info.address, info.price_range);
                }
            }
        }
    }

    Ok(())
}
