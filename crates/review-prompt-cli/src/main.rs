mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{CliConfig, Overrides};
use review_prompt_core::impls::{FileKeyValueStore, StaticVersion, SystemUrlOpener, TokioScheduler};
use review_prompt_core::ports::ReviewTrigger;
use review_prompt_core::{PromptDecision, ReviewPromptBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "review-prompt", version, about = "Decide when to ask for an app review")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON state file holding the counter and last prompted version
    #[arg(long, global = true)]
    state: Option<PathBuf>,

    #[arg(long, global = true)]
    store_id: Option<String>,

    #[arg(long, global = true)]
    threshold: Option<u32>,

    /// Base of the review URL, e.g. itms-apps://itunes.apple.com
    #[arg(long, global = true)]
    store_base_url: Option<String>,

    #[arg(long, global = true, env = "REVIEW_PROMPT_APP_VERSION")]
    app_version: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count one completed process and prompt for a review if due
    Evaluate,
    /// Open the store's write-review page
    OpenStore {
        /// Print the URL instead of opening it
        #[arg(long)]
        print: bool,
    },
    /// Print the persisted state as JSON
    Status,
}

/// ターミナル上の「レビュー UI」
struct ConsoleReviewTrigger;

impl ReviewTrigger for ConsoleReviewTrigger {
    fn request_review(&self) {
        println!("Enjoying this app? Please take a moment to rate it.");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?.with_overrides(Overrides {
        store_id: cli.store_id,
        promotion_threshold: cli.threshold,
        store_base_url: cli.store_base_url,
        state_path: cli.state,
        app_version: cli.app_version,
    });
    let app_version = config.app_version();
    info!(
        store_id = ?config.store_id,
        threshold = config.promotion_threshold,
        %app_version,
        "loaded review-prompt config"
    );

    let store = FileKeyValueStore::open(&config.state_path)
        .with_context(|| format!("failed to open state file {}", config.state_path.display()))?;
    info!(path = %store.path().display(), "opened state file");
    // current_thread ランタイムなので遅延 step は main と同じスレッドで走る
    let scheduler = Arc::new(TokioScheduler::from_current()?);
    let prompt = ReviewPromptBuilder::new(config.prompt_config()?)
        .store(Arc::new(store))
        .version_provider(Arc::new(StaticVersion::new(app_version)))
        .review_trigger(Arc::new(ConsoleReviewTrigger))
        .url_opener(Arc::new(SystemUrlOpener::new()))
        .scheduler(scheduler.clone())
        .build()?;

    match cli.command {
        Command::Evaluate => {
            let decision = prompt.evaluate()?;
            match &decision {
                PromptDecision::Scheduled { version } => {
                    println!("review prompt scheduled for version {version}");
                }
                PromptDecision::BelowThreshold { count, threshold } => {
                    println!("count {count}/{threshold}: not yet");
                }
                PromptDecision::AlreadyPrompted { version } => {
                    println!("already prompted for version {version}");
                }
            }
            // プロセス終了前に遅延 step を走らせる
            scheduler.drain().await;
        }
        Command::OpenStore { print } => {
            if print {
                println!("{}", prompt.review_url()?);
            } else {
                let url = prompt.open_store_page()?;
                println!("opened {url}");
            }
        }
        Command::Status => {
            let status = prompt.status();
            let mut json = serde_json::to_value(&status)?;
            json["remaining_until_threshold"] = status.remaining_until_threshold().into();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
