mod api;
mod history;
mod mock;
mod server;
mod x_api;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use x_pulse::config::DashboardConfig;
use x_pulse::ranking::{self, RankingCriterion};
use x_pulse::{format_count, Post};

#[derive(Parser)]
#[command(name = "x-pulse", about = "X account analytics dashboard")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Serve(ServeArgs),
    Rank(RankArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "webapp")]
    web_root: String,
    #[arg(long, default_value = "data/history.json")]
    history: String,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            web_root: "webapp".to_string(),
            history: "data/history.json".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
struct RankArgs {
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long, default_value = "latest")]
    sort: String,
    #[arg(long)]
    top: Option<usize>,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (config, _) = DashboardConfig::load(cli.config)?;
    let command = cli.command.unwrap_or(Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::serve(args, config).await,
        Command::Rank(args) => run_rank(args, config),
    }
}

fn run_rank(args: RankArgs, config: DashboardConfig) -> Result<(), String> {
    let criterion = RankingCriterion::from_str(&args.sort).map_err(|err| err.to_string())?;
    let payload = read_input(args.input)?;
    let posts: Vec<Post> =
        serde_json::from_str(&payload).map_err(|err| format!("failed to parse posts: {}", err))?;

    let top_n = args.top.unwrap_or(config.feed.top_performers);
    let ranked = ranking::rank_with_top_n(&posts, criterion, top_n);

    if ranked.is_empty() {
        println!("No posts to rank.");
        return Ok(());
    }

    println!("Feed ranked by {} ({} posts):", criterion.label(), ranked.len());
    for item in ranked {
        let marker = match item.top_rank {
            Some(rank) => format!("[top #{}] ", rank),
            None => String::new(),
        };
        let feed_item = api::FeedItem::from_ranked(item);
        println!(
            "{:>2}. {}{}",
            feed_item.position + 1,
            marker,
            first_line(&feed_item.text)
        );
        println!(
            "    impressions {} | likes {} | retweets {} | replies {} | {}",
            format_count(feed_item.impressions),
            format_count(feed_item.likes),
            format_count(feed_item.retweets),
            format_count(feed_item.replies),
            feed_item.created_at
        );
    }

    Ok(())
}

fn read_input(path: Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = path {
        return std::fs::read_to_string(&path)
            .map_err(|err| format!("failed to read {}: {}", path.display(), err));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    if buffer.trim().is_empty() {
        return Err("missing posts JSON: pass --input or pipe stdin".to_string());
    }
    Ok(buffer)
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
