use std::env;
use std::io::{self, Write};
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use backform_rules::{Prefix, RuleSet, Suffix};
use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use backformer::{AppState, Backformer, NormalizeMode, log_filter, read_records, router};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_MAX_RECORDS: usize = 10_000;

#[derive(Parser)]
#[command(name = "backformer")]
#[command(about = "Hypothesise and query candidate bases for German derivations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API.
    Serve(ServeArgs),
    /// Backform a file of corpus matches and print one query per candidate.
    Backform(BackformArgs),
}

#[derive(Args)]
struct ServeArgs {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    #[arg(long)]
    ruleset: Option<RuleSet>,
    #[arg(long)]
    max_records: Option<usize>,
    #[arg(long, default_value_t = false)]
    no_cache: bool,
}

#[derive(Args)]
struct BackformArgs {
    #[arg(long, allow_hyphen_values = true, required_unless_present = "prefix", conflicts_with = "prefix")]
    suffix: Option<Suffix>,
    #[arg(long)]
    prefix: Option<Prefix>,
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    ruleset: Option<RuleSet>,
    #[arg(long)]
    mode: Option<NormalizeMode>,
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Commands::Serve(args) => serve(load_config(args)),
        Commands::Backform(args) => backform_file(args),
    }
}

#[tokio::main]
async fn serve(config: Config) -> Result<()> {
    info!("binding to {}:{}", config.host, config.port);
    info!("default rule set {}", config.rule_set);
    if config.disable_cache {
        info!("cache headers disabled");
    }

    let state = AppState {
        rule_set: config.rule_set,
        max_records: config.max_records,
        disable_cache: config.disable_cache,
    };
    let app = router(state).layer(TraceLayer::new_for_http());
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.host, config.port))?;
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn backform_file(args: BackformArgs) -> Result<()> {
    let records = read_records(&args.input)?;
    let rule_set = args.ruleset.unwrap_or_else(env_rule_set);
    let default_mode = if args.prefix.is_some() {
        NormalizeMode::Prefix
    } else {
        NormalizeMode::Suffix
    };
    let backformer = Backformer::new(rule_set).with_mode(args.mode.unwrap_or(default_mode));

    let out = match (&args.suffix, &args.prefix) {
        (Some(suffix), _) => backformer.run(&records, *suffix),
        (None, Some(prefix)) => backformer.run_prefix(&records, prefix),
        (None, None) => anyhow::bail!("one of --suffix or --prefix is required"),
    };

    let queries = out.queries();
    let mut stdout = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &queries)?;
        writeln!(stdout)?;
    } else {
        for query in &queries {
            writeln!(stdout, "{}", query.cql)?;
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    host: String,
    port: u16,
    rule_set: RuleSet,
    max_records: usize,
    disable_cache: bool,
}

fn load_config(args: ServeArgs) -> Config {
    let host = args
        .host
        .or_else(|| env::var("HOST").ok())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args
        .port
        .or_else(|| env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()))
        .unwrap_or(DEFAULT_PORT);
    let rule_set = args.ruleset.unwrap_or_else(env_rule_set);
    let max_records = args
        .max_records
        .or_else(|| {
            env::var("BACKFORM_MAX_RECORDS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
        })
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_RECORDS);
    let disable_cache = args.no_cache
        || env::var("BACKFORM_DISABLE_CACHE")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

    Config {
        host,
        port,
        rule_set,
        max_records,
        disable_cache,
    }
}

fn env_rule_set() -> RuleSet {
    match env::var("BACKFORM_RULESET") {
        Ok(raw) => raw.parse().unwrap_or_else(|err| {
            warn!("{err}; falling back to {}", RuleSet::default());
            RuleSet::default()
        }),
        Err(_) => RuleSet::default(),
    }
}

fn init_tracing() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directives.as_deref()))
        .with_target(false)
        .with_level(true)
        .with_writer(io::stderr)
        .init();
}
