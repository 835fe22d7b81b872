//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing::info;

use confkit_core::{Collaborators, FixedTimeAnchor, enrich};
use confkit_keywords::KeywordExtractor;
use confkit_shared::{
    AppConfig, Event, config_file_path, init_config, load_config, load_config_from,
};
use confkit_sources::{
    FileChunkSource, FileSubtitleSource, JsonTalkSource, load_catalog, load_stoplist,
};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// confkit — enrich a conference catalog into a render-ready context.
#[derive(Parser)]
#[command(
    name = "confkit",
    version,
    about = "Enrich a conference event catalog with schedules, editions, transcripts, and keywords.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.confkit/confkit.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the enrichment over the catalog and write the context JSON.
    Build {
        /// Catalog file (defaults to the configured path).
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output file for the enriched context (defaults to the configured path).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Fix "today" (YYYY-MM-DD) for reproducible builds; defaults to the current date.
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Create a default config file.
    Init,
    /// Print the effective configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "confkit=info",
        1 => "confkit=debug",
        _ => "confkit=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    match cli.command {
        Command::Build {
            catalog,
            out,
            today,
        } => cmd_build(&config, catalog.as_deref(), out.as_deref(), today),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(&config),
        },
    }
}

fn cmd_build(
    config: &AppConfig,
    catalog_override: Option<&Path>,
    out_override: Option<&Path>,
    today: Option<NaiveDate>,
) -> Result<()> {
    let catalog_path = catalog_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.paths.catalog));
    let out_path = out_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.paths.output));
    let today = today.unwrap_or_else(|| Utc::now().date_naive());

    let catalog = load_catalog(&catalog_path)
        .wrap_err_with(|| format!("loading catalog {}", catalog_path.display()))?;
    let stoplist = load_stoplist(Path::new(&config.paths.stoplist))
        .wrap_err_with(|| format!("loading stoplist {}", config.paths.stoplist))?;

    let extractor = KeywordExtractor::new(stoplist, config.keywords.brand_label.clone());
    let talks = JsonTalkSource::new(&config.paths.data_dir);
    let chunks = FileChunkSource::new(&config.paths.transcripts_dir);
    let subtitles = FileSubtitleSource::new(&config.paths.srt_dir);
    let anchor = FixedTimeAnchor::new(config.schedule.start_hour, config.schedule.start_minute);

    let context = enrich(
        catalog,
        &Collaborators {
            talks: &talks,
            chunks: &chunks,
            subtitles: &subtitles,
            anchor: &anchor,
            extractor: &extractor,
            assets_dir: Path::new(&config.paths.assets_dir),
        },
        today,
    );

    for event in &context.events {
        if let Some(line) = event_summary(event) {
            println!("{line}");
        }
    }

    let json = serde_json::to_string_pretty(&context)?;
    std::fs::write(&out_path, json)
        .wrap_err_with(|| format!("writing {}", out_path.display()))?;

    info!(
        events = context.events.len(),
        panels = context.panels.len(),
        out = %out_path.display(),
        "enrichment complete"
    );

    Ok(())
}

/// One-line build summary. Externally-hosted events have no talks of
/// their own and get no line.
fn event_summary(event: &Event) -> Option<String> {
    let short_url = event.short_url.as_deref()?;
    Some(format!(
        "{} {} /{} ({} talks, {} keynotes, {} panels)",
        event.date,
        event.name,
        short_url,
        event.talks.len(),
        event.talks_featured.len(),
        event.talks_panel.len(),
    ))
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Created {}", path.display());
    Ok(())
}

fn cmd_config_show(config: &AppConfig) -> Result<()> {
    println!("# {}", config_file_path()?.display());
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
