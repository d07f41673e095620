// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Routeify CLI - pick the best route out of a list of candidates

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use routeify::commands::{self, OutputOptions};
use routeify::config::{self, RankingConfig};
use routeify::ranker::StrategyKind;
use routeify::validation::ValidationPolicy;
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

#[derive(Parser)]
#[command(name = "routeify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "ROUTEIFY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidate routes and flag the recommended one
    Rank {
        /// JSON file with route candidates ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Ordering used to pick the best route
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,

        /// Reject negative, non-finite and duplicate entries
        #[arg(long)]
        strict: bool,
    },

    /// Print only the recommended route
    Best {
        /// JSON file with route candidates ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,

        /// Ordering used to pick the best route
        #[arg(long, value_enum)]
        strategy: Option<StrategyKind>,

        /// Reject negative, non-finite and duplicate entries
        #[arg(long)]
        strict: bool,
    },

    /// Check a candidate list for out-of-range values
    Validate {
        /// JSON file with route candidates ("-" for stdin)
        #[arg(default_value = "-")]
        file: PathBuf,
    },

    /// Show the effective configuration
    Config {
        /// Configuration key (e.g. ranking.strategy); omit to print all
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn ranking_overrides(
    base: RankingConfig,
    strategy: Option<StrategyKind>,
    strict: bool,
) -> RankingConfig {
    RankingConfig {
        strategy: strategy.unwrap_or(base.strategy),
        validation: if strict {
            ValidationPolicy::Strict
        } else {
            base.validation
        },
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over flags, flags win over config
    let explicit_level = match cli.verbose {
        0 if cli.quiet => Some("error"),
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    };
    let env_filter = EnvFilter::try_from_default_env().ok();
    let pinned = env_filter.is_some() || explicit_level.is_some();
    let initial = env_filter.unwrap_or_else(|| EnvFilter::new(explicit_level.unwrap_or("info")));
    let (filter, filter_handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    // Completions never read the configuration file
    let load_settings = || -> Result<config::Config> {
        let settings = config::load(cli.config.as_deref())?;
        if !pinned {
            filter_handle.reload(EnvFilter::new(&settings.log_level))?;
        }
        Ok(settings)
    };
    let output = |settings: &config::Config| OutputOptions {
        json: cli.json,
        color: settings.output.color && !cli.no_color,
    };

    // Execute command
    match cli.command {
        Commands::Rank { file, strategy, strict } => {
            let settings = load_settings()?;
            let ranking = ranking_overrides(settings.ranking, strategy, strict);
            commands::rank::run(&file, ranking, output(&settings))
        }
        Commands::Best { file, strategy, strict } => {
            let settings = load_settings()?;
            let ranking = ranking_overrides(settings.ranking, strategy, strict);
            commands::best::run(&file, ranking, output(&settings))
        }
        Commands::Validate { file } => {
            load_settings()?;
            commands::validate::run(&file, cli.json)
        }
        Commands::Config { key } => {
            commands::config::run(key.as_deref(), &load_settings()?)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
