//! Furl CLI
//!
//! Drives a collapsing header through a simulated scroll session and prints
//! what the host would draw on every frame.

mod config;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use furl_header::{DismissPolicy, HeaderVariant};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::FurlConfig;
use session::Session;

#[derive(Parser)]
#[command(name = "furl")]
#[command(author, version, about = "Scroll-driven collapsing headers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file (defaults to ./furl.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scroll a header from one offset to another and print each frame
    Simulate {
        /// Header design
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Where the search bar is forced closed
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Starting offset
        #[arg(long, allow_hyphen_values = true)]
        from: Option<f32>,

        /// Final offset
        #[arg(long, allow_hyphen_values = true)]
        to: Option<f32>,

        /// Offset change per frame
        #[arg(long, allow_hyphen_values = true)]
        step: Option<f32>,

        /// Tap the search icon once the content reaches this offset
        #[arg(long, allow_hyphen_values = true)]
        search_at: Option<f32>,

        /// Print the view tree under every frame
        #[arg(long)]
        tree: bool,

        /// Emit one JSON object per frame
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Standard,
    Momo,
}

impl From<VariantArg> for HeaderVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Standard => HeaderVariant::Standard,
            VariantArg::Momo => HeaderVariant::Momo,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    WhileCollapsed,
    WhileExpanded,
}

impl From<PolicyArg> for DismissPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::WhileCollapsed => DismissPolicy::WhileCollapsed,
            PolicyArg::WhileExpanded => DismissPolicy::WhileExpanded,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = FurlConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Simulate {
            variant,
            policy,
            from,
            to,
            step,
            search_at,
            tree,
            json,
        } => {
            if let Some(variant) = variant {
                config.header.variant = variant.into();
            }
            if let Some(policy) = policy {
                config.header.dismiss_policy = policy.into();
            }
            let session = &mut config.session;
            session.from = from.unwrap_or(session.from);
            session.to = to.unwrap_or(session.to);
            session.step = step.unwrap_or(session.step);
            session.search_at = search_at.or(session.search_at);
            config.validate()?;

            cmd_simulate(&config, tree, json)
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn cmd_simulate(config: &FurlConfig, tree: bool, json: bool) -> Result<()> {
    let frames = Session::new(config)?.with_tree(tree).run();
    tracing::debug!(frames = frames.len(), "session finished");

    for frame in &frames {
        if json {
            println!("{}", serde_json::to_string(frame)?);
        } else {
            print!("{}", frame.to_text());
        }
    }
    Ok(())
}
