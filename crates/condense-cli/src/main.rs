use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use condense_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "condense")]
#[command(author, version, about = "A scroll-condensing header panel for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    panel: PanelFlags,
}

/// Panel options that override the config file for this run
#[derive(Args)]
struct PanelFlags {
    /// Shrink the header to its condensed height instead of scrolling it away
    #[arg(long, global = true)]
    condenses: bool,
    /// Keep the header fixed above the content
    #[arg(long, global = true)]
    fixed: bool,
    /// Only reveal the header when scrolled back to the top
    #[arg(long, global = true)]
    no_reveal: bool,
    /// Disable the background crossfade while condensing
    #[arg(long, global = true)]
    no_dissolve: bool,
    /// Never hide the header past its condensed height
    #[arg(long, global = true)]
    keep_condensed_header: bool,
    /// Let the top bar scroll away with the header
    #[arg(long, global = true)]
    scroll_away_topbar: bool,
}

impl PanelFlags {
    fn apply(&self, config: &mut AppConfig) {
        let panel = &mut config.panel;
        panel.condenses |= self.condenses;
        panel.fixed |= self.fixed;
        panel.no_reveal |= self.no_reveal;
        panel.no_dissolve |= self.no_dissolve;
        panel.keep_condensed_header |= self.keep_condensed_header;
        panel.scroll_away_topbar |= self.scroll_away_topbar;
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Feed scroll offsets through a panel and print each resulting state
    Simulate {
        /// Comma-separated scroll offsets
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        offsets: Vec<f64>,
        /// Full header height
        #[arg(long, default_value_t = 300.0)]
        header_height: f64,
        /// Condensed header height (defaults to a third of the header)
        #[arg(long)]
        condensed_height: Option<f64>,
        /// Smooth-scroll to this offset after the listed offsets
        #[arg(long)]
        smooth_to: Option<f64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the active configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        // The TUI owns the terminal, so logs go to a file
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::load()?;
    cli.panel.apply(&mut config);

    let is_tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, is_tui)?;

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Simulate {
            offsets,
            header_height,
            condensed_height,
            smooth_to,
            json,
        }) => {
            let args = commands::simulate::SimulateArgs {
                offsets,
                header_height,
                condensed_height,
                smooth_to,
                json,
            };
            commands::simulate::run(&config, args).await
        }
        Some(Commands::Config { init }) => commands::config::run(&config, init).await,
    }
}
