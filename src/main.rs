//! Platform Tokens - design token toolchain for the admin platform UI
//!
//! Resolves the token table, persists the light/dark theme mode, and prints
//! brand presets and component styles for scripts and build pipelines.
//!
//! # Usage
//!
//! ```bash
//! # Resolve the built-in table and print it as JSON
//! platform-tokens tokens resolve --json
//!
//! # Write CSS, SCSS, ES6 and JSON token files
//! platform-tokens tokens build --out dist/tokens
//!
//! # Flip the persisted theme mode
//! platform-tokens theme toggle
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use platform_tokens::branding::APP_DESCRIPTION;
use platform_tokens::cli::{BrandArgs, ConfigArgs, RecordsArgs, StyleArgs, ThemeArgs, TokensArgs};

/// Platform Tokens - design tokens, theme mode and brand presets
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve, query and export design tokens
    Tokens(TokensArgs),
    /// Inspect and toggle the persisted theme mode
    Theme(ThemeArgs),
    /// List and show brand identity presets
    Brand(BrandArgs),
    /// Print the composed style of a button or badge
    Style(StyleArgs),
    /// Check screen record documents
    Records(RecordsArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing on stderr
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Tokens(args) => args.execute(),
        Commands::Theme(args) => args.execute(),
        Commands::Brand(args) => args.execute(),
        Commands::Style(args) => args.execute(),
        Commands::Records(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e.message);
        std::process::exit(e.exit_code().code());
    }
}
