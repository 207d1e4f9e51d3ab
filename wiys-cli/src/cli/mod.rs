//! Command-line driver
//!
//! Stands in for the presentation layer: builds the services from config,
//! completes the user's profile and renders results in the terminal.

pub mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use crate::config;
use crate::random::RngSource;
use crate::services::{ContentCatalog, DelayConfig, MockAuthService, MockSoulmateService};
use crate::session::SoulmateSession;
use commands::{CommandContext, MatchArgs, OutputFormat, QuoteArgs, SignInArgs, VisualArgs};

#[derive(Parser, Debug)]
#[command(
    name = "wiys-cli",
    version,
    about = "WIYS: Who is your soulmate? Compatibility scores, soulmate visuals and daily quotes"
)]
pub struct Cli {
    /// Path to a config file (defaults to WIYS_CONFIG or the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible scores and visuals
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Skip the simulated service latency
    #[arg(long, global = true)]
    pub instant: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the quote of the day
    Quote(QuoteArgs),
    /// Score a candidate against your profile
    Match(MatchArgs),
    /// Generate soulmate visuals for your profile
    Visual(VisualArgs),
    /// Sign in with a mock provider
    SignIn(SignInArgs),
}

pub async fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut app_config = config::load(cli.config.as_deref())?;
    if cli.seed.is_some() {
        app_config.seed = cli.seed;
    }

    let mut service_config = app_config.service_config();
    if cli.instant {
        service_config.delays = DelayConfig::instant();
    }

    let catalog = Arc::new(ContentCatalog::default());
    let auth = Arc::new(MockAuthService::new(service_config.delays.sign_in));
    let soulmate = Arc::new(MockSoulmateService::new(
        catalog.clone(),
        service_config,
        Box::new(RngSource::from_seed_option(app_config.seed)),
    ));

    let session = SoulmateSession::new(auth, soulmate);
    session
        .complete_profile(app_config.user_profile()?)
        .context("Failed to set up profile")?;

    let ctx = CommandContext {
        session,
        catalog,
        format: cli.format,
    };

    match cli.command {
        Commands::Quote(args) => commands::quote::handle_quote_command(&ctx, args),
        Commands::Match(args) => commands::matching::handle_match_command(&ctx, args).await,
        Commands::Visual(args) => commands::visual::handle_visual_command(&ctx, args).await,
        Commands::SignIn(args) => commands::sign_in::handle_sign_in_command(&ctx, args).await,
    }
}
