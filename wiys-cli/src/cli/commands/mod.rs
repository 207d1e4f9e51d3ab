//! Command arguments and shared output helpers

pub mod matching;
pub mod quote;
pub mod sign_in;
pub mod visual;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::sync::Arc;

use crate::services::ContentCatalog;
use crate::session::SoulmateSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text
    Text,
    /// Pretty-printed JSON
    Json,
}

/// What every command handler gets
pub struct CommandContext {
    pub session: SoulmateSession,
    pub catalog: Arc<ContentCatalog>,
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// Day to pick the quote for (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Candidate's name
    #[arg(long)]
    pub name: String,

    /// Comma-separated hobbies (e.g. "yoga, camping, cinema")
    #[arg(long)]
    pub hobbies: Option<String>,

    /// Candidate's occupation
    #[arg(long)]
    pub occupation: Option<String>,

    /// Candidate's birth date (YYYY-MM-DD)
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub struct VisualArgs {
    /// Number of visuals to generate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub count: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SignInProvider {
    Apple,
    Google,
    Email,
}

#[derive(Args, Debug)]
pub struct SignInArgs {
    /// Sign-in provider
    #[arg(value_enum)]
    pub provider: SignInProvider,

    /// Email address (email provider only)
    #[arg(long, default_value = "")]
    pub email: String,

    /// Password (email provider only)
    #[arg(long, default_value = "")]
    pub password: String,
}

/// Print a value as pretty JSON
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to format JSON output")?;
    println!("{}", json);
    Ok(())
}
