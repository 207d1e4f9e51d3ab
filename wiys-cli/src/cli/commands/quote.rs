//! Quote command handler

use anyhow::Result;
use chrono::NaiveDate;
use colored::*;
use log::warn;

use super::{CommandContext, OutputFormat, QuoteArgs, print_json};
use crate::services::Quote;

pub fn handle_quote_command(ctx: &CommandContext, args: QuoteArgs) -> Result<()> {
    let quote = resolve_quote(ctx, args.date.as_deref());

    match ctx.format {
        OutputFormat::Json => print_json(&quote),
        OutputFormat::Text => {
            println!("{}", "Quote of the day".bright_magenta().bold());
            println!("\"{}\"", quote.text.italic());
            println!("  {}", format!("- {}", quote.author).dimmed());
            Ok(())
        }
    }
}

/// Unreadable dates fall back to the first quote instead of failing
fn resolve_quote(ctx: &CommandContext, raw_date: Option<&str>) -> Quote {
    match raw_date {
        None => ctx.session.quote_of_the_day(),
        Some(raw) => match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
            Ok(date) => ctx.session.quote_for(date),
            Err(err) => {
                warn!("Could not read date '{}': {}", raw, err);
                ctx.catalog.quote_for_ordinal(None).clone()
            }
        },
    }
}
