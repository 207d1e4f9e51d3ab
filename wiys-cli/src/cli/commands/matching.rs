//! Match command handler

use anyhow::{Context, Result};
use chrono::Local;
use colored::*;

use super::{CommandContext, MatchArgs, OutputFormat, print_json};
use crate::profile::{CandidateProfile, parse_hobbies};
use crate::services::MatchResult;

pub async fn handle_match_command(ctx: &CommandContext, args: MatchArgs) -> Result<()> {
    let candidate = candidate_from_args(args);

    if ctx.format == OutputFormat::Text {
        println!("Analyzing your energy with {}...", candidate.name.cyan());
    }

    let result = ctx
        .session
        .evaluate_match(&candidate)
        .await
        .with_context(|| {
            ctx.session
                .error_message()
                .unwrap_or_else(|| format!("Could not score {}", candidate.name))
        })?;

    match ctx.format {
        OutputFormat::Json => print_json(&result),
        OutputFormat::Text => {
            print_match(&result);
            Ok(())
        }
    }
}

fn candidate_from_args(args: MatchArgs) -> CandidateProfile {
    CandidateProfile::new(
        args.name.trim(),
        args.birth_date
            .unwrap_or_else(|| Local::now().date_naive()),
        args.occupation.unwrap_or_default().trim(),
        args.hobbies.as_deref().map(parse_hobbies).unwrap_or_default(),
    )
}

fn print_match(result: &MatchResult) {
    let headline = result.headline();
    let headline = match result.compatibility_score {
        85.. => headline.bright_green().bold(),
        70..=84 => headline.yellow().bold(),
        _ => headline.bright_red().bold(),
    };

    println!();
    println!("{}", headline);
    println!("{}", result.summary);

    if !result.shared_keywords.is_empty() {
        println!();
        println!("{}", "Shared vibrations".dimmed());
        for keyword in &result.shared_keywords {
            println!("  {} {}", "*".magenta(), keyword);
        }
    }
}
