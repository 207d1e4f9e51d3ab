//! Visual command handler

use anyhow::{Context, Result};
use colored::*;

use super::{CommandContext, OutputFormat, VisualArgs, print_json};
use crate::services::GeneratedVisual;

pub async fn handle_visual_command(ctx: &CommandContext, args: VisualArgs) -> Result<()> {
    for _ in 0..args.count {
        if ctx.format == OutputFormat::Text {
            println!("{}", "Painting your soulmate...".dimmed());
        }

        ctx.session.generate_visual().await.with_context(|| {
            ctx.session
                .error_message()
                .unwrap_or_else(|| "Could not create a visual".to_string())
        })?;
    }

    // Newest first
    let history = ctx.session.history();

    match ctx.format {
        OutputFormat::Json => print_json(&history),
        OutputFormat::Text => {
            for visual in &history {
                print_visual(visual);
            }
            Ok(())
        }
    }
}

fn print_visual(visual: &GeneratedVisual) {
    let swatches: Vec<String> = visual
        .palette
        .color_stops
        .iter()
        .map(|stop| {
            let rgba = stop.rgba();
            let channel = |v: f64| (v * 255.0).round() as u8;
            "███"
                .truecolor(channel(rgba.red), channel(rgba.green), channel(rgba.blue))
                .to_string()
        })
        .collect();

    println!();
    println!(
        "{} {}",
        visual.palette.mood.bright_magenta().bold(),
        format!("[{}]", visual.palette.icon_name).dimmed()
    );
    println!("{}", swatches.join(""));
    println!("{}", visual.description);
    println!("{}", visual.formatted_date().dimmed());
}
