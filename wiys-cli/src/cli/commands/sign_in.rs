//! Sign-in command handler

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;

use super::{CommandContext, OutputFormat, SignInArgs, SignInProvider, print_json};
use crate::services::AuthMethod;

pub async fn handle_sign_in_command(ctx: &CommandContext, args: SignInArgs) -> Result<()> {
    let method = match args.provider {
        SignInProvider::Apple => AuthMethod::Apple,
        SignInProvider::Google => AuthMethod::Google,
        SignInProvider::Email => AuthMethod::Email {
            email: args.email.trim().to_string(),
            password: args.password,
        },
    };

    let auth = ctx.session.sign_in(method).await.with_context(|| {
        ctx.session
            .error_message()
            .unwrap_or_else(|| "Sign-in failed".to_string())
    })?;

    match ctx.format {
        OutputFormat::Json => print_json(&json!({
            "session": auth,
            "flow": ctx.session.flow(),
        })),
        OutputFormat::Text => {
            println!(
                "Signed in as {} ({:?})",
                auth.display_name.bright_green().bold(),
                ctx.session.flow()
            );
            Ok(())
        }
    }
}
