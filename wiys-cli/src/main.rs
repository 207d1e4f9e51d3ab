use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before reading WIYS_* variables
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = wiys::cli::Cli::parse();
    wiys::cli::run(cli).await
}
