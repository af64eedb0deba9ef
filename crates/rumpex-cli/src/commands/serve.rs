//! Relay server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use rumpex_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8787")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to rumpex-serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let state = AppState::from_env();

    println!();
    println!("  {} {}", "Rumpex".cyan().bold(), "Analysis Relay".bold());
    println!();
    println!(
        "  {}   POST http://{}:{}/api/analyze",
        "Analyze".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    GET  http://{}:{}/api/health",
        "Health".green(),
        args.host,
        args.port
    );
    println!();
    if state.analyzer.is_none() {
        println!(
            "  {} GOOGLE_API_KEY not set - analysis requests will fail with a configuration error",
            "!".yellow()
        );
        println!();
    }
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    rumpex_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
