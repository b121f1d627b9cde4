use clap::Parser;
use contentlens::cli::commands::{Cli, Commands};
use contentlens::ContentLens;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("contentlens=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let lens = match ContentLens::open(&cli.db) {
        Ok(lens) => lens,
        Err(e) => {
            eprintln!("Error initializing contentlens: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(lens, &cli.db, cli.command.unwrap_or_default()).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(lens: ContentLens, db: &str, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Serve { host, port } => {
            lens.seed_demo_documents().await?;
            tracing::info!(db, documents = lens.document_count()?, "store ready");
            contentlens::http::serve(Arc::new(lens), SocketAddr::new(host, port), shutdown_signal()).await?;
        }
        Commands::Search { text, limit } => {
            let matches = lens.search(&text, limit).await?;
            println!("{}", serde_json::to_string_pretty(&matches)?);
        }
        Commands::Count => {
            println!("{}", lens.document_count()?);
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
