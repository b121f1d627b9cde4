use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Parser)]
#[command(name = "contentlens", about = "Content analysis backend with similarity search")]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "CONTENTLENS_DB", default_value = "./contentlens.db", global = true)]
    pub db: String,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (seeds demo documents into an empty store)
    Serve {
        #[arg(long, env = "CONTENTLENS_HOST", default_value_t = DEFAULT_HOST)]
        host: IpAddr,
        #[arg(long, env = "CONTENTLENS_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Similarity search against stored documents (read-only)
    Search {
        text: String,
        #[arg(long, default_value = "5")]
        limit: usize,
    },
    /// Number of stored documents
    Count,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
