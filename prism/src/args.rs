use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Prism Gemini gateway
#[derive(Debug, Parser)]
#[command(name = "prism", about = "HTTP gateway in front of Google Gemini text generation")]
pub struct Args {
    /// Path to configuration file; environment variables are used when it is absent
    #[arg(short, long, default_value = "prism.toml", env = "PRISM_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "PRISM_LISTEN")]
    pub listen: Option<SocketAddr>,
}
