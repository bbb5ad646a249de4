use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use recap_config::LogFormat;

/// Recap meeting-summary relay
#[derive(Debug, Parser)]
#[command(name = "recap", about = "Relays meeting transcripts to an LLM for summarization")]
pub struct Args {
    /// Path to a TOML configuration file; defaults plus `GROQ_API_KEY` when omitted
    #[arg(short, long, env = "RECAP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "RECAP_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Override the log format (`text` or `json`)
    #[arg(long, env = "RECAP_LOG_FORMAT")]
    pub log_format: Option<LogFormat>,
}
