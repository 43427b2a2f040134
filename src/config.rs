//! Server configuration.
//!
//! Everything the service needs is parsed once at startup and handed to
//! [`crate::state::AppState::init`]; nothing is read from the process
//! environment after that.

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_PROVIDER_URL: &str = "https://leakcheck.io";

/// What to tell the caller when the provider answers but cannot say
/// whether the identifier was breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum IndeterminatePolicy {
    /// Report `{ breached: false, details: null }`.
    #[default]
    Clear,
    /// Fail the request with 502.
    Error,
}

#[derive(Parser, Debug)]
#[command(name = "breachx", version, about = "Data breach lookup proxy")]
pub struct Args {
    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "BREACHX_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "BREACHX_PORT")]
    pub port: u16,

    /// Base URL of the breach lookup provider
    #[arg(long, default_value = DEFAULT_PROVIDER_URL, env = "BREACHX_PROVIDER_URL")]
    pub provider_url: String,

    /// Give up on the provider after this many seconds. Unset means wait
    /// for the transport to finish on its own.
    #[arg(long, env = "BREACHX_PROVIDER_TIMEOUT_SECS")]
    pub provider_timeout_secs: Option<u64>,

    /// How to answer when the provider reports it could not complete a lookup
    #[arg(long, value_enum, default_value_t = IndeterminatePolicy::Clear, env = "BREACHX_INDETERMINATE")]
    pub indeterminate: IndeterminatePolicy,

    /// Emit logs as JSON lines
    #[arg(long, env = "BREACHX_LOG_JSON")]
    pub log_json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen: SocketAddr,
    pub provider_url: String,
    pub provider_timeout: Option<Duration>,
    pub indeterminate: IndeterminatePolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            listen: SocketAddr::from(([0, 0, 0, 0], 5000)),
            provider_url: DEFAULT_PROVIDER_URL.to_string(),
            provider_timeout: None,
            indeterminate: IndeterminatePolicy::default(),
        }
    }
}

impl TryFrom<Args> for AppConfig {
    type Error = std::net::AddrParseError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let listen = format!("{}:{}", args.host, args.port).parse()?;
        Ok(AppConfig {
            listen,
            provider_url: args.provider_url.trim_end_matches('/').to_string(),
            provider_timeout: args.provider_timeout_secs.map(Duration::from_secs),
            indeterminate: args.indeterminate,
        })
    }
}
