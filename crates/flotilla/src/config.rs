//! Command-line configuration.

use clap::Parser;
use flotilla_registry::RegistryConfig;

/// A server for hosting battleship games.
#[derive(Debug, Parser)]
#[command(name = "flotilla", version, about)]
pub struct Cli {
    /// Port used for the web server.
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Address to bind.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Digits in a game code. At most 10^N games can be live at once.
    #[arg(long, value_name = "N", default_value_t = 4)]
    pub code_length: usize,

    /// Seconds a game may sit idle before it is evicted.
    #[arg(long, value_name = "SECS", default_value_t = 600)]
    pub timeout: u64,

    /// Seconds between eviction sweeps.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub sweep_interval: u64,

    /// Secret for the /admin routes. Generated and printed once at
    /// startup when omitted; never persisted.
    #[arg(long, value_name = "SECRET")]
    pub admin_secret: Option<String>,
}

impl Cli {
    /// The registry part of the configuration.
    pub fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            code_length: self.code_length,
            idle_timeout_secs: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["flotilla"]);
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.code_length, 4);
        assert_eq!(cli.timeout, 600);
        assert_eq!(cli.sweep_interval, 30);
        assert!(cli.admin_secret.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "flotilla",
            "-p",
            "8080",
            "--code-length",
            "6",
            "--timeout",
            "120",
            "--admin-secret",
            "hunter2",
        ]);
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.registry_config().code_length, 6);
        assert_eq!(cli.registry_config().idle_timeout_secs, 120);
        assert_eq!(cli.admin_secret.as_deref(), Some("hunter2"));
    }
}
