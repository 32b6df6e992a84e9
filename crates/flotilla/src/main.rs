use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use flotilla::{AdminGuard, Cli, ServerBuilder};
use tracing_subscriber::EnvFilter;

fn banner(port: u16) -> String {
    let port = format!("{port:<5}");
    format!(
        "\n\
         ┌──────────────────────────────────────┐\n\
         │                                      │\n\
         │   Flotilla started on port {port}     │\n\
         │                                      │\n\
         └──────────────────────────────────────┘\n"
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A generated secret is printed exactly once and lives only in
    // memory; restarting the server mints a new one.
    let admin_secret = cli.admin_secret.clone().unwrap_or_else(|| {
        let secret = AdminGuard::generate_secret();
        println!("admin secret (generated): {secret}");
        secret
    });

    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    let server = ServerBuilder::new(addr, admin_secret)
        .registry_config(cli.registry_config())
        .sweep_interval(Duration::from_secs(cli.sweep_interval))
        .bind()
        .await?;

    println!("{}", banner(cli.port));
    server.run().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_pads_short_ports_to_fixed_width() {
        let narrow = banner(80);
        let wide = banner(65535);
        let width = |s: &str| s.lines().map(|line| line.chars().count()).max();
        assert_eq!(width(&narrow), width(&wide));
        assert!(narrow.contains("port 80"));
        assert!(wide.contains("port 65535"));
    }
}
