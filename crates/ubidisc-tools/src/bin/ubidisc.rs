use clap::Parser;
use std::io::BufRead;
use std::time::Duration;
use ubidisc_client::{DiscoveryClient, DEFAULT_TIMEOUT};

/// Timeout per host when sweeping a host list from stdin.
const STDIN_SWEEP_TIMEOUT: Duration = Duration::from_millis(200);

#[derive(Parser, Debug)]
#[command(name = "ubidisc")]
#[command(about = "Discover devices answering the UDP discovery beacon on port 10001")]
struct Args {
    /// Host to probe; reads newline-delimited hosts from stdin when omitted
    host: Option<String>,
    /// Probe timeout in seconds (default: 2 for a single host, 0.2 for stdin)
    timeout_secs: Option<f64>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let wait = match args.timeout_secs {
        Some(secs) => {
            Duration::try_from_secs_f64(secs).map_err(|e| format!("invalid timeout: {e}"))?
        }
        None if args.host.is_some() => DEFAULT_TIMEOUT,
        None => STDIN_SWEEP_TIMEOUT,
    };

    let client = DiscoveryClient::new();
    match args.host {
        Some(host) => {
            let device = client.discover(&host, wait).await?;
            println!("{}", serde_json::to_string_pretty(&device)?);
        }
        None => {
            let mut hosts = Vec::new();
            for line in std::io::stdin().lock().lines() {
                let line = line?;
                let host = line.trim();
                if !host.is_empty() {
                    hosts.push(host.to_string());
                }
            }
            let devices = client.discover_multi(&hosts, wait).await?;
            println!("{}", serde_json::to_string_pretty(&devices)?);
        }
    }
    Ok(())
}
