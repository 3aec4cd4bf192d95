use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "lingolink-cli")]
#[command(about = "Operator CLI for the lingolink backend", long_about = None)]
struct Cli {
    /// Operational server base URL.
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Metrics exporter base URL.
    #[arg(short, long, default_value = "http://localhost:9090")]
    metrics_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check liveness
    Health,
    /// Check readiness (pings the database)
    Ready,
    /// Dump the Prometheus metrics snapshot
    Metrics,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Ready => {
            let res = client.get(format!("{}/readyz", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Metrics => {
            let res = client.get(&cli.metrics_url).send().await?;
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("[{}]\n{}", status, serde_json::to_string_pretty(&json)?),
        Err(_) => println!("[{}]\n{}", status, text),
    }

    Ok(())
}
