use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "mock-cli")]
#[command(about = "Probe CLI for the Rustodon mock server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Health,
    /// Show instance information
    Instance,
    /// Fetch the public timeline
    Timeline,
    /// Look up an account
    Account { id: String },
    /// Run a search
    Search { query: String },
    /// GET an arbitrary path
    Get { path: String },
    /// POST to an arbitrary path
    Post { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{}/health", base)),
        Commands::Instance => client.get(format!("{}/api/v1/instance", base)),
        Commands::Timeline => client.get(format!("{}/api/v1/timelines/public", base)),
        Commands::Account { id } => client.get(format!("{}/api/v1/accounts/{}", base, id)),
        Commands::Search { query } => client
            .get(format!("{}/api/v1/search", base))
            .query(&[("q", query)]),
        Commands::Get { path } => client.get(format!("{}{}", base, path)),
        Commands::Post { path } => client.post(format!("{}{}", base, path)),
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: mock server returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
