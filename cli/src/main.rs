use clap::Parser;
use influxenv::{try_new_client_from_env, DEFAULT_PREFIX};
use tracing::{debug, info};

/// Resolve InfluxDB connection settings from the environment
#[derive(Debug, Parser)]
#[command(name = "influxenv", version)]
struct Args {
    /// Prefix of the environment variables, without the trailing underscore
    #[arg(long, env = "INFLUXENV_PREFIX", default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Load a .env file from the current directory first
    #[arg(long)]
    dotenv: bool,

    /// Print the resolved configuration as JSON, without the password
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if args.dotenv {
        let path = dotenvy::dotenv()?;
        debug!("Loaded environment from {}", path.display());
    }

    let (_client, config) = try_new_client_from_env(&args.prefix)
        .map_err(|e| format!("Failed to load InfluxDB configuration: {}", e))?;

    info!("InfluxDB client ready for prefix {}", args.prefix);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("url:           {}", config.url());
    println!("database:      {}", config.database);
    println!("authenticated: {}", config.has_credentials());

    Ok(())
}
