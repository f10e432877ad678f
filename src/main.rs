use std::io::Write;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use sar_globe::{geo, sar, server, telemetry, AppConfig};

#[derive(Parser, Debug)]
#[command(name = "sar-globe", about = "Mock SAR data service for the Japan globe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one SAR batch as JSON and exit
    Generate {
        /// Samples per base location (defaults to SAR_GLOBE_SAMPLES or 5)
        #[arg(long, allow_hyphen_values = true)]
        samples: Option<i64>,
        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Run the HTTP server
    Serve {
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init("info");
    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("reading configuration")?;

    match cli.command {
        Command::Generate {
            samples,
            seed,
            pretty,
        } => {
            let samples = samples.unwrap_or(config.samples_per_location);
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let batch = sar::generate(&geo::japan_base_locations(), samples, &mut rng)?;
            let json = if pretty {
                serde_json::to_string_pretty(&batch)?
            } else {
                serde_json::to_string(&batch)?
            };
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("writing batch")?;
        }
        Command::Serve { addr } => {
            if let Some(addr) = addr {
                config.bind_addr = addr;
            }
            server::serve(config).await?;
        }
    }
    Ok(())
}
