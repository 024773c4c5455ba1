use anyhow::Context;
use clap::Parser;
use procwatch::{
    AppState, FeedConfig, GeneratorConfig, HttpServer, IntelStore, MonitorConfig, PoliticalMonitor,
    ProcurementSimulator, ServerConfig,
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "procwatch", version, about = "Simulated procurement and company-intelligence API")]
struct Args {
    /// Bind address
    #[arg(long, default_value = "127.0.0.1", env = "PROCWATCH_ADDR")]
    address: String,

    /// HTTP port
    #[arg(long, default_value_t = 8080, env = "PROCWATCH_PORT")]
    port: u16,

    /// Seed for reproducible data
    #[arg(long, env = "PROCWATCH_SEED")]
    seed: Option<u64>,

    /// Number of generated people
    #[arg(long, default_value_t = 50, env = "PROCWATCH_PEOPLE")]
    people: usize,

    /// Number of generated companies
    #[arg(long, default_value_t = 30, env = "PROCWATCH_COMPANIES")]
    companies: usize,

    /// Number of generated contracts
    #[arg(long, default_value_t = 100, env = "PROCWATCH_CONTRACTS")]
    contracts: usize,

    /// Number of generated legal events
    #[arg(long, default_value_t = 20, env = "PROCWATCH_LEGAL_EVENTS")]
    legal_events: usize,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let config = ServerConfig {
            address: self.address,
            port: self.port,
            generator: GeneratorConfig {
                people: self.people,
                companies: self.companies,
                contracts: self.contracts,
                legal_events: self.legal_events,
                ..GeneratorConfig::default()
            },
            feed: FeedConfig::default(),
            political: MonitorConfig::default(),
        };
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = Args::parse().into_config();
    info!("procwatch v{}", procwatch::version());

    let intel = IntelStore::generate(config.generator.clone())
        .context("failed to generate company-intelligence data")?;
    if let Err(e) = intel.check_integrity() {
        warn!(error = %e, "Generated data failed integrity check");
    }

    let feed = ProcurementSimulator::new(config.feed.clone());
    let political = PoliticalMonitor::new(config.political.clone());
    let state = AppState::new(intel, feed, political);

    let server = HttpServer::new(state, config);
    server
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("server error: {}", e))
}
