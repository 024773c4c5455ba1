//! Server configuration

use crate::intel::GeneratorConfig;
use crate::political::MonitorConfig;
use crate::procurement::FeedConfig;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Company-intelligence dataset sizes
    pub generator: GeneratorConfig,
    /// Procurement feed sizes
    pub feed: FeedConfig,
    /// Political monitor seed and reference date
    pub political: MonitorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8080,
            generator: GeneratorConfig::default(),
            feed: FeedConfig::default(),
            political: MonitorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Seed both simulators so every table is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.generator.seed = Some(seed);
        self.feed.seed = Some(seed);
        self.political.seed = Some(seed);
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
