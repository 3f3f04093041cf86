//! Server configuration

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the listener binds to
    pub port: u16,

    /// Simulated downstream processing delay before acknowledging a batch
    pub ack_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            ack_delay: default_ack_delay(),
        }
    }
}

impl Config {
    /// Address string the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

// Default value functions

fn default_port() -> u16 {
    3000
}

fn default_ack_delay() -> Duration {
    Duration::from_millis(100)
}
