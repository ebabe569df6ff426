//! Startup configuration.
//!
//! Everything is taken from command-line arguments; there is no config file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Port the server listens on unless overridden.
pub const DEFAULT_PORT: u16 = 4221;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "plain-http-server")]
#[command(version)]
#[command(about = "Serves echo, user-agent and file routes over HTTP/1.1", long_about = None)]
pub struct Config {
    /// Directory that `/files/<name>` reads from and writes to
    #[arg(long, default_value = ".")]
    pub directory: PathBuf,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Config {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { directory: PathBuf::from("."), host: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: DEFAULT_PORT, log_level: Level::INFO }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["plain-http-server"]).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.address(), "0.0.0.0:4221".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn directory_flag_overrides_working_directory() {
        let config = Config::try_parse_from(["plain-http-server", "--directory", "/tmp/files"]).unwrap();
        assert_eq!(config.directory, PathBuf::from("/tmp/files"));
    }

    #[test]
    fn port_and_log_level() {
        let config = Config::try_parse_from(["plain-http-server", "-p", "8080", "--log-level", "debug"]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(Config::try_parse_from(["plain-http-server", "--log-level", "loud"]).is_err());
    }
}
