//! Server configuration.
//!
//! The port comes from the command line. Everything else has a default and can
//! be set from an optional YAML file, then overridden by flags or environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_BACKLOG: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port {0:?}: expected a number between 1 and 65535")]
    InvalidPort(String),
    #[error("listen backlog must be at least 1")]
    InvalidBacklog,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address to bind; unspecified means every interface.
    pub host: IpAddr,
    #[serde(skip)]
    pub port: u16,
    pub backlog: u32,
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    /// Default log filter when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 0,
            backlog: DEFAULT_BACKLOG,
            root: PathBuf::from("."),
            log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty map.
        if s.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        if self.backlog == 0 {
            return Err(ConfigError::InvalidBacklog);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Parses a port argument, accepting only `0 < port < 65536`.
pub fn parse_port(s: &str) -> Result<u16, ConfigError> {
    match s.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(s.to_string())),
    }
}

/// Serve files from the working directory over a bare-bones HTTP.
#[derive(Debug, Parser)]
#[command(name = "courier", version)]
pub struct Cli {
    /// Port to listen on
    #[arg(value_parser = parse_port)]
    pub port: u16,

    /// YAML config file
    #[arg(long, env = "COURIER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind (defaults to all interfaces)
    #[arg(long, env = "COURIER_HOST")]
    pub host: Option<IpAddr>,

    /// Directory to serve files from
    #[arg(long, env = "COURIER_ROOT")]
    pub root: Option<PathBuf>,

    /// Listen backlog
    #[arg(long, env = "COURIER_BACKLOG")]
    pub backlog: Option<u32>,
}

impl Cli {
    /// Layers flags over the config file (if any) over defaults.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let mut cfg = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        cfg.port = self.port;
        if let Some(host) = self.host {
            cfg.host = host;
        }
        if let Some(root) = self.root {
            cfg.root = root;
        }
        if let Some(backlog) = self.backlog {
            cfg.backlog = backlog;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}
