//! Server configuration from the environment

use std::env;
use std::net::{AddrParseError, IpAddr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SITE_DIR: &str = "web";

/// Hosted datastore credentials
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatastoreConfig {
    pub url: String,
    pub anon_key: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub site_dir: PathBuf,
    /// `None` when the datastore is not configured
    pub datastore: Option<DatastoreConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR: {0}")]
    BindAddr(#[from] AddrParseError),
    #[error("invalid PORT: {0}")]
    Port(#[from] ParseIntError),
    #[error("SUPABASE_URL is set but SUPABASE_ANON_KEY is missing")]
    MissingAnonKey,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let ip: IpAddr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()?;
        let port = match var("PORT") {
            Some(port) => port.trim().parse()?,
            None => DEFAULT_PORT,
        };
        let site_dir = var("SITE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SITE_DIR));

        let datastore = match (var("SUPABASE_URL"), var("SUPABASE_ANON_KEY")) {
            (Some(url), Some(anon_key)) => Some(DatastoreConfig { url, anon_key }),
            (Some(_), None) => return Err(ConfigError::MissingAnonKey),
            (None, _) => None,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            site_dir,
            datastore,
        })
    }
}
