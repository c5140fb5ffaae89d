//! Server configuration.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::server::error::Error;

/// Server configuration.
///
/// Created once at startup and shared read-only by the listener and every
/// connection handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// The interface to bind to.
    pub host: IpAddr,
    /// The port to bind to. Also used in the links of the root listing.
    pub port: u16,
    /// The directory static files are resolved against.
    pub web_root: PathBuf,
    /// The file name a directory link points at.
    pub default_file: String,
    /// Whether line breaks are dropped from static file content.
    pub strip_newlines: bool,
}

impl ServerConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Fields missing from the file keep their default values.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// The socket address the listener binds.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            web_root: PathBuf::from("webroot"),
            default_file: "index.html".to_string(),
            strip_newlines: true,
        }
    }
}
