//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SURVEY_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_FILE: &str = "candidateDetails.json";

/// Runtime settings for the survey service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SURVEY")]
pub struct SurveySettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Directory holding the candidate store.
    pub data_dir: Option<PathBuf>,
    /// File name of the candidate store inside `data_dir`.
    pub data_file: Option<String>,
    /// Keep candidates in memory instead of on disk.
    #[ortho_config(default = false)]
    pub in_memory: bool,
}

impl SurveySettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Store directory, falling back to the working directory.
    pub fn data_dir(&self) -> &Path {
        self.data_dir.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Store file name, falling back to `candidateDetails.json`.
    pub fn data_file(&self) -> &str {
        self.data_file.as_deref().unwrap_or(DEFAULT_DATA_FILE)
    }

    /// Resolve the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if the host does not resolve to any address.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} did not resolve to an address", self.host()),
                )
            })
    }
}
