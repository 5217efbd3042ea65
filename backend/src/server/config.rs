//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use survey_service::domain::ports::CandidateRepository;

/// Everything `create_server` needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn CandidateRepository>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, repository: Arc<dyn CandidateRepository>) -> Self {
        Self {
            bind_addr,
            repository,
        }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
