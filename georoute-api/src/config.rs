//! Server configuration.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::time::Duration;

/// Address the server binds when none is configured.
pub const DEFAULT_BIND: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8080));

/// Origins allowed to call the API from a browser by default.
pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "https://localhost:3000"];

/// Deadline for a single sequencing request.
pub const DEFAULT_OPTIMIZE_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest accepted request body. Export requests carry a base64 map image.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Runtime settings for [`crate::serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Socket address to listen on.
    pub bind: SocketAddr,
    /// Exact origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Deadline applied to each `/route/optimize` call.
    pub optimize_timeout: Duration,
    /// Request body limit in bytes.
    pub max_body_bytes: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            cors_origins: DEFAULT_CORS_ORIGINS.map(String::from).to_vec(),
            optimize_timeout: DEFAULT_OPTIMIZE_TIMEOUT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
