//! Service configuration.
//!
//! Plain structs with code-level defaults; the service reads no environment
//! variables and no files. Tests (and embedders) pass their own values to
//! [`crate::app::build_app`].

use std::net::SocketAddr;
use std::time::Duration;

/// Top-level API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address the server listens on.
    pub bind_addr: SocketAddr,
    /// Cross-origin policy applied to every route.
    pub cors: CorsConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors: CorsConfig::default(),
        }
    }
}

/// Cross-origin resource sharing policy.
///
/// Origins are matched exactly. An origin that is not a valid header value
/// panics at router construction time, which is the one place fatal errors
/// are allowed.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    /// How long browsers may cache a preflight response.
    pub preflight_max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:8000".to_string(),
            ],
            preflight_max_age: Duration::from_secs(3600),
        }
    }
}
