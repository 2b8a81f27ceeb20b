//! Application configuration management with security considerations.
//!
//! This module handles all configuration values required for the application.
//! Sensitive fields are clearly marked and should never be logged; production
//! environments should source them from a secret management system.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// Application configuration with security-aware field management.
///
/// This struct contains all environment variables used to configure the
/// application.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name to deploy the app (NON-SENSITIVE)
    /// Values: "local", "dev", "staging", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// Host address for web server binding (NON-SENSITIVE)
    /// Example: "0.0.0.0", "localhost", "propuesta-info.link"
    #[envconfig(default = "localhost")]
    pub web_server_host: String,

    /// Port for web server binding (NON-SENSITIVE)
    /// Common values: 80 (HTTP), 443 (HTTPS), 8080 (dev)
    #[envconfig(default = "8080")]
    pub web_server_port: u64,

    /// Path to SSL private key file (SENSITIVE PATH)
    /// Security: File should have 600 permissions, store path securely
    #[envconfig(default = "server.key")]
    pub private_key_path: String,

    /// Path to SSL certificate file (NON-SENSITIVE)
    #[envconfig(default = "server.crt")]
    pub certificate_path: String,

    /// 🔒 SENSITIVE: HubSpot private app access token.
    /// Absence is a supported degraded mode, not a startup failure: deal
    /// lookups are skipped and fallback pricing is served.
    pub hubspot_access_token: Option<String>,

    /// Base host of the HubSpot CRM API (NON-SENSITIVE)
    #[envconfig(default = "https://api.hubapi.com")]
    pub hubspot_api_host: String,
}

impl AppConfig {
    /// Checks if running in production environment
    pub fn is_prod(&self) -> bool {
        self.env.to_lowercase() == "prod"
    }

    /// Gets the server URL host with port for non-production environments
    pub fn url_host(&self) -> String {
        if self.is_prod() {
            return self.web_server_host.to_string();
        }

        format!(
            "{host}:{port}",
            host = self.web_server_host,
            port = self.web_server_port
        )
    }

    /// Gets the appropriate protocol (HTTP/HTTPS) based on environment
    pub fn web_server_protocol(&self) -> String {
        if self.is_prod() {
            return "https".into();
        }
        "http".into()
    }

    /// Constructs the complete base URL for the application
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.web_server_protocol(), self.url_host())
    }
}

/// Global application configuration instance with validation
///
/// This configuration is validated on first access. If validation fails, the
/// application will panic with a descriptive error message.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env().expect(
        "Failed to load and validate application configuration. Check environment variables.",
    )
});
