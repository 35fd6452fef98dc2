use std::env;
use std::num::NonZeroUsize;

use auth::JwtError;
use auth::TokenSettings;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[redacted]")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .finish()
    }
}

/// Limits on credential hashing work.
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Hash/verify calls allowed in flight at once. Each one holds
    /// `auth::MEMORY_PER_CALL_BYTES` while it runs. Zero is rejected at load.
    #[serde(default = "default_max_concurrent_hashes")]
    pub max_concurrent_hashes: NonZeroUsize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            max_concurrent_hashes: default_max_concurrent_hashes(),
        }
    }
}

fn default_max_connections() -> u32 {
    5
}

fn default_max_concurrent_hashes() -> NonZeroUsize {
    NonZeroUsize::MIN.saturating_add(3)
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;

        Ok(config)
    }

    /// Validated token settings. Failure here must abort startup.
    pub fn token_settings(&self) -> Result<TokenSettings, JwtError> {
        TokenSettings::new(
            self.jwt.secret.as_bytes(),
            self.jwt.issuer.as_str(),
            self.jwt.audience.as_str(),
        )
    }

    /// Upper bound on transient memory used by concurrent credential hashing.
    pub fn hashing_memory_budget_bytes(&self) -> usize {
        self.auth.max_concurrent_hashes.get() * auth::MEMORY_PER_CALL_BYTES
    }
}
