/// How long a signup message stays visible.
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

/// Browser client settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix for every API request. Empty means same origin.
    pub api_base_url: String,
    pub message_timeout_ms: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("API_BASE_URL").unwrap_or_default().to_string(),
            message_timeout_ms: MESSAGE_TIMEOUT_MS,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "server")]
pub use server_config::ServerConfig;

#[cfg(feature = "server")]
mod server_config {
    use std::net::SocketAddr;
    use std::path::PathBuf;

    const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
    const DEFAULT_STATIC_DIR: &str = "dist";

    /// Development backend settings, read from `BIND_ADDR` and `STATIC_DIR`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerConfig {
        pub bind_addr: SocketAddr,
        pub static_dir: PathBuf,
    }

    impl ServerConfig {
        pub fn from_env() -> Result<Self, std::net::AddrParseError> {
            Self::from_values(
                std::env::var("BIND_ADDR").ok(),
                std::env::var("STATIC_DIR").ok(),
            )
        }

        fn from_values(
            bind_addr: Option<String>,
            static_dir: Option<String>,
        ) -> Result<Self, std::net::AddrParseError> {
            Ok(Self {
                bind_addr: bind_addr
                    .as_deref()
                    .unwrap_or(DEFAULT_BIND_ADDR)
                    .parse()?,
                static_dir: PathBuf::from(static_dir.as_deref().unwrap_or(DEFAULT_STATIC_DIR)),
            })
        }
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
                static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            }
        }
    }

}
