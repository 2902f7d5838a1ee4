use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON catalog file; the compiled-in seed dataset is used when unset
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Number of cards in each landing page section
    #[serde(default = "default_section_size")]
    pub section_size: usize,

    /// Maximum number of related titles returned for an entry
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_section_size() -> usize {
    6
}

fn default_related_limit() -> usize {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: None,
            section_size: default_section_size(),
            related_limit: default_related_limit(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
