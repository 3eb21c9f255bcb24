use clap::Parser;
use fetcher::ProviderArgs;
use wxdash_core::{find_config_file, load_config, ConfigSource, DEFAULT_DASHBOARD_PORT};

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "wxdash dashboard - Forecast and climate normals web UI and API"
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $WXDASH_DASHBOARD_CONFIG, ./dashboard.toml,
    /// $XDG_CONFIG_HOME/wxdash/dashboard.toml, /etc/wxdash/dashboard.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Where the file-backed settings were read from
    #[arg(skip)]
    #[serde(skip)]
    pub config_source: Option<ConfigSource>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "WXDASH_DASHBOARD_LEVEL")]
    pub level: Option<String>,

    /// Host to listen on (use 0.0.0.0 for all interfaces)
    #[arg(short, long, env = "WXDASH_DASHBOARD_HOST")]
    #[serde(alias = "host")]
    pub domain: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WXDASH_DASHBOARD_PORT")]
    pub port: Option<String>,

    /// Public URL for API responses and UI
    #[arg(short, long, env = "WXDASH_DASHBOARD_REMOTE_URL")]
    pub remote_url: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub providers: ProviderArgs,
}

impl Cli {
    /// Get the effective configuration value with defaults
    pub fn host(&self) -> String {
        self.domain
            .clone()
            .unwrap_or_else(|| "127.0.0.1".to_string())
    }

    pub fn port(&self) -> String {
        self.port
            .clone()
            .unwrap_or_else(|| DEFAULT_DASHBOARD_PORT.to_string())
    }

    pub fn remote_url(&self) -> String {
        self.remote_url
            .clone()
            .unwrap_or_else(|| format!("http://{}:{}", self.host(), self.port()))
    }
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("WXDASH_DASHBOARD_CONFIG", "dashboard.toml")
    };

    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        domain: cli_args.domain.or(file_config.domain),
        port: cli_args.port.or(file_config.port),
        remote_url: cli_args.remote_url.or(file_config.remote_url),
        providers: cli_args.providers.or(file_config.providers),
        config_source: Some(source),
    }
}
