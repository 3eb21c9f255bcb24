use clap::{Args, Parser, Subcommand};
use log::{debug, warn};
use reqwest::Client;
use wxdash_core::{find_config_file, load_config, ConfigSource};

use crate::{Error, ForecastConfig, NormalsConfig, DEFAULT_FORECAST_URL, DEFAULT_NORMALS_URL};

/// Upstream provider settings shared by the fetcher and dashboard binaries
#[derive(Args, Clone, Debug, serde::Deserialize, Default)]
pub struct ProviderArgs {
    /// OpenWeatherMap API key used by the forecast pipeline
    #[arg(long, env = "WXDASH_OPENWEATHER_API_KEY", hide_env_values = true)]
    pub openweather_api_key: Option<String>,

    /// Forecast endpoint (OpenWeatherMap 5 day / 3 hour forecast)
    #[arg(long, env = "WXDASH_FORECAST_URL")]
    pub forecast_url: Option<String>,

    /// Base URL holding one daily-normals csv file per station
    #[arg(long, env = "WXDASH_NORMALS_URL")]
    pub normals_url: Option<String>,

    /// HTTP User-Agent header for upstream requests
    #[arg(long, env = "WXDASH_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl ProviderArgs {
    /// Fill any unset value from `fallback` (typically the config file)
    pub fn or(self, fallback: ProviderArgs) -> ProviderArgs {
        ProviderArgs {
            openweather_api_key: self.openweather_api_key.or(fallback.openweather_api_key),
            forecast_url: self.forecast_url.or(fallback.forecast_url),
            normals_url: self.normals_url.or(fallback.normals_url),
            user_agent: self.user_agent.or(fallback.user_agent),
        }
    }

    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            base_url: self
                .forecast_url
                .clone()
                .unwrap_or_else(|| DEFAULT_FORECAST_URL.to_string()),
            api_key: self.openweather_api_key.clone(),
        }
    }

    pub fn normals_config(&self) -> NormalsConfig {
        NormalsConfig {
            base_url: self
                .normals_url
                .clone()
                .unwrap_or_else(|| DEFAULT_NORMALS_URL.to_string()),
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("wxdash/{}", env!("CARGO_PKG_VERSION")))
    }
}

#[derive(Parser, Clone, Debug, serde::Deserialize, Default)]
#[command(
    author,
    version,
    about = "wxdash fetcher - One-shot forecast and climate normals queries",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to config file (TOML format)
    /// Searched in order: this flag, $WXDASH_FETCHER_CONFIG, ./fetcher.toml,
    /// $XDG_CONFIG_HOME/wxdash/fetcher.toml, /etc/wxdash/fetcher.toml
    #[arg(short, long)]
    #[serde(skip)]
    pub config: Option<String>,

    /// Where the file-backed settings were read from
    #[arg(skip)]
    #[serde(skip)]
    pub config_source: Option<ConfigSource>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, env = "WXDASH_FETCHER_LEVEL")]
    pub level: Option<String>,

    #[command(flatten)]
    #[serde(flatten)]
    pub providers: ProviderArgs,

    #[command(subcommand)]
    #[serde(skip)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Per-day forecast summaries for a city
    Forecast {
        /// City name, e.g. "Boston" or "Paris,FR"
        #[arg(long)]
        city: String,

        /// Number of days to summarize (1-5)
        #[arg(long, default_value_t = 5)]
        days: usize,
    },
    /// Daily climate normals for a station, optionally limited to a date range
    Normals {
        /// Station identifier, e.g. USW00014739
        #[arg(long)]
        station: String,

        /// Inclusive lower bound, YYYYMMDD
        #[arg(long)]
        start_date: Option<String>,

        /// Inclusive upper bound, YYYYMMDD
        #[arg(long)]
        end_date: Option<String>,
    },
}

/// Load configuration from CLI args, config file, and environment
pub fn get_config_info() -> Cli {
    let cli_args = Cli::parse();

    let source = if let Some(ref path) = cli_args.config {
        ConfigSource::Explicit(path.into())
    } else {
        find_config_file("WXDASH_FETCHER_CONFIG", "fetcher.toml")
    };

    let file_config: Cli = load_config(&source).unwrap_or_default();

    // CLI args override file config (env vars are handled by clap)
    Cli {
        config: cli_args.config,
        level: cli_args.level.or(file_config.level),
        providers: cli_args.providers.or(file_config.providers),
        command: cli_args.command,
        config_source: Some(source),
    }
}

/// Thin wrapper over a reusable `reqwest::Client` that turns non-success
/// responses into [`Error::Upstream`]
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<HttpFetcher, Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Issue a single GET and buffer the whole body as text
    ///
    /// `resource` names what is being fetched and ends up in the error message.
    pub async fn fetch_text(
        &self,
        url: &str,
        query: &[(&str, &str)],
        resource: &str,
    ) -> Result<String, Error> {
        debug!("requesting {}: {}", resource, url);
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("upstream returned {} for {}", status, resource);
            return Err(Error::Upstream {
                resource: resource.to_owned(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
