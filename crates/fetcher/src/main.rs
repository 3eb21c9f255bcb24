use anyhow::anyhow;
use fetcher::{
    build_normals_report, get_config_info, Cli, Command, ForecastData, ForecastService,
    HttpFetcher, NormalsService,
};
use log::{debug, error, info};
use std::sync::Arc;
use wxdash_core::{get_log_level, setup_logger};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = get_config_info();
    let log_level = get_log_level(cli.level.as_deref());

    setup_logger()
        .level(log_level)
        .level_for("fetcher", log_level)
        .chain(std::io::stderr())
        .apply()?;

    if let Some(source) = &cli.config_source {
        debug!("config: {}", source);
    }

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(err) => {
            error!("{}", err);
            Err(err)
        }
    }
}

async fn run(cli: Cli) -> Result<String, anyhow::Error> {
    let command = cli
        .command
        .clone()
        .ok_or_else(|| anyhow!("no command given, see --help"))?;
    let fetcher = Arc::new(HttpFetcher::new(&cli.providers.user_agent())?);

    match command {
        Command::Forecast { city, days } => {
            info!("fetching {} day forecast for {}", days, city);
            let service = ForecastService::new(fetcher, cli.providers.forecast_config());
            let report = service
                .daily_forecast(&city, days)
                .await
                .map_err(|e| anyhow!(e.user_message()))?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
        Command::Normals {
            station,
            start_date,
            end_date,
        } => {
            info!("fetching normals for station {}", station);
            let service = NormalsService::new(fetcher, cli.providers.normals_config());
            let report = build_normals_report(
                &service,
                &station,
                start_date.as_deref(),
                end_date.as_deref(),
            )
            .await?;
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
