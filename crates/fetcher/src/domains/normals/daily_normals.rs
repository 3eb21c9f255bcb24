use async_trait::async_trait;
use log::{debug, info};
use std::sync::Arc;

use crate::{
    filter_by_date_range, parse_normals_csv, summarize_normals, validate_date_bound, DailyNormal,
    Error, HttpFetcher, NormalsReport,
};

pub const DEFAULT_NORMALS_URL: &str =
    "https://noaa-normals-pds.s3.amazonaws.com/normals-daily/1991-2020/access";

#[derive(Debug, Clone)]
pub struct NormalsConfig {
    /// Directory-style URL; a station's file lives at `<base_url>/<station>.csv`
    pub base_url: String,
}

impl Default for NormalsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NORMALS_URL.to_string(),
        }
    }
}

#[async_trait]
pub trait NormalsData: Send + Sync {
    /// Every daily normal published for a station, in file order
    async fn station_normals(&self, station_id: &str) -> Result<Vec<DailyNormal>, Error>;
}

pub struct NormalsService {
    fetcher: Arc<HttpFetcher>,
    config: NormalsConfig,
}

impl NormalsService {
    pub fn new(fetcher: Arc<HttpFetcher>, config: NormalsConfig) -> Self {
        NormalsService { fetcher, config }
    }

    fn station_url(&self, station_id: &str) -> String {
        format!(
            "{}/{}.csv",
            self.config.base_url.trim_end_matches('/'),
            station_id
        )
    }
}

#[async_trait]
impl NormalsData for NormalsService {
    async fn station_normals(&self, station_id: &str) -> Result<Vec<DailyNormal>, Error> {
        let station_id = validate_station_id(station_id)?;
        let body = self
            .fetcher
            .fetch_text(
                &self.station_url(station_id),
                &[],
                &format!("normals for station {}", station_id),
            )
            .await?;
        debug!("normals body for {}: {} bytes", station_id, body.len());

        let records = parse_normals_csv(station_id, &body)?;
        info!("parsed {} normals for {}", records.len(), station_id);
        Ok(records)
    }
}

/// Station ids become part of the resource path, so only plain identifiers
/// (ASCII letters, digits, `-` and `_`) are accepted.
pub fn validate_station_id(station_id: &str) -> Result<&str, Error> {
    let station_id = station_id.trim();
    if station_id.is_empty() {
        return Err(Error::Validation("A station id is required.".to_owned()));
    }

    let valid = station_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(Error::Validation(format!(
            "Invalid station id: '{}'",
            station_id
        )));
    }
    Ok(station_id)
}

/// Run the normals pipeline: fetch, filter to `[start_date, end_date]`, summarize
pub async fn build_normals_report(
    source: &dyn NormalsData,
    station: &str,
    start_date: Option<&str>,
    end_date: Option<&str>,
) -> Result<NormalsReport, Error> {
    let station = validate_station_id(station)?;
    let start_date = validate_date_bound("startDate", start_date)?;
    let end_date = validate_date_bound("endDate", end_date)?;

    let all_records = source.station_normals(station).await?;
    let records = filter_by_date_range(&all_records, start_date, end_date);
    let summary = summarize_normals(&records);
    debug!(
        "kept {} of {} normals for {}",
        records.len(),
        all_records.len(),
        station
    );

    Ok(NormalsReport {
        station: station.to_owned(),
        start_date: start_date.map(str::to_owned),
        end_date: end_date.map(str::to_owned),
        records,
        summary,
    })
}
