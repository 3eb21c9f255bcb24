use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of a station's daily normals file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyNormal {
    pub station_id: String,
    /// YYYYMMDD
    #[schema(example = "20200115")]
    pub date: String,
    pub mean_temp_f: Option<f64>,
    pub max_temp_f: Option<f64>,
    pub min_temp_f: Option<f64>,
    pub precip_in: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalsSummary {
    /// Number of records summarized, including those with missing values
    pub count: usize,
    pub mean_of_mean_temp_f: Option<f64>,
    pub min_of_min_temp_f: Option<f64>,
    pub max_of_max_temp_f: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NormalsReport {
    pub station: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub records: Vec<DailyNormal>,
    pub summary: NormalsSummary,
}
