use crate::{DailyNormal, NormalsSummary};

/// Aggregate a set of normals: mean of means, min of mins, max of maxes.
///
/// `count` is the number of records, not the number of values present.
/// An aggregate is `None` when no record carries that field.
pub fn summarize_normals(records: &[DailyNormal]) -> NormalsSummary {
    let means: Vec<f64> = records.iter().filter_map(|r| r.mean_temp_f).collect();
    let mean_of_mean_temp_f = if means.is_empty() {
        None
    } else {
        Some(means.iter().sum::<f64>() / means.len() as f64)
    };

    NormalsSummary {
        count: records.len(),
        mean_of_mean_temp_f,
        min_of_min_temp_f: records.iter().filter_map(|r| r.min_temp_f).reduce(f64::min),
        max_of_max_temp_f: records.iter().filter_map(|r| r.max_temp_f).reduce(f64::max),
    }
}
