use crate::{DailyForecastSummary, Error, ForecastEntry};

/// Upper bound of the provider's forecast horizon in days
pub const MAX_FORECAST_DAYS: usize = 5;

pub fn validate_city(city: &str) -> Result<&str, Error> {
    let city = city.trim();
    if city.is_empty() {
        return Err(Error::Validation("Please enter a city name.".to_owned()));
    }
    Ok(city)
}

pub fn validate_days(days: usize) -> Result<usize, Error> {
    if !(1..=MAX_FORECAST_DAYS).contains(&days) {
        return Err(Error::Validation(format!(
            "Number of days must be between 1 and {}.",
            MAX_FORECAST_DAYS
        )));
    }
    Ok(days)
}

/// Group forecast slots by calendar date and summarize the first `days` dates.
///
/// Dates are taken in the order the provider returned them, not sorted.
/// Slots for a selected date are included even when they appear after a
/// later date in the input.
pub fn summarize_by_day(entries: &[ForecastEntry], days: usize) -> Vec<DailyForecastSummary> {
    let mut groups: Vec<(&str, Vec<&ForecastEntry>)> = Vec::new();
    for entry in entries {
        let date = entry.date();
        match groups.iter_mut().find(|(d, _)| *d == date) {
            Some((_, members)) => members.push(entry),
            None => groups.push((date, vec![entry])),
        }
    }

    groups
        .into_iter()
        .take(days)
        .map(|(date, members)| summarize_day(date, &members))
        .collect()
}

fn summarize_day(date: &str, members: &[&ForecastEntry]) -> DailyForecastSummary {
    let temps: Vec<f64> = members.iter().map(|e| e.temp_f).collect();
    let pops: Vec<f64> = members.iter().filter_map(|e| e.pop).collect();

    let avg_temp = mean(&temps).unwrap_or_default();
    let avg_pop = mean(&pops).unwrap_or_default();

    DailyForecastSummary {
        date: date.to_owned(),
        avg_temp: format!("{:.1}", avg_temp),
        pop: (avg_pop * 100.0).round().clamp(0.0, 100.0) as u8,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
