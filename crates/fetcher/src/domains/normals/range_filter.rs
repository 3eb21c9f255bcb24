use crate::{DailyNormal, Error};

/// Width of a `YYYYMMDD` date string
const DATE_WIDTH: usize = 8;

/// Keep the records whose date falls within `[start, end]`, either bound optional.
///
/// Dates are compared as plain strings. That ordering only matches the
/// calendar when every date is a zero-padded, fixed-width digit string such
/// as `YYYYMMDD`; see [`validate_date_bound`] for the check applied to user
/// input. Input order is preserved.
pub fn filter_by_date_range(
    records: &[DailyNormal],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<DailyNormal> {
    records
        .iter()
        .filter(|r| start.map_or(true, |s| r.date.as_str() >= s))
        .filter(|r| end.map_or(true, |e| r.date.as_str() <= e))
        .cloned()
        .collect()
}

/// Normalize a user supplied range bound.
///
/// Empty or whitespace-only values count as "no bound"; anything else must be
/// exactly eight ASCII digits.
pub fn validate_date_bound<'a>(
    name: &str,
    value: Option<&'a str>,
) -> Result<Option<&'a str>, Error> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    if value.len() != DATE_WIDTH || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Validation(format!(
            "Invalid {}: '{}', expected YYYYMMDD",
            name, value
        )));
    }
    Ok(Some(value))
}
