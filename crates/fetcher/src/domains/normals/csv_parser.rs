use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use crate::{DailyNormal, Error};

/// Column layout of a plain normals file: date, mean, max, min, precip
const DATE_COLUMN: usize = 0;
const MEAN_COLUMN: usize = 1;
const MAX_COLUMN: usize = 2;
const MIN_COLUMN: usize = 3;
const PRECIP_COLUMN: usize = 4;

/// NOAA daily normals describe a climatological year; month-day dates are
/// stamped onto a leap year so Feb 29 survives and YYYYMMDD bounds still apply
const NOAA_ANCHOR_YEAR: &str = "2000";
const NOAA_TRACE: f64 = -7777.0;
const NOAA_MISSING: [f64; 4] = [-9999.0, -8888.0, -6666.0, -5555.0];

/// A row of NOAA's 1991-2020 `normals-daily/access/<station>.csv` files,
/// picked out by header name
#[derive(Debug, Deserialize)]
struct NoaaNormalsRow {
    #[serde(rename = "DATE", default)]
    date: String,
    #[serde(rename = "DLY-TAVG-NORMAL", default)]
    mean: Option<String>,
    #[serde(rename = "DLY-TMAX-NORMAL", default)]
    max: Option<String>,
    #[serde(rename = "DLY-TMIN-NORMAL", default)]
    min: Option<String>,
    #[serde(rename = "DLY-PRCP-NORMAL", default)]
    precip: Option<String>,
}

enum Layout {
    Positional,
    Noaa(StringRecord),
}

/// Parse the body of a station's normals csv.
///
/// Blank lines are dropped and the first remaining line is skipped when it
/// names a date column. A header carrying NOAA's `DATE` and `DLY-*-NORMAL`
/// columns switches to lookup by name; anything else is read by position.
/// Cells that are missing, non-numeric or non-finite become `None`; a bad
/// cell never rejects its row.
pub fn parse_normals_csv(station_id: &str, body: &str) -> Result<Vec<DailyNormal>, Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut records = Vec::new();
    let mut layout = None;
    for row in reader.records() {
        let row = row?;
        if is_blank(&row) {
            continue;
        }

        if layout.is_none() {
            let skip = is_header(&row);
            layout = Some(if is_noaa_header(&row) {
                Layout::Noaa(row.clone())
            } else {
                Layout::Positional
            });
            if skip {
                continue;
            }
        }

        let record = match &layout {
            Some(Layout::Noaa(header)) => noaa_row(station_id, &row, header)?,
            _ => positional_row(station_id, &row),
        };
        records.push(record);
    }

    Ok(records)
}

fn positional_row(station_id: &str, row: &StringRecord) -> DailyNormal {
    DailyNormal {
        station_id: station_id.to_owned(),
        date: row.get(DATE_COLUMN).unwrap_or_default().to_owned(),
        mean_temp_f: parse_value(row.get(MEAN_COLUMN)),
        max_temp_f: parse_value(row.get(MAX_COLUMN)),
        min_temp_f: parse_value(row.get(MIN_COLUMN)),
        precip_in: parse_value(row.get(PRECIP_COLUMN)),
    }
}

fn noaa_row(
    station_id: &str,
    row: &StringRecord,
    header: &StringRecord,
) -> Result<DailyNormal, Error> {
    let row: NoaaNormalsRow = row.deserialize(Some(header))?;

    Ok(DailyNormal {
        station_id: station_id.to_owned(),
        date: noaa_date(&row.date),
        mean_temp_f: noaa_value(row.mean.as_deref()),
        max_temp_f: noaa_value(row.max.as_deref()),
        min_temp_f: noaa_value(row.min.as_deref()),
        precip_in: noaa_value(row.precip.as_deref()),
    })
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(str::is_empty)
}

fn is_header(row: &StringRecord) -> bool {
    row.iter().any(|field| field.to_ascii_lowercase().contains("date"))
}

fn is_noaa_header(row: &StringRecord) -> bool {
    let has = |name: &str| row.iter().any(|field| field == name);
    has("DATE") && has("DLY-TAVG-NORMAL")
}

/// `MM-DD` becomes `2000MMDD`; any other shape is kept as written
fn noaa_date(date: &str) -> String {
    match date.split_once('-') {
        Some((month, day))
            if month.len() == 2
                && day.len() == 2
                && month.bytes().chain(day.bytes()).all(|b| b.is_ascii_digit()) =>
        {
            format!("{}{}{}", NOAA_ANCHOR_YEAR, month, day)
        }
        _ => date.to_owned(),
    }
}

fn noaa_value(field: Option<&str>) -> Option<f64> {
    match parse_value(field) {
        Some(v) if v == NOAA_TRACE => Some(0.0),
        Some(v) if NOAA_MISSING.contains(&v) => None,
        other => other,
    }
}

fn parse_value(field: Option<&str>) -> Option<f64> {
    field
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
