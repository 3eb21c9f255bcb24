use fetcher::ForecastReport;
use maud::{html, Markup};

/// Per-day forecast table, swapped into the forecast page by HTMX
pub fn forecast_table(report: &ForecastReport) -> Markup {
    html! {
        @if report.days.is_empty() {
            div class="has-text-centered has-text-grey py-4" {
                p { "No forecast data available for " (report.city) "." }
            }
        } @else {
            h3 class="title is-6 mb-3" { "Forecast for " (report.city) }
            div class="table-container" {
                table class="table is-fullwidth is-striped is-hoverable" {
                    thead {
                        tr {
                            th { "Date" }
                            th class="has-text-right" { "Avg Temp" }
                            th class="has-text-right" { "Precip Chance" }
                        }
                    }
                    tbody {
                        @for day in &report.days {
                            tr {
                                td { (day.date) }
                                td class="has-text-right" {
                                    span class="has-text-weight-semibold" { (day.avg_temp) "°F" }
                                }
                                td class="has-text-right" {
                                    span class="has-text-info" { (day.pop) "%" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
