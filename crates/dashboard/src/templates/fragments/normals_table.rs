use fetcher::{NormalsReport, NormalsSummary};
use maud::{html, Markup};

/// Summary cards followed by the filtered records
pub fn normals_report(report: &NormalsReport) -> Markup {
    html! {
        h3 class="title is-6 mb-3" {
            "Normals for " (report.station)
            @if let Some(start) = &report.start_date {
                " from " (start)
            }
            @if let Some(end) = &report.end_date {
                " through " (end)
            }
        }

        (normals_summary(&report.summary))

        @if report.records.is_empty() {
            div class="has-text-centered has-text-grey py-4" {
                p { "No records in the selected range." }
            }
        } @else {
            div class="table-container mt-4" {
                table class="table is-fullwidth is-striped is-hoverable is-narrow" {
                    thead {
                        tr {
                            th { "Date" }
                            th class="has-text-right" { "Mean" }
                            th class="has-text-right" { "Max" }
                            th class="has-text-right" { "Min" }
                            th class="has-text-right" { "Precip (in)" }
                        }
                    }
                    tbody {
                        @for record in &report.records {
                            tr {
                                td { (record.date) }
                                td class="has-text-right" { (temperature(record.mean_temp_f)) }
                                td class="has-text-right" { (temperature(record.max_temp_f)) }
                                td class="has-text-right" { (temperature(record.min_temp_f)) }
                                td class="has-text-right" {
                                    @if let Some(precip) = record.precip_in {
                                        (format!("{:.2}", precip))
                                    } @else {
                                        span class="has-text-grey" { "-" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn normals_summary(summary: &NormalsSummary) -> Markup {
    html! {
        div class="columns is-multiline is-mobile" {
            div class="column is-half-mobile is-one-quarter-tablet" {
                div class="box has-text-centered" {
                    div class="title is-5 mb-1" { (summary.count) }
                    div class="heading" { "Days" }
                }
            }
            div class="column is-half-mobile is-one-quarter-tablet" {
                div class="box has-text-centered" {
                    div class="title is-5 mb-1" { (temperature(summary.mean_of_mean_temp_f)) }
                    div class="heading" { "Mean of means" }
                }
            }
            div class="column is-half-mobile is-one-quarter-tablet" {
                div class="box has-text-centered" {
                    div class="title is-5 mb-1 has-text-info" { (temperature(summary.min_of_min_temp_f)) }
                    div class="heading" { "Lowest min" }
                }
            }
            div class="column is-half-mobile is-one-quarter-tablet" {
                div class="box has-text-centered" {
                    div class="title is-5 mb-1 has-text-danger" { (temperature(summary.max_of_max_temp_f)) }
                    div class="heading" { "Highest max" }
                }
            }
        }
    }
}

fn temperature(value: Option<f64>) -> Markup {
    html! {
        @if let Some(temp) = value {
            (format!("{:.1}°F", temp))
        } @else {
            span class="has-text-grey" { "-" }
        }
    }
}
