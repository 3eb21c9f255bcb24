use fetcher::MAX_FORECAST_DAYS;
use maud::{html, Markup};

use crate::templates::layouts::{base, CurrentPage, PageConfig};

/// Forecast page - city search with per-day summaries
pub fn forecast_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "wxdash - Forecast",
        api_base,
        current_page: CurrentPage::Forecast,
    };

    base(&config, forecast_content())
}

pub fn forecast_content() -> Markup {
    html! {
        div class="box" {
            h2 class="title is-5 mb-4" { "Daily Forecast" }

            form hx-get="/fragments/forecast"
                 hx-target="#forecast-results"
                 hx-swap="innerHTML"
                 hx-indicator="#forecast-loading" {
                div class="field is-grouped is-grouped-multiline" {
                    div class="control is-expanded" {
                        input class="input" type="text" name="city"
                              placeholder="City, e.g. Boston or Paris,FR" required;
                    }
                    div class="control" {
                        div class="select" {
                            select name="days" {
                                @for days in 1..=MAX_FORECAST_DAYS {
                                    option value=(days) selected[days == MAX_FORECAST_DAYS] {
                                        (days) @if days == 1 { " day" } @else { " days" }
                                    }
                                }
                            }
                        }
                    }
                    div class="control" {
                        button class="button is-primary" type="submit" { "Get Forecast" }
                    }
                }
            }

            progress id="forecast-loading" class="progress is-small is-primary htmx-indicator" max="100" {}

            div id="forecast-results" class="mt-4" {}
        }
    }
}
