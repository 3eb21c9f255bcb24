use maud::{html, Markup};

use crate::templates::layouts::{base, CurrentPage, PageConfig};

/// Climate normals page - station lookup with an optional date range
pub fn normals_page(api_base: &str) -> Markup {
    let config = PageConfig {
        title: "wxdash - Climate Normals",
        api_base,
        current_page: CurrentPage::Normals,
    };

    base(&config, normals_content())
}

pub fn normals_content() -> Markup {
    html! {
        div class="box" {
            h2 class="title is-5 mb-4" { "Daily Climate Normals" }

            form hx-get="/fragments/normals"
                 hx-target="#normals-results"
                 hx-swap="innerHTML"
                 hx-indicator="#normals-loading" {
                div class="field is-grouped is-grouped-multiline" {
                    div class="control is-expanded" {
                        input class="input" type="text" name="station"
                              placeholder="Station id, e.g. USW00014739" required;
                    }
                    div class="control" {
                        input class="input" type="text" name="startDate"
                              placeholder="Start (YYYYMMDD)" pattern="[0-9]{8}";
                    }
                    div class="control" {
                        input class="input" type="text" name="endDate"
                              placeholder="End (YYYYMMDD)" pattern="[0-9]{8}";
                    }
                    div class="control" {
                        button class="button is-primary" type="submit" { "Get Normals" }
                    }
                }
                p class="help" { "NOAA 1991-2020 normals cover one climatological year, dated 2000 (e.g. 20000101 to 20000131)." }
            }

            progress id="normals-loading" class="progress is-small is-primary htmx-indicator" max="100" {}

            div id="normals-results" class="mt-4" {}
        }
    }
}
