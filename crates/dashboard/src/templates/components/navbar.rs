use maud::{html, Markup};

use crate::templates::layouts::CurrentPage;

/// Navigation between the forecast and normals pages
pub fn navbar(current_page: CurrentPage) -> Markup {
    html! {
        nav class="navbar mb-4" role="navigation" aria-label="main navigation" {
            div id="navbarMenu" class="navbar-menu is-active" {
                div class="navbar-start" {
                    a href="/" class=(nav_item_class(current_page, CurrentPage::Forecast)) {
                        span class="icon-text" {
                            span class="icon" { (forecast_icon()) }
                            span { "Forecast" }
                        }
                    }

                    a href="/normals" class=(nav_item_class(current_page, CurrentPage::Normals)) {
                        span class="icon-text" {
                            span class="icon" { (normals_icon()) }
                            span { "Climate Normals" }
                        }
                    }
                }
            }
        }
    }
}

fn nav_item_class(current: CurrentPage, page: CurrentPage) -> &'static str {
    if current == page {
        "navbar-item is-active"
    } else {
        "navbar-item"
    }
}

fn forecast_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z" {}
        }
    }
}

fn normals_icon() -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" {
            rect x="3" y="4" width="18" height="18" rx="2" ry="2" {}
            line x1="16" y1="2" x2="16" y2="6" {}
            line x1="8" y1="2" x2="8" y2="6" {}
            line x1="3" y1="10" x2="21" y2="10" {}
        }
    }
}
