use maud::{html, Markup};

pub fn error_notification(message: &str) -> Markup {
    html! {
        div class="notification is-danger is-light" role="alert" {
            (message)
        }
    }
}
