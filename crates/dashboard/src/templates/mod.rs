pub mod components;
pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{error_notification, forecast_table, normals_report};
pub use layouts::{CurrentPage, PageConfig};
pub use pages::{forecast_page, normals_page};
