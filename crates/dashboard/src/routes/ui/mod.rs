mod fragments;
mod pages;

pub use fragments::{forecast_fragment_handler, normals_fragment_handler};
pub use pages::{forecast_page_handler, normals_page_handler};
