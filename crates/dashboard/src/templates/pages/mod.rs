pub mod forecast;
pub mod normals;

pub use forecast::forecast_page;
pub use normals::normals_page;
