mod forecast_table;
mod normals_table;
mod notification;

pub use forecast_table::forecast_table;
pub use normals_table::{normals_report, normals_summary};
pub use notification::error_notification;
