mod csv_parser;
mod daily_normals;
mod models;
mod range_filter;
mod summary;

pub use csv_parser::*;
pub use daily_normals::*;
pub use models::*;
pub use range_filter::*;
pub use summary::*;
