pub mod error;
pub mod forecast;
pub mod normals;

pub use error::{ApiError, ErrorResponse};
pub use forecast::{forecast, parse_days, ForecastQuery};
pub use normals::{normals, NormalsQuery};
