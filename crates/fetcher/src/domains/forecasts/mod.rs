mod aggregate;
mod daily_forecast;
mod models;

pub use aggregate::*;
pub use daily_forecast::*;
pub use models::*;
