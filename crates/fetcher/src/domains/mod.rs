pub mod forecasts;
pub mod normals;

pub use forecasts::*;
pub use normals::*;
