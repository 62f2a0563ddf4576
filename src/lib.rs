pub mod error;
pub mod math;
pub mod mesh;

pub use error::{Result, SpherePeakError};
