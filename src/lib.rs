pub mod config;
pub mod io;
pub mod math;

pub use config::{run, RunConfig};
pub use math::matrix::Matrix;
pub use math::power::{EigenEstimate, PowerIteration};
