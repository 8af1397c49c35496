pub mod constants;
pub mod error;
pub mod impact;
pub mod io;
pub mod orbital;
pub mod physics;
pub mod types;

pub use constants::{constants, PhysicalConstants};
pub use error::{Error, Result};
pub use physics::Environment;
