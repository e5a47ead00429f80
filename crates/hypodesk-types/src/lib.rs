pub mod domain;
pub mod error;
mod util;
pub mod wire;

pub use domain::*;
pub use error::{Error, Result};
pub use util::*;
