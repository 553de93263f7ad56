//! Fixed-dimension numeric vectors with elementwise arithmetic, Euclidean geometry and
//! minimum-image differences for periodic domains.

pub mod error;
pub mod periodic;
pub mod sim;
pub mod vector;

pub use error::{Result, VectorError};
pub use periodic::PeriodicBox;
pub use vector::Vector;
