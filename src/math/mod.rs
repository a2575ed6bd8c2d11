//! Mathematical utilities: least-squares trend fitting and scalar statistics.

pub mod ols;
pub mod stats;

pub use ols::*;
pub use stats::*;
