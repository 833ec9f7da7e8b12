pub mod calculations;
pub mod models;

pub use calculations::{MAX_GROSS_SALARY, compute};
pub use models::*;
