pub mod hire;
pub mod registry;

pub use crate::domain::model::{Bicycle, BicycleSeed, HireReceipt, HireState, RateEntry};
pub use crate::domain::ports::Clock;
pub use crate::utils::error::Result;
