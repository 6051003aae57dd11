pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ManualClock, SystemClock};
pub use app::menu::{MenuChoice, MenuOutcome, MenuSession};
pub use config::FleetConfig;
pub use core::{hire::HireDesk, registry::FleetRegistry};
pub use utils::error::{HireError, Result};
