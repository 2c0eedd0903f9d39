pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};
pub use config::TomlConfig;

pub use adapters::{HttpCalorieApi, MemoryPage};
pub use crate::core::{calorie_page::CaloriePage, CalorieInputs, ElementIds, TotalCalories};
pub use utils::error::{PageError, Result};
