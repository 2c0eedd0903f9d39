pub mod calorie_page;
pub mod renderer;

pub use crate::domain::model::{CalorieInputs, Element, ElementIds, TotalCalories};
pub use crate::domain::ports::{CalorieApi, ConfigProvider, Page};
pub use crate::utils::error::Result;
