use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TOTAL_PATH: &str = "/list-of-calories";
pub const DEFAULT_RECIPES_PATH: &str = "/recipes";
pub const DEFAULT_TOTAL_LABEL: &str = "Total amount of calories: ";

/// 兩個輸入框的原始內容，不做任何型別轉換
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieInputs {
    pub first: String,
    pub second: String,
}

impl CalorieInputs {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn values(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

/// `/list-of-calories` 回傳的內容，保持原樣
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalCalories(pub String);

impl TotalCalories {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub markup: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub calorie1: String,
    pub calorie2: String,
    pub total: String,
    pub recipes: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            calorie1: "calorie1".to_string(),
            calorie2: "calorie2".to_string(),
            total: "total".to_string(),
            recipes: "recipes".to_string(),
        }
    }
}

impl ElementIds {
    pub fn all(&self) -> [&str; 4] {
        [&self.calorie1, &self.calorie2, &self.total, &self.recipes]
    }
}
