use crate::domain::model::{CalorieInputs, ElementIds, TotalCalories};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 以元素 id 存取的頁面
pub trait Page: Send + Sync {
    fn read_value(&self, id: &str) -> impl std::future::Future<Output = Result<String>> + Send;
    fn set_markup(
        &self,
        id: &str,
        markup: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn total_path(&self) -> &str;
    fn recipes_path(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn element_ids(&self) -> &ElementIds;
    fn total_label(&self) -> &str;
    fn recipes_label(&self) -> &str;
    fn escape_markup(&self) -> bool;
    fn strict_inputs(&self) -> bool;
}

#[async_trait]
pub trait CalorieApi: Send + Sync {
    async fn list_of_calories(&self, inputs: &CalorieInputs) -> Result<TotalCalories>;
    async fn recipes(&self) -> Result<serde_json::Value>;
}
