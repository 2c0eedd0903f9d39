use crate::adapters::HttpCalorieApi;
use crate::core::renderer;
use crate::core::{CalorieApi, CalorieInputs, ConfigProvider, Page, TotalCalories};
use crate::utils::error::Result;
use crate::utils::validation::validate_calorie_value;

/// Wires the page, the calorie service and the renderers together.
///
/// Every operation reads what it needs at call time and overwrites its
/// target element when the response arrives, so with overlapping calls the
/// response that completes last is the one left on the page.
pub struct CaloriePage<P: Page, C: ConfigProvider, A: CalorieApi = HttpCalorieApi> {
    page: P,
    config: C,
    api: A,
}

impl<P: Page, C: ConfigProvider> CaloriePage<P, C, HttpCalorieApi> {
    pub fn new(page: P, config: C) -> Result<Self> {
        let api = HttpCalorieApi::new(&config)?;
        Ok(Self::with_api(page, config, api))
    }
}

impl<P: Page, C: ConfigProvider, A: CalorieApi> CaloriePage<P, C, A> {
    pub fn with_api(page: P, config: C, api: A) -> Self {
        Self { page, config, api }
    }

    /// 讀取兩個輸入框。預設原樣送出；嚴格模式下先檢查數值，並送出去除空白後的值
    pub async fn read_inputs(&self) -> Result<CalorieInputs> {
        let ids = self.config.element_ids();
        let first = self.page.read_value(&ids.calorie1).await?;
        let second = self.page.read_value(&ids.calorie2).await?;

        if self.config.strict_inputs() {
            validate_calorie_value(&ids.calorie1, &first)?;
            validate_calorie_value(&ids.calorie2, &second)?;
            return Ok(CalorieInputs::new(first.trim(), second.trim()));
        }

        Ok(CalorieInputs { first, second })
    }

    pub async fn get_total_calories(&self) -> Result<TotalCalories> {
        let inputs = self.read_inputs().await?;
        self.total_calories_for(&inputs).await
    }

    /// Requests the total for already-read inputs and renders it.
    pub async fn total_calories_for(&self, inputs: &CalorieInputs) -> Result<TotalCalories> {
        let total = self.api.list_of_calories(inputs).await?;
        self.display_total_calories(&total).await?;
        Ok(total)
    }

    pub async fn get_recipes(&self) -> Result<serde_json::Value> {
        let recipes = self.api.recipes().await?;
        self.display_recipes(&recipes).await?;
        Ok(recipes)
    }

    pub async fn display_total_calories(&self, total: &TotalCalories) -> Result<()> {
        let markup = renderer::total_markup(
            self.config.total_label(),
            total,
            self.config.escape_markup(),
        );
        self.page
            .set_markup(&self.config.element_ids().total, &markup)
            .await?;
        tracing::info!("Rendered total: {}", markup);
        Ok(())
    }

    pub async fn display_recipes(&self, recipes: &serde_json::Value) -> Result<()> {
        let markup = renderer::recipes_markup(
            self.config.recipes_label(),
            recipes,
            self.config.escape_markup(),
        );
        self.page
            .set_markup(&self.config.element_ids().recipes, &markup)
            .await?;
        tracing::info!("Rendered recipes ({} bytes of markup)", markup.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryPage;
    use crate::config::TomlConfig;
    use crate::core::ElementIds;
    use crate::utils::error::PageError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockApi {
        requests: Arc<Mutex<Vec<CalorieInputs>>>,
        recipes_calls: Arc<Mutex<usize>>,
        fail: bool,
    }

    impl MockApi {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait::async_trait]
    impl CalorieApi for MockApi {
        async fn list_of_calories(&self, inputs: &CalorieInputs) -> Result<TotalCalories> {
            self.requests.lock().await.push(inputs.clone());
            if self.fail {
                return Err(PageError::HttpStatusError {
                    url: "http://test/list-of-calories".to_string(),
                    status: 502,
                });
            }
            let sum: i64 = inputs
                .values()
                .iter()
                .map(|v| v.parse::<i64>().unwrap_or(0))
                .sum();
            Ok(TotalCalories(sum.to_string()))
        }

        async fn recipes(&self) -> Result<serde_json::Value> {
            *self.recipes_calls.lock().await += 1;
            Ok(serde_json::json!(["Soup", "Salad"]))
        }
    }

    fn test_config(extra: &str) -> TomlConfig {
        TomlConfig::from_toml_str(&format!(
            r#"
[endpoint]
base_url = "http://test"
{}
"#,
            extra
        ))
        .unwrap()
    }

    async fn seeded_page(first: &str, second: &str) -> MemoryPage {
        let page = MemoryPage::standard(&ElementIds::default());
        page.set_value("calorie1", first).await.unwrap();
        page.set_value("calorie2", second).await.unwrap();
        page
    }

    #[tokio::test]
    async fn test_get_total_calories_renders_label_and_total() {
        let page = seeded_page("100", "250").await;
        let api = MockApi::default();
        let controller = CaloriePage::with_api(page.clone(), test_config(""), api.clone());

        let total = controller.get_total_calories().await.unwrap();

        assert_eq!(total.as_str(), "350");
        assert_eq!(
            page.markup("total").await.as_deref(),
            Some("Total amount of calories: 350")
        );
        assert_eq!(
            *api.requests.lock().await,
            vec![CalorieInputs::new("100", "250")]
        );
    }

    #[tokio::test]
    async fn test_inputs_pass_through_untouched_by_default() {
        let page = seeded_page(" 12 ", "abc").await;
        let api = MockApi::default();
        let controller = CaloriePage::with_api(page, test_config(""), api.clone());

        controller.get_total_calories().await.unwrap();

        assert_eq!(
            *api.requests.lock().await,
            vec![CalorieInputs::new(" 12 ", "abc")]
        );
    }

    #[tokio::test]
    async fn test_strict_inputs_reject_before_request() {
        let page = seeded_page("100", "lots").await;
        let api = MockApi::default();
        let config = test_config("[render]\nstrict_inputs = true");
        let controller = CaloriePage::with_api(page.clone(), config, api.clone());

        let result = controller.get_total_calories().await;

        assert!(matches!(
            result,
            Err(PageError::InvalidInputError { ref field, .. }) if field == "calorie2"
        ));
        assert!(api.requests.lock().await.is_empty());
        assert_eq!(page.markup("total").await.as_deref(), Some(""));
    }

    #[tokio::test]
    async fn test_strict_inputs_send_trimmed_values() {
        let page = seeded_page(" 100", "250 ").await;
        let api = MockApi::default();
        let config = test_config("[render]\nstrict_inputs = true");
        let controller = CaloriePage::with_api(page.clone(), config, api.clone());

        controller.get_total_calories().await.unwrap();

        assert_eq!(
            *api.requests.lock().await,
            vec![CalorieInputs::new("100", "250")]
        );
        assert_eq!(
            page.markup("total").await.as_deref(),
            Some("Total amount of calories: 350")
        );
    }

    #[tokio::test]
    async fn test_failed_request_leaves_total_untouched() {
        let page = seeded_page("1", "2").await;
        page.set_markup("total", "Total amount of calories: 7")
            .await
            .unwrap();
        let controller = CaloriePage::with_api(page.clone(), test_config(""), MockApi::failing());

        let result = controller.get_total_calories().await;

        assert!(result.is_err());
        assert_eq!(
            page.markup("total").await.as_deref(),
            Some("Total amount of calories: 7")
        );
    }

    #[tokio::test]
    async fn test_missing_input_element() {
        let page = MemoryPage::with_elements(["calorie1", "total"]);
        let api = MockApi::default();
        let controller = CaloriePage::with_api(page, test_config(""), api.clone());

        let result = controller.get_total_calories().await;

        assert!(matches!(
            result,
            Err(PageError::MissingElementError { ref id }) if id == "calorie2"
        ));
        assert!(api.requests.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_recipes_renders_coerced_value() {
        let page = MemoryPage::standard(&ElementIds::default());
        let controller = CaloriePage::with_api(page.clone(), test_config(""), MockApi::default());

        controller.get_recipes().await.unwrap();

        assert_eq!(page.markup("recipes").await.as_deref(), Some("Soup,Salad"));
    }

    #[tokio::test]
    async fn test_custom_ids_and_labels() {
        let page = MemoryPage::with_elements(["a", "b", "sum", "list"]);
        page.set_value("a", "5").await.unwrap();
        page.set_value("b", "6").await.unwrap();
        let config = test_config(
            r#"
[page]
calorie1 = "a"
calorie2 = "b"
total = "sum"
recipes = "list"

[render]
total_label = "Sum: "
recipes_label = "Recipes: "
"#,
        );
        let controller = CaloriePage::with_api(page.clone(), config, MockApi::default());

        controller.get_total_calories().await.unwrap();
        controller.get_recipes().await.unwrap();

        assert_eq!(page.markup("sum").await.as_deref(), Some("Sum: 11"));
        assert_eq!(
            page.markup("list").await.as_deref(),
            Some("Recipes: Soup,Salad")
        );
    }

    #[tokio::test]
    async fn test_construction_makes_no_requests() {
        let api = MockApi::default();
        let _controller = CaloriePage::with_api(
            MemoryPage::standard(&ElementIds::default()),
            test_config(""),
            api.clone(),
        );

        assert!(api.requests.lock().await.is_empty());
        assert_eq!(*api.recipes_calls.lock().await, 0);
    }
}
