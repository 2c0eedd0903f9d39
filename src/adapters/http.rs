use crate::core::{CalorieApi, CalorieInputs, ConfigProvider, TotalCalories};
use crate::utils::error::{PageError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// `CalorieApi` backed by the local calorie service.
///
/// Construction performs no I/O; a request is only sent when one of the
/// trait methods is awaited.
#[derive(Debug, Clone)]
pub struct HttpCalorieApi {
    client: Client,
    total_url: Url,
    recipes_url: Url,
}

impl HttpCalorieApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        Ok(Self {
            client: builder.build()?,
            total_url: endpoint_url(config.base_url(), config.total_path())?,
            recipes_url: endpoint_url(config.base_url(), config.recipes_path())?,
        })
    }

    /// 組出 `?calories=<v1>&calories=<v2>` 形式的請求網址
    pub fn total_url(&self, inputs: &CalorieInputs) -> Url {
        let mut url = self.total_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for value in inputs.values() {
                pairs.append_pair("calories", value);
            }
        }
        url
    }

    pub fn recipes_url(&self) -> &Url {
        &self.recipes_url
    }

    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(PageError::HttpStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> Result<Url> {
    let joined = format!("{}{}", base_url.trim_end_matches('/'), path);
    Ok(Url::parse(&joined)?)
}

#[async_trait]
impl CalorieApi for HttpCalorieApi {
    async fn list_of_calories(&self, inputs: &CalorieInputs) -> Result<TotalCalories> {
        let response = self.get(self.total_url(inputs)).await?;
        let body = response.text().await?;
        Ok(TotalCalories(body))
    }

    async fn recipes(&self) -> Result<serde_json::Value> {
        let response = self.get(self.recipes_url.clone()).await?;
        let body = response.text().await?;
        let value = serde_json::from_str(&body)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TomlConfig;
    use httpmock::prelude::*;

    fn config_for(base_url: &str) -> TomlConfig {
        TomlConfig::from_toml_str(&format!(
            r#"
[endpoint]
base_url = "{}"
"#,
            base_url
        ))
        .unwrap()
    }

    #[test]
    fn test_total_url_repeats_calories_parameter() {
        let api = HttpCalorieApi::new(&config_for("http://localhost:9000")).unwrap();

        let url = api.total_url(&CalorieInputs::new("100", "250"));

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/list-of-calories?calories=100&calories=250"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_url() {
        let api = HttpCalorieApi::new(&config_for("http://localhost:9000/")).unwrap();

        assert_eq!(api.recipes_url().as_str(), "http://localhost:9000/recipes");
    }

    #[test]
    fn test_total_url_encodes_values() {
        let api = HttpCalorieApi::new(&config_for("http://localhost:9000")).unwrap();

        let url = api.total_url(&CalorieInputs::new("1&x=2", "3"));

        assert_eq!(
            url.as_str(),
            "http://localhost:9000/list-of-calories?calories=1%26x%3D2&calories=3"
        );
    }

    #[tokio::test]
    async fn test_list_of_calories_returns_raw_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/list-of-calories")
                .query_param("calories", "100")
                .query_param("calories", "250");
            then.status(200).body("350");
        });

        let api = HttpCalorieApi::new(&config_for(&server.base_url())).unwrap();
        let total = api
            .list_of_calories(&CalorieInputs::new("100", "250"))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(total, TotalCalories("350".to_string()));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/list-of-calories");
            then.status(500).body("boom");
        });

        let api = HttpCalorieApi::new(&config_for(&server.base_url())).unwrap();
        let result = api.list_of_calories(&CalorieInputs::new("1", "2")).await;

        api_mock.assert();
        assert!(matches!(
            result,
            Err(PageError::HttpStatusError { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_recipes_parses_json() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!(["A", "B"]));
        });

        let api = HttpCalorieApi::new(&config_for(&server.base_url())).unwrap();
        let value = api.recipes().await.unwrap();

        api_mock.assert();
        assert_eq!(value, serde_json::json!(["A", "B"]));
    }

    #[tokio::test]
    async fn test_recipes_malformed_json() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/recipes");
            then.status(200).body("<ul><li>A</li></ul>");
        });

        let api = HttpCalorieApi::new(&config_for(&server.base_url())).unwrap();
        let result = api.recipes().await;

        assert!(matches!(result, Err(PageError::SerializationError(_))));
    }
}
