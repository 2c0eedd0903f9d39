use crate::core::{ConfigProvider, ElementIds};
use crate::domain::model::{
    DEFAULT_BASE_URL, DEFAULT_RECIPES_PATH, DEFAULT_TOTAL_LABEL, DEFAULT_TOTAL_PATH,
};
use crate::utils::error::{PageError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    pub page: ElementIds,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub base_url: String,
    pub total_path: String,
    pub recipes_path: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            total_path: DEFAULT_TOTAL_PATH.to_string(),
            recipes_path: DEFAULT_RECIPES_PATH.to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub total_label: String,
    pub recipes_label: String,
    pub escape_markup: bool,
    pub strict_inputs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            total_label: DEFAULT_TOTAL_LABEL.to_string(),
            recipes_label: String::new(),
            escape_markup: false,
            strict_inputs: false,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PageError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PageError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CALORIE_API})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        let re = match Regex::new(r"\$\{([^}]+)\}") {
            Ok(re) => re,
            Err(_) => return content.to_string(),
        };

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    fn total_path(&self) -> &str {
        &self.endpoint.total_path
    }

    fn recipes_path(&self) -> &str {
        &self.endpoint.recipes_path
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.endpoint.timeout_seconds
    }

    fn element_ids(&self) -> &ElementIds {
        &self.page
    }

    fn total_label(&self) -> &str {
        &self.render.total_label
    }

    fn recipes_label(&self) -> &str {
        &self.render.recipes_label
    }

    fn escape_markup(&self) -> bool {
        self.render.escape_markup
    }

    fn strict_inputs(&self) -> bool {
        self.render.strict_inputs
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint.base_url", &self.endpoint.base_url)?;
        validation::validate_endpoint_path("endpoint.total_path", &self.endpoint.total_path)?;
        validation::validate_endpoint_path("endpoint.recipes_path", &self.endpoint.recipes_path)?;

        if let Some(timeout) = self.endpoint.timeout_seconds {
            validation::validate_positive_number("endpoint.timeout_seconds", timeout, 1)?;
        }

        let ids = &self.page;
        for (field, id) in [
            ("page.calorie1", &ids.calorie1),
            ("page.calorie2", &ids.calorie2),
            ("page.total", &ids.total),
            ("page.recipes", &ids.recipes),
        ] {
            validation::validate_non_empty_string(field, id)?;
        }

        Ok(())
    }
}
