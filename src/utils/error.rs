use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatusError { url: String, status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Page element not found: #{id}")]
    MissingElementError { id: String },

    #[error("Invalid input for {field}: '{value}' ({reason})")]
    InvalidInputError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Page,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PageError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PageError::ApiError(_) | PageError::HttpStatusError { .. } => ErrorCategory::Network,
            PageError::SerializationError(_) => ErrorCategory::Data,
            PageError::MissingElementError { .. } => ErrorCategory::Page,
            PageError::InvalidInputError { .. } => ErrorCategory::Input,
            PageError::UrlError(_)
            | PageError::ConfigValidationError { .. }
            | PageError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PageError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Page | ErrorCategory::Input => {
                ErrorSeverity::High
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PageError::ApiError(e) if e.is_timeout() => {
                "The calorie service did not answer in time".to_string()
            }
            PageError::ApiError(e) if e.is_connect() => {
                "Could not connect to the calorie service".to_string()
            }
            PageError::ApiError(_) => "Request to the calorie service failed".to_string(),
            PageError::HttpStatusError { status, .. } => {
                format!("The calorie service answered with HTTP {}", status)
            }
            PageError::SerializationError(_) => {
                "The calorie service returned data that is not valid JSON".to_string()
            }
            PageError::MissingElementError { id } => {
                format!("The page has no element with id '{}'", id)
            }
            PageError::InvalidInputError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the calorie service is running and reachable at the configured base URL",
            ErrorCategory::Data => "Check that the service returns JSON for the recipes endpoint",
            ErrorCategory::Page => "Check the element ids in the [page] section of the configuration",
            ErrorCategory::Input => "Enter calorie values as non-negative numbers",
            ErrorCategory::Configuration => "Review the command line flags or the TOML configuration file",
            ErrorCategory::System => "Check file permissions and that the configuration file exists",
        }
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
