use thiserror::Error;

#[derive(Error, Debug)]
pub enum HireError {
    #[error("Bicycle {id} not found")]
    NotFound { id: String },

    #[error("Bicycle {id} is already hired")]
    AlreadyHired { id: String },

    #[error("Bicycle {id} is not hired")]
    NotHired { id: String },

    #[error("Invalid menu choice: {input:?}")]
    InvalidMenuChoice { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 查無此車
    Lookup,
    /// 租借狀態不允許此操作
    State,
    /// 使用者輸入錯誤
    Input,
    Config,
    System,
}

impl HireError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            HireError::NotFound { .. } => ErrorCategory::Lookup,
            HireError::AlreadyHired { .. } | HireError::NotHired { .. } => ErrorCategory::State,
            HireError::InvalidMenuChoice { .. } => ErrorCategory::Input,
            HireError::TomlError(_)
            | HireError::ConfigError { .. }
            | HireError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            HireError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 可在選單迴圈內就地回報並繼續的錯誤
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Lookup | ErrorCategory::State | ErrorCategory::Input
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HireError::NotFound { id } => format!("Bicycle {} not found.", id),
            HireError::AlreadyHired { id } => format!("Bicycle {} is already hired.", id),
            HireError::NotHired { id } => format!("Bicycle {} is not hired.", id),
            HireError::InvalidMenuChoice { .. } => {
                "Invalid choice! Please enter a valid option.".to_string()
            }
            HireError::IoError(e) => format!("Console I/O failed: {}", e),
            HireError::TomlError(e) => format!("Fleet file is not valid TOML: {}", e),
            HireError::ConfigError { message } => format!("Configuration problem: {}", message),
            HireError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HireError::NotFound { .. } => "Choose option 3 to list the known bicycle IDs",
            HireError::AlreadyHired { .. } => "Pick another bicycle or return this one first",
            HireError::NotHired { .. } => "Only bicycles that are currently hired can be returned",
            HireError::InvalidMenuChoice { .. } => "Enter a number between 1 and 4",
            HireError::IoError(_) => "Check that the console input is still open",
            HireError::TomlError(_) | HireError::ConfigError { .. } => {
                "Check the fleet file syntax, e.g. [[bicycles]] with id and price_per_hour"
            }
            HireError::InvalidConfigValueError { .. } => {
                "Use unique, non-empty bicycle IDs and prices greater than zero"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HireError>;
