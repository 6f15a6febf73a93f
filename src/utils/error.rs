use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Server rejected the bearer token (401)")]
    Unauthorized,

    #[error("Session expired, logged out")]
    SessionExpired,

    #[error("API rejected the request: {message}")]
    ApiRejected { message: String },

    #[error("API responded with HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Order #{id} not found")]
    OrderNotFound { id: i64 },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Authentication,
    Api,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdminError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdminError::ApiError(_) | AdminError::HttpStatus { .. } => ErrorCategory::Network,
            AdminError::NotAuthenticated
            | AdminError::Unauthorized
            | AdminError::SessionExpired => ErrorCategory::Authentication,
            AdminError::ApiRejected { .. } | AdminError::OrderNotFound { .. } => {
                ErrorCategory::Api
            }
            AdminError::ConfigError { .. } | AdminError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AdminError::ValidationError { .. } => ErrorCategory::Input,
            AdminError::CsvError(_)
            | AdminError::IoError(_)
            | AdminError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Authentication | ErrorCategory::Api | ErrorCategory::Input => {
                ErrorSeverity::High
            }
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdminError::ApiError(_) | AdminError::HttpStatus { .. } => {
                "Check your network connection and the --api-url value, then retry"
            }
            AdminError::NotAuthenticated
            | AdminError::SessionExpired
            | AdminError::Unauthorized => "Run `laamsa-admin login` to open a new session",
            AdminError::ApiRejected { .. } => "Review the server message and the submitted values",
            AdminError::OrderNotFound { .. } => "Run `laamsa-admin list` to see existing order ids",
            AdminError::ConfigError { .. } | AdminError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            AdminError::ValidationError { .. } => "Check the command arguments",
            AdminError::CsvError(_)
            | AdminError::IoError(_)
            | AdminError::SerializationError(_) => {
                "Check file permissions and the session file location"
            }
        }
    }

    /// Short French message shown to the operator, matching the dashboard wording.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AdminError::ApiError(_) | AdminError::HttpStatus { .. } => {
                "Erreur de connexion au serveur".to_string()
            }
            AdminError::NotAuthenticated => "Vous n'êtes pas connecté".to_string(),
            AdminError::Unauthorized | AdminError::SessionExpired => {
                "Session expirée, veuillez vous reconnecter".to_string()
            }
            AdminError::ApiRejected { message } => message.clone(),
            AdminError::OrderNotFound { id } => format!("Commande #{} introuvable", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
