use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemError {
    #[error("No input file name was provided")]
    MissingInput,

    #[error("Input path is {length} bytes long, the limit is {max}")]
    PathTooLong { length: usize, max: usize },

    #[error("Input path is not valid text on this platform")]
    InvalidEncoding,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DemError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemError::MissingInput
            | DemError::PathTooLong { .. }
            | DemError::InvalidEncoding => ErrorCategory::Input,
            DemError::ConfigError { .. } | DemError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            DemError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Config => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit status for this error. Never zero.
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemError::MissingInput => {
                "Pass the input file as the first argument, or type its name at the prompt"
                    .to_string()
            }
            DemError::PathTooLong { max, .. } => format!(
                "Use a path of at most {} bytes, or raise --max-path-length (0 removes the limit)",
                max
            ),
            DemError::InvalidEncoding => {
                "Rename the file so its path is valid UTF-8".to_string()
            }
            DemError::IoError(_) => "Check that the terminal streams are open and readable".to_string(),
            DemError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            DemError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemError::MissingInput => "No input file name was given".to_string(),
            DemError::PathTooLong { length, max } => format!(
                "Input file path is too long ({} bytes, limit {})",
                length, max
            ),
            DemError::InvalidEncoding => "Input file path is not valid UTF-8".to_string(),
            DemError::IoError(e) => format!("Could not talk to the terminal: {}", e),
            DemError::ConfigError { message } => format!("Configuration problem: {}", message),
            DemError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid setting {} = '{}': {}", field, value, reason),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemError>;
