use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("HTTP request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Unexpected page structure for {year}-{month:02}: {message}")]
    PageStructureError {
        year: i32,
        month: u32,
        message: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    PageFormat,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn page_structure(year: i32, month: u32, message: impl Into<String>) -> Self {
        EtlError::PageStructureError {
            year,
            month,
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::ValidationError { .. } => ErrorCategory::Configuration,
            EtlError::PageStructureError { .. } => ErrorCategory::PageFormat,
            EtlError::CsvError(_) | EtlError::IoError(_) => ErrorCategory::Output,
            EtlError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration
            | ErrorCategory::PageFormat
            | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check the network connection and that the JMA site is reachable, then rerun"
            }
            ErrorCategory::Configuration => {
                "Check --startDate/--endDate (YYYYMMDD), --csvPath and the settings file"
            }
            ErrorCategory::PageFormat => {
                "The page layout may have changed; check the station identifiers and the page in a browser"
            }
            ErrorCategory::Output => "Check that the output directory exists and is writable",
            ErrorCategory::Processing => "Rerun with RUST_LOG=jma_daily_etl=debug for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::ApiError(e) => match e.status() {
                Some(status) => format!("The weather page request failed with HTTP {}", status),
                None => "Could not download a weather page".to_string(),
            },
            EtlError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            EtlError::PageStructureError { year, month, .. } => {
                format!("Could not read the observation table for {}-{:02}", year, month)
            }
            EtlError::CsvError(_) | EtlError::IoError(_) => {
                "Could not write the output file".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
