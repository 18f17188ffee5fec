use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 設定檔路徑的環境變數
pub const CONFIG_ENV_VAR: &str = "JMA_ETL_CONFIG";

pub const DEFAULT_ENDPOINT: &str = "http://www.data.jma.go.jp/obd/stats/etrn/view/daily_s1.php";
pub const DEFAULT_PREC_NO: &str = "44";
pub const DEFAULT_BLOCK_NO: &str = "47662";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub station: StationConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

/// 觀測站識別碼 (府県番号 / 地点番号)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub prec_no: String,
    pub block_no: String,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            prec_no: DEFAULT_PREC_NO.to_string(),
            block_no: DEFAULT_BLOCK_NO.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `JMA_ETL_CONFIG` 有設定時讀取該檔案，否則使用預設值
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::debug!("Loading settings from {}", path);
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${STATION_BLOCK})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> &str {
        self.monitoring.log_level.as_deref().unwrap_or("info")
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("source.endpoint", &self.source.endpoint)?;
        crate::utils::validation::validate_non_empty_string(
            "station.prec_no",
            &self.station.prec_no,
        )?;
        crate::utils::validation::validate_non_empty_string(
            "station.block_no",
            &self.station.block_no,
        )?;
        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_range("source.timeout_seconds", timeout, 1, 3600)?;
        }
        Ok(())
    }
}
