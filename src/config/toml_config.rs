use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_GREETING: &str = "hello world ";
pub const DEFAULT_ARRAY_COUNT: usize = 5;
pub const DEFAULT_WORKER_COUNT: usize = 4;
pub const DEFAULT_WORK_DURATION_MS: u64 = 2000;
pub const DEFAULT_BAKE_MS: u64 = 2000;
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1;

pub const MAX_ARRAY_COUNT: usize = 1024;
pub const MAX_WORKER_COUNT: usize = 1024;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillsConfig {
    pub server: ServerConfig,
    pub array: ArrayConfig,
    pub workers: WorkersConfig,
    pub bakery: BakeryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub greeting: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub count: usize,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ARRAY_COUNT,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkersConfig {
    pub count: usize,
    pub duration_ms: u64,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_WORKER_COUNT,
            duration_ms: DEFAULT_WORK_DURATION_MS,
        }
    }
}

impl WorkersConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeryConfig {
    pub bake_ms: u64,
    pub capacity: usize,
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            bake_ms: DEFAULT_BAKE_MS,
            capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl BakeryConfig {
    pub fn bake_duration(&self) -> Duration {
        Duration::from_millis(self.bake_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    pub verbose: bool,
}

impl DrillsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("env var pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_host("server.host", &self.server.host)?;
        validation::validate_non_empty_string("server.greeting", &self.server.greeting)?;
        validation::validate_range("array.count", self.array.count, 1, MAX_ARRAY_COUNT)?;
        validation::validate_range("workers.count", self.workers.count, 1, MAX_WORKER_COUNT)?;
        validation::validate_positive_number("bakery.capacity", self.bakery.capacity, 1)?;
        Ok(())
    }
}

impl Validate for DrillsConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
