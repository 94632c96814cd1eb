//! # Config 模块
//!
//! CLI 配置管理。
//!
//! ## 配置优先级
//!
//! 1. 命令行参数（最高）
//! 2. 配置文件 (bspec.json)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 输出格式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 单行 JSON
    Json,
    /// 缩进 JSON
    #[default]
    Pretty,
    /// Rust Debug 输出
    Debug,
}

/// CLI 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// 日志级别（trace/debug/info/warn/error）
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// `parse` 默认输出格式
    #[serde(default)]
    pub format: OutputFormat,

    /// `parse` 是否默认附带解析后的边距与 RGBA
    #[serde(default)]
    pub resolve: bool,

    /// `check` 默认检查目录
    #[serde(default = "default_check_dir")]
    pub check_dir: PathBuf,

    /// `check` 识别的文件扩展名（不含点）
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_check_dir() -> PathBuf {
    PathBuf::from("specs")
}

fn default_extensions() -> Vec<String> {
    ["json", "jsx", "tsx"].iter().map(|s| s.to_string()).collect()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: OutputFormat::default(),
            resolve: false,
            check_dir: default_check_dir(),
            extensions: default_extensions(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl CliConfig {
    /// 加载配置文件
    ///
    /// 文件不存在时静默使用默认配置；解析失败时打印警告并使用默认配置。
    /// 此时日志系统尚未初始化，警告直接写到 stderr。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("⚠️ 配置文件解析失败: {}，使用默认配置", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("⚠️ 配置文件读取失败: {}，使用默认配置", e);
                Self::default()
            }
        }
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "未知日志级别: {}（可选: {}）",
                self.log_level,
                LOG_LEVELS.join("/")
            )));
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "extensions 不能为空".to_string(),
            ));
        }

        Ok(())
    }

    /// 日志级别
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .parse()
            .unwrap_or(tracing::Level::INFO)
    }

    /// 文件扩展名是否在检查范围内（大小写不敏感）
    pub fn accepts_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// 配置错误
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// 验证失败
    #[error("配置验证失败: {0}")]
    ValidationFailed(String),
}
