// ==========================================
// 学生辍学风险评估 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 来源 (后者覆盖前者): 内置默认值 -> JSON 配置文件 -> 环境变量
// 存储: 内存 key-value (不落库)
// ==========================================

use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 环境变量前缀: DROPOUT_RISK_<KEY 大写>
pub const ENV_PREFIX: &str = "DROPOUT_RISK_";

/// 配置目录名 (位于系统配置目录下)
pub const CONFIG_DIR_NAME: &str = "student-dropout-risk";

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败 ({path}): {message}")]
    FileReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    FileFormatError { path: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建仅含内置默认值的 ConfigManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 标准加载流程: 默认配置文件(若存在) + 环境变量
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(default_config_path().as_deref(), std::env::vars())
    }

    /// 同 load, 配置文件无效时告警并退回内置默认值 + 环境变量
    pub fn load_or_default() -> Self {
        Self::load_from_or_default(default_config_path().as_deref(), std::env::vars())
    }

    /// 从指定配置文件(若存在)与环境变量加载
    pub fn load_from<I>(path: Option<&Path>, vars: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut manager = match path {
            Some(path) if path.exists() => Self::from_file(path)?,
            _ => Self::new(),
        };
        manager.apply_env_overrides(vars);
        Ok(manager)
    }

    fn load_from_or_default<I>(path: Option<&Path>, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        Self::load_from(path, vars.clone()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "加载配置失败，使用默认配置");
            let mut manager = Self::new();
            manager.apply_env_overrides(vars);
            manager
        })
    }

    /// 从 JSON 配置文件加载
    ///
    /// # 说明
    /// 文件内容为扁平 JSON 对象, 值可为字符串/数字/布尔
    /// 例如: {"batch_top_recommendations": 5, "locale": "zh-CN"}
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let parsed: HashMap<String, Value> =
            serde_json::from_str(&raw).map_err(|e| ConfigError::FileFormatError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let mut manager = Self::new();
        for (key, value) in parsed {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(ConfigError::FileFormatError {
                        path: path.display().to_string(),
                        message: format!("配置项 {} 的值类型不支持: {}", key, other),
                    })
                }
            };
            manager.values.insert(key, text);
        }

        tracing::info!(path = %path.display(), count = manager.values.len(), "配置文件已加载");
        Ok(manager)
    }

    /// 应用环境变量覆写
    ///
    /// 仅识别 config_keys 中声明的键, 其他变量忽略
    pub fn apply_env_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env_map: HashMap<String, String> = vars.into_iter().collect();
        for key in config_keys::ALL {
            let env_name = env_var_name(key);
            if let Some(value) = env_map.get(&env_name) {
                tracing::debug!(config_key = key, env = %env_name, "环境变量覆写配置");
                self.values.insert(key.to_string(), value.clone());
            }
        }
    }

    /// 设置配置值
    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// 读取配置值（公开方法，供其他模块复用）
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|s| s.as_str())
    }

    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_global_config_value(key)
            .unwrap_or(default)
            .to_string()
    }

    /// 解析正整数配置, 格式错误或为 0 时回退默认值
    fn get_positive_usize(&self, key: &str, default: usize) -> usize {
        let value = self.get_config_or_default(key, &default.to_string());
        match value.trim().parse::<usize>() {
            Ok(v) if v > 0 => v,
            _ => {
                tracing::warn!(config_key = key, raw_value = %value, default, "配置值无效，使用默认值");
                default
            }
        }
    }

    /// 获取所有显式配置的快照（JSON格式）
    pub fn get_config_snapshot(&self) -> String {
        json!(self.values).to_string()
    }

    // ===== 批量预测配置 =====

    /// 每名学生输出的建议条数（默认 3）
    pub fn get_batch_top_recommendations(&self) -> usize {
        self.get_positive_usize(config_keys::BATCH_TOP_RECOMMENDATIONS, 3)
    }

    /// 批量处理进度日志间隔（默认每 100 行）
    pub fn get_batch_progress_interval(&self) -> usize {
        self.get_positive_usize(config_keys::BATCH_PROGRESS_INTERVAL, 100)
    }

    /// 批量结果默认输出路径
    pub fn get_batch_output_path(&self) -> PathBuf {
        PathBuf::from(self.get_config_or_default(
            config_keys::BATCH_OUTPUT_PATH,
            "results/batch_predictions.json",
        ))
    }

    // ===== 国际化配置 =====

    /// 界面语言（"en" 或 "zh-CN"，默认 en）
    pub fn get_locale(&self) -> String {
        let default = crate::i18n::SUPPORTED_LOCALES[0];
        let value = self.get_config_or_default(config_keys::LOCALE, default);
        let value = value.trim();
        if crate::i18n::is_supported(value) {
            value.to_string()
        } else {
            tracing::warn!(config_key = config_keys::LOCALE, raw_value = %value, default, "不支持的语言，使用默认语言");
            default.to_string()
        }
    }
}

/// 默认配置文件路径: <系统配置目录>/student-dropout-risk/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.json"))
}

/// 配置键 -> 环境变量名
pub fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.to_uppercase())
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 批量预测
    pub const BATCH_TOP_RECOMMENDATIONS: &str = "batch_top_recommendations";
    pub const BATCH_PROGRESS_INTERVAL: &str = "batch_progress_interval";
    pub const BATCH_OUTPUT_PATH: &str = "batch_output_path";

    // 国际化
    pub const LOCALE: &str = "locale";

    pub const ALL: [&str; 4] = [
        BATCH_TOP_RECOMMENDATIONS,
        BATCH_PROGRESS_INTERVAL,
        BATCH_OUTPUT_PATH,
        LOCALE,
    ];
}
