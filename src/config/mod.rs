// ==========================================
// 学生辍学风险评估 - 配置层
// ==========================================
// 职责: 边界层配置 (批量预测、语言), 评分权重不可配置
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigError, ConfigManager, ConfigResult};
