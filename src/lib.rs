// ==========================================
// 学生辍学风险评估 - 核心库
// ==========================================
// 核心: 规则评分引擎 (积分 -> 概率 -> 分级 -> 干预建议)
// 边界: 请求校验 / 预测响应 / 批量预测
// 系统定位: 决策支持 (干预由教师与辅导员决定)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 输入特征与评估结果
pub mod domain;

// 引擎层 - 评分规则
pub mod engine;

// 导入层 - 学生名册与批量预测
pub mod importer;

// 配置层 - 边界配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 请求/响应契约
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation, RiskTier};

// 领域实体
pub use domain::{RiskAssessment, ScoreBreakdown, StudentFeatures};

// 引擎
pub use engine::{DropoutPredictor, RiskEngine, ScoringModel};

// API
pub use api::{PredictApi, PredictionResponse};

// 批量预测
pub use importer::{BatchPredictor, BatchReport, BatchSummary};

/// 评估单个学生（使用规则引擎）
pub fn assess(features: &StudentFeatures) -> RiskAssessment {
    RiskEngine::new().assess(features)
}

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "学生辍学风险评估";
