// ==========================================
// 学生辍学风险评估 - 引擎层
// ==========================================
// 职责: 实现风险评分规则, 不做 I/O
// 红线: 引擎永不失败, 校验由调用边界完成
// ==========================================

pub mod risk;
pub mod strategy;

// 重导出核心引擎
pub use risk::{RecommendationRule, RiskEngine, RECOMMENDATION_RULES};
pub use strategy::{DropoutPredictor, ScoringModel};
