// ==========================================
// 学生辍学风险评估 - 领域模型层
// ==========================================
// 职责: 定义输入特征、输出评估、分类枚举
// 红线: 不含引擎逻辑, 不含 I/O
// ==========================================

pub mod risk;
pub mod student;
pub mod types;

// 重导出核心类型
pub use risk::{RiskAssessment, ScoreBreakdown};
pub use student::StudentFeatures;
pub use types::{BehavioralIssues, FamilyIncome, ParentalEducation, RiskTier};
