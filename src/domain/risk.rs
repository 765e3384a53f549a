// ==========================================
// 学生辍学风险评估 - 风险评估领域模型
// ==========================================
// 用途: 评分引擎输出, 每次调用新建, 无身份/生命周期
// ==========================================

use crate::domain::types::RiskTier;
use serde::{Deserialize, Serialize};

// ==========================================
// RiskAssessment - 风险评估结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: u32,              // 原始积分 (权重表保证 <= 100)
    pub probability: f64,             // 归一化概率 [0, 0.95]
    pub risk_tier: RiskTier,          // 风险等级
    pub recommendations: Vec<String>, // 干预建议 (非空, 按规则声明顺序)
}

// ==========================================
// ScoreBreakdown - 分维度积分 (可解释性)
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub attendance: u32,          // 0/10/25/40
    pub gpa: u32,                 // 0/10/20/30
    pub behavioral: u32,          // 0/5/10/15
    pub family_income: u32,       // 0/5/10
    pub parental_education: u32,  // 0/3/5
}

impl ScoreBreakdown {
    /// 各维度积分之和, 即 risk_score
    pub fn total(&self) -> u32 {
        self.attendance + self.gpa + self.behavioral + self.family_income + self.parental_education
    }
}
