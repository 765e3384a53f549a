// ==========================================
// 学生辍学风险评估 - 预测模型定义
// ==========================================
// 用途：
// - 标记评估结果由哪个模型产出 (响应中的 model 字段)；
// - 预测接口经 DropoutPredictor 调用，后续训练模型可替换规则引擎而不改调用方。

use crate::domain::risk::RiskAssessment;
use crate::domain::student::StudentFeatures;
use crate::engine::risk::RiskEngine;
use serde::{Deserialize, Serialize};

/// 预测模型标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoringModel {
    /// 规则评分引擎
    #[serde(rename = "Rule-based")]
    RuleBased,
    /// 预测失败时的兜底响应
    #[serde(rename = "Error")]
    Error,
}

impl ScoringModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringModel::RuleBased => "Rule-based",
            ScoringModel::Error => "Error",
        }
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        ScoringModel::RuleBased
    }
}

impl std::fmt::Display for ScoringModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ScoringModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rule-based" | "rule_based" | "rules" => Ok(ScoringModel::RuleBased),
            "error" => Ok(ScoringModel::Error),
            other => Err(format!("未知模型类型: {}", other)),
        }
    }
}

// ==========================================
// DropoutPredictor - 预测器接口
// ==========================================
pub trait DropoutPredictor: Send + Sync {
    /// 产出结果的模型标签
    fn model(&self) -> ScoringModel;

    /// 评估单个学生
    fn predict(&self, features: &StudentFeatures) -> RiskAssessment;
}

impl DropoutPredictor for RiskEngine {
    fn model(&self) -> ScoringModel {
        ScoringModel::RuleBased
    }

    fn predict(&self, features: &StudentFeatures) -> RiskAssessment {
        self.assess(features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_label_roundtrip() {
        assert_eq!(ScoringModel::RuleBased.as_str(), "Rule-based");
        assert_eq!(
            serde_json::to_string(&ScoringModel::RuleBased).unwrap(),
            "\"Rule-based\""
        );
        assert_eq!("rule_based".parse::<ScoringModel>(), Ok(ScoringModel::RuleBased));
        assert!("random_forest".parse::<ScoringModel>().is_err());
    }

    #[test]
    fn test_rule_engine_is_default_predictor() {
        let engine = RiskEngine::new();
        assert_eq!(engine.model(), ScoringModel::default());
    }
}
