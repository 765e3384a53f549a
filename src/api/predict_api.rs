// ==========================================
// 学生辍学风险评估 - 预测 API
// ==========================================
// 职责: 请求校验 -> 调用预测器 -> 附加模型标签
// 架构: API 层 → DropoutPredictor (默认 RiskEngine)
// 约定: 调用方需要"永不失败"语义时使用 predict_or_fallback
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::ApiResult;
use crate::api::validator::validate_request;
use crate::domain::risk::RiskAssessment;
use crate::domain::student::StudentFeatures;
use crate::domain::types::RiskTier;
use crate::engine::risk::RiskEngine;
use crate::engine::strategy::{DropoutPredictor, ScoringModel};
use crate::i18n::t;

/// 兜底响应的建议文案
pub const FALLBACK_RECOMMENDATION: &str = "Unable to generate prediction. Please try again.";

/// 兜底响应的概率
pub const FALLBACK_PROBABILITY: f64 = 0.5;

// ==========================================
// PredictionResponse - 预测响应
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    #[serde(flatten)]
    pub assessment: RiskAssessment,

    /// 产出结果的模型标签（由调用边界附加）
    pub model: ScoringModel,

    /// 失败时的错误摘要
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// 失败时的错误详情
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// ==========================================
// PredictApi - 预测 API
// ==========================================
pub struct PredictApi {
    predictor: Arc<dyn DropoutPredictor>,
}

impl PredictApi {
    /// 创建新的PredictApi实例
    ///
    /// # 参数
    /// - predictor: 预测器（规则引擎或后续替换的训练模型）
    pub fn new(predictor: Arc<dyn DropoutPredictor>) -> Self {
        Self { predictor }
    }

    /// 对已校验的特征做预测
    pub fn predict(&self, features: &StudentFeatures) -> PredictionResponse {
        let assessment = self.predictor.predict(features);
        PredictionResponse {
            assessment,
            model: self.predictor.model(),
            error: None,
            details: None,
        }
    }

    /// 校验原始请求体后预测
    ///
    /// # 返回
    /// - Ok(PredictionResponse): 预测结果
    /// - Err(ApiError): 请求体校验失败（引擎不会被调用）
    pub fn predict_json(&self, body: &Value) -> ApiResult<PredictionResponse> {
        tracing::info!(model = %self.predictor.model(), "收到预测请求");
        let features = validate_request(body)?;
        let response = self.predict(&features);
        tracing::info!(
            risk_tier = %response.assessment.risk_tier,
            probability = response.assessment.probability,
            "预测完成"
        );
        Ok(response)
    }

    /// 解析原始 JSON 文本后预测
    pub fn predict_str(&self, raw: &str) -> ApiResult<PredictionResponse> {
        let body: Value = serde_json::from_str(raw)?;
        self.predict_json(&body)
    }

    /// 预测, 失败时返回兜底响应（永不失败）
    pub fn predict_or_fallback(&self, body: &Value) -> PredictionResponse {
        match self.predict_json(body) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "预测失败，返回兜底响应");
                fallback_response(&e.to_string())
            }
        }
    }
}

impl Default for PredictApi {
    fn default() -> Self {
        Self::new(Arc::new(RiskEngine::new()))
    }
}

/// 构造兜底响应: Medium / 0.5 / 单条重试提示 / model = Error
pub fn fallback_response(details: &str) -> PredictionResponse {
    PredictionResponse {
        assessment: RiskAssessment {
            risk_score: 50,
            probability: FALLBACK_PROBABILITY,
            risk_tier: RiskTier::Medium,
            recommendations: vec![FALLBACK_RECOMMENDATION.to_string()],
        },
        model: ScoringModel::Error,
        error: Some(t("prediction.failed")),
        details: Some(details.to_string()),
    }
}
