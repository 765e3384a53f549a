// ==========================================
// 学生辍学风险评估 - API层错误类型
// ==========================================
// 职责: 定义预测边界的错误类型
// 约定: 引擎本身不产生错误, 所有错误都发生在调用引擎之前
// ==========================================

use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 请求体字段校验失败（带全部违规明细）, 显示为本地化原因
    #[error("{reason}")]
    ValidationError {
        reason: String,
        violations: Vec<ValidationViolation>,
    },

    #[error("请求体解析失败: {0}")]
    MalformedBody(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedBody(err.to_string())
    }
}

impl ApiError {
    /// 违规明细（非校验错误返回空）
    pub fn violations(&self) -> &[ValidationViolation] {
        match self {
            ApiError::ValidationError { violations, .. } => violations,
            _ => &[],
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 校验违规详情
// ==========================================

/// 校验违规详情
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationViolation {
    /// 违规类型（MISSING_FIELD / WRONG_TYPE）
    pub violation_type: String,
    /// 字段名
    pub field: String,
    /// 违规原因
    pub reason: String,
}
