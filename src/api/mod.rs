// ==========================================
// 学生辍学风险评估 - API 层
// ==========================================
// 职责: 请求/响应契约, 供外部展示层调用
// ==========================================

pub mod error;
pub mod predict_api;
pub mod validator;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ValidationViolation};
pub use predict_api::{fallback_response, PredictApi, PredictionResponse};
pub use validator::validate_request;
