// ==========================================
// 学生辍学风险评估 - 请求校验器
// ==========================================
// 职责: 在调用引擎之前完成请求体校验, 并构造 StudentFeatures
// 规则:
// - attendanceRate (或 attendance) / gpa 必须为数值
// - behavioralIssues / familyIncome / parentalEducation 必须为非空字符串
// - 辅助字段可缺省 (null 视为缺省), 非数值时忽略并记录告警
// - 分类取值不在枚举内不算错误, 由引擎按 0 分处理
// ==========================================

use serde_json::{Map, Value};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::student::StudentFeatures;
use crate::domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation};
use crate::i18n::{t, t_with_args};

pub const FIELD_ATTENDANCE_RATE: &str = "attendanceRate";
pub const FIELD_ATTENDANCE_LEGACY: &str = "attendance";
pub const FIELD_GPA: &str = "gpa";
pub const FIELD_BEHAVIORAL_ISSUES: &str = "behavioralIssues";
pub const FIELD_FAMILY_INCOME: &str = "familyIncome";
pub const FIELD_PARENTAL_EDUCATION: &str = "parentalEducation";

const AUX_FIELDS: [&str; 5] = [
    "age",
    "absences",
    "studyHours",
    "extracurricular",
    "previousFailures",
];

// ==========================================
// 违规收集器
// ==========================================
#[derive(Default)]
struct Violations(Vec<ValidationViolation>);

impl Violations {
    fn missing(&mut self, field: &str) {
        self.0.push(ValidationViolation {
            violation_type: "MISSING_FIELD".to_string(),
            field: field.to_string(),
            reason: t_with_args("validation.missing_field", &[("field", field)]),
        });
    }

    fn wrong_type(&mut self, field: &str, key: &str) {
        self.0.push(ValidationViolation {
            violation_type: "WRONG_TYPE".to_string(),
            field: field.to_string(),
            reason: t_with_args(key, &[("field", field)]),
        });
    }
}

/// 校验请求体并构造学生特征
///
/// # 返回
/// - Ok(StudentFeatures): 校验通过
/// - Err(ApiError::ValidationError): 收集全部违规后一次返回
pub fn validate_request(body: &Value) -> ApiResult<StudentFeatures> {
    let obj = body
        .as_object()
        .ok_or_else(|| ApiError::InvalidInput(t("validation.not_an_object")))?;

    let mut violations = Violations::default();

    // 出勤率: 新字段名优先, 兼容旧字段名
    let attendance_field =
        if !obj.contains_key(FIELD_ATTENDANCE_RATE) && obj.contains_key(FIELD_ATTENDANCE_LEGACY) {
            FIELD_ATTENDANCE_LEGACY
        } else {
            FIELD_ATTENDANCE_RATE
        };
    let attendance_rate = required_number(obj, attendance_field, &mut violations);
    let gpa = required_number(obj, FIELD_GPA, &mut violations);

    let behavioral = required_category(obj, FIELD_BEHAVIORAL_ISSUES, &mut violations);
    let income = required_category(obj, FIELD_FAMILY_INCOME, &mut violations);
    let education = required_category(obj, FIELD_PARENTAL_EDUCATION, &mut violations);

    let aux: Vec<Option<f64>> = AUX_FIELDS
        .iter()
        .map(|field| optional_number(obj, field))
        .collect();

    if !violations.0.is_empty() {
        tracing::warn!(count = violations.0.len(), "请求校验失败");
        return Err(ApiError::ValidationError {
            reason: t("validation.invalid_input"),
            violations: violations.0,
        });
    }

    match (attendance_rate, gpa, behavioral, income, education) {
        (Some(attendance_rate), Some(gpa), Some(behavioral), Some(income), Some(education)) => {
            Ok(StudentFeatures {
                attendance_rate,
                gpa,
                behavioral_issues: BehavioralIssues::from_str(behavioral),
                family_income: FamilyIncome::from_str(income),
                parental_education: ParentalEducation::from_str(education),
                age: aux[0],
                absences: aux[1],
                study_hours: aux[2],
                extracurricular: aux[3],
                previous_failures: aux[4],
            })
        }
        // 无违规时必填字段均已取到
        _ => Err(ApiError::InternalError("校验状态不一致".to_string())),
    }
}

fn required_number(obj: &Map<String, Value>, field: &str, violations: &mut Violations) -> Option<f64> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            violations.missing(field);
            None
        }
        Some(value) => match value.as_f64() {
            Some(n) => Some(n),
            None => {
                violations.wrong_type(field, "validation.not_a_number");
                None
            }
        },
    }
}

/// 辅助字段不参与评分, 类型不符时记为缺省而不拒绝请求
fn optional_number(obj: &Map<String, Value>, field: &str) -> Option<f64> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let n = value.as_f64();
            if n.is_none() {
                tracing::warn!(field, raw_value = %value, "辅助字段不是数值，已忽略");
            }
            n
        }
    }
}

fn required_category<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
    violations: &mut Violations,
) -> Option<&'a str> {
    match obj.get(field) {
        None | Some(Value::Null) => {
            violations.missing(field);
            None
        }
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        Some(_) => {
            violations.wrong_type(field, "validation.not_a_string");
            None
        }
    }
}
