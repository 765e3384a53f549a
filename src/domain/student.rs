// ==========================================
// 学生辍学风险评估 - 学生特征领域模型
// ==========================================
// 用途: 评分引擎输入, 调用方按请求构造, 构造后不可变
// 数值字段不做范围校验, 超出预期范围的值由阈值比较直接吸收
// ==========================================

use crate::domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation};
use serde::{Deserialize, Serialize};

// ==========================================
// StudentFeatures - 学生特征
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentFeatures {
    // ===== 评分维度 =====
    #[serde(alias = "attendance")]
    pub attendance_rate: f64, // 出勤率 (%), 预期 [0,100]
    pub gpa: f64, // 绩点, 预期 [0.0,4.0]
    pub behavioral_issues: BehavioralIssues, // 行为问题
    pub family_income: FamilyIncome, // 家庭收入
    pub parental_education: ParentalEducation, // 父母受教育程度

    // ===== 辅助字段 (暂不参与评分) =====
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absences: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub study_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracurricular: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_failures: Option<f64>,
}

impl StudentFeatures {
    /// 仅用评分维度构造 (辅助字段为空)
    pub fn new(
        attendance_rate: f64,
        gpa: f64,
        behavioral_issues: BehavioralIssues,
        family_income: FamilyIncome,
        parental_education: ParentalEducation,
    ) -> Self {
        Self {
            attendance_rate,
            gpa,
            behavioral_issues,
            family_income,
            parental_education,
            age: None,
            absences: None,
            study_hours: None,
            extracurricular: None,
            previous_failures: None,
        }
    }
}
