// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use serde_json::{json, Value};
use student_dropout_risk::domain::student::StudentFeatures;
use student_dropout_risk::domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation};

// ==========================================
// StudentFeatures 构建器
// ==========================================
// 默认值为"无任何风险因素"的学生 (积分 0)

pub struct StudentBuilder {
    attendance_rate: f64,
    gpa: f64,
    behavioral_issues: BehavioralIssues,
    family_income: FamilyIncome,
    parental_education: ParentalEducation,
    study_hours: Option<f64>,
}

impl StudentBuilder {
    pub fn new() -> Self {
        Self {
            attendance_rate: 98.0,
            gpa: 3.8,
            behavioral_issues: BehavioralIssues::None,
            family_income: FamilyIncome::High,
            parental_education: ParentalEducation::Graduate,
            study_hours: None,
        }
    }

    pub fn attendance(mut self, attendance_rate: f64) -> Self {
        self.attendance_rate = attendance_rate;
        self
    }

    pub fn gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self
    }

    pub fn behavioral(mut self, behavioral: &str) -> Self {
        self.behavioral_issues = BehavioralIssues::from_str(behavioral);
        self
    }

    pub fn income(mut self, income: &str) -> Self {
        self.family_income = FamilyIncome::from_str(income);
        self
    }

    pub fn education(mut self, education: &str) -> Self {
        self.parental_education = ParentalEducation::from_str(education);
        self
    }

    pub fn study_hours(mut self, hours: f64) -> Self {
        self.study_hours = Some(hours);
        self
    }

    pub fn build(&self) -> StudentFeatures {
        let mut features = StudentFeatures::new(
            self.attendance_rate,
            self.gpa,
            self.behavioral_issues,
            self.family_income,
            self.parental_education,
        );
        features.study_hours = self.study_hours;
        features
    }

    /// 构造请求体 (与预测接口契约一致)
    pub fn to_request(&self) -> Value {
        let mut body = json!({
            "attendanceRate": self.attendance_rate,
            "gpa": self.gpa,
            "behavioralIssues": self.behavioral_issues.as_str(),
            "familyIncome": self.family_income.as_str(),
            "parentalEducation": self.parental_education.as_str(),
        });
        if let Some(hours) = self.study_hours {
            body["studyHours"] = json!(hours);
        }
        body
    }

    /// 构造 CSV 数据行 (列顺序见 CSV_HEADER)
    pub fn to_csv_row(&self, student_id: &str) -> String {
        format!(
            "{},{},{},{},{},{}",
            student_id,
            self.attendance_rate,
            self.gpa,
            self.behavioral_issues.as_str(),
            self.family_income.as_str(),
            self.parental_education.as_str(),
        )
    }
}

impl Default for StudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// 与 to_csv_row 对应的表头
pub const CSV_HEADER: &str =
    "student_id,attendance_rate,gpa,behavioral_issues,family_income,parental_education";

// ==========================================
// 典型场景
// ==========================================

/// 场景 A: 全部风险因素命中 (积分 100)
pub fn scenario_a() -> StudentBuilder {
    StudentBuilder::new()
        .attendance(60.0)
        .gpa(1.8)
        .behavioral("severe")
        .income("low")
        .education("none")
}

/// 场景 B: 无风险因素 (积分 0)
pub fn scenario_b() -> StudentBuilder {
    StudentBuilder::new()
        .attendance(98.0)
        .gpa(3.8)
        .behavioral("none")
        .income("high")
        .education("graduate")
}

/// 场景 C: 积分 35, Low
pub fn scenario_c() -> StudentBuilder {
    StudentBuilder::new()
        .attendance(90.0)
        .gpa(2.2)
        .behavioral("none")
        .income("medium")
        .education("college")
}

/// 场景 D: 积分 53, Medium
pub fn scenario_d() -> StudentBuilder {
    StudentBuilder::new()
        .attendance(80.0)
        .gpa(2.8)
        .behavioral("minor")
        .income("low")
        .education("highschool")
}
