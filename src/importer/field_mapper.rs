// ==========================================
// 学生辍学风险评估 - 字段映射器
// ==========================================
// 职责: 原始行记录 -> StudentFeatures
// 表头兼容 camelCase 与 snake_case 两种写法
// 必填: 出勤率 / 绩点 / 三个分类字段; 辅助字段缺省或为空时记为 None
// ==========================================

use crate::domain::student::StudentFeatures;
use crate::domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::RawRecord;

// 表头别名 (按顺序取第一个存在的列)
const ATTENDANCE_HEADERS: &[&str] = &["attendanceRate", "attendance_rate", "attendance"];
const GPA_HEADERS: &[&str] = &["gpa"];
const BEHAVIORAL_HEADERS: &[&str] = &["behavioralIssues", "behavioral_issues"];
const INCOME_HEADERS: &[&str] = &["familyIncome", "family_income"];
const EDUCATION_HEADERS: &[&str] = &["parentalEducation", "parental_education", "parent_education"];
const AGE_HEADERS: &[&str] = &["age"];
const ABSENCES_HEADERS: &[&str] = &["absences"];
const STUDY_HOURS_HEADERS: &[&str] = &["studyHours", "study_hours", "study_hours_weekly"];
const EXTRACURRICULAR_HEADERS: &[&str] = &["extracurricular"];
const PREVIOUS_FAILURES_HEADERS: &[&str] = &["previousFailures", "previous_failures"];
const STUDENT_ID_HEADERS: &[&str] = &["student_id", "studentId"];

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// 行标识: student_id 列优先, 否则使用行号 (从 0 开始)
    pub fn student_id(&self, record: &RawRecord, row: usize) -> String {
        lookup(record, STUDENT_ID_HEADERS)
            .map(|(_, v)| v.to_string())
            .unwrap_or_else(|| row.to_string())
    }

    /// 映射一行记录
    ///
    /// # 参数
    /// - record: 原始行记录
    /// - row: 行号 (用于错误定位)
    pub fn map_to_features(&self, record: &RawRecord, row: usize) -> ImportResult<StudentFeatures> {
        let attendance_rate = required_f64(record, ATTENDANCE_HEADERS, row)?;
        let gpa = required_f64(record, GPA_HEADERS, row)?;

        let behavioral = required_text(record, BEHAVIORAL_HEADERS, row)?;
        let income = required_text(record, INCOME_HEADERS, row)?;
        let education = required_text(record, EDUCATION_HEADERS, row)?;

        Ok(StudentFeatures {
            attendance_rate,
            gpa,
            behavioral_issues: BehavioralIssues::from_str(behavioral),
            family_income: FamilyIncome::from_str(income),
            parental_education: ParentalEducation::from_str(education),
            age: optional_f64(record, AGE_HEADERS, row)?,
            absences: optional_f64(record, ABSENCES_HEADERS, row)?,
            study_hours: optional_f64(record, STUDY_HOURS_HEADERS, row)?,
            extracurricular: optional_f64(record, EXTRACURRICULAR_HEADERS, row)?,
            previous_failures: optional_f64(record, PREVIOUS_FAILURES_HEADERS, row)?,
        })
    }
}

/// 取第一个存在且非空的别名列, 返回 (列名, 值)
fn lookup<'a>(record: &'a RawRecord, headers: &[&'a str]) -> Option<(&'a str, &'a str)> {
    headers.iter().find_map(|h| {
        record
            .get(*h)
            .map(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(|v| (*h, v))
    })
}

fn required_text<'a>(record: &'a RawRecord, headers: &[&'a str], row: usize) -> ImportResult<&'a str> {
    lookup(record, headers)
        .map(|(_, v)| v)
        .ok_or_else(|| ImportError::FieldMappingError {
            row,
            message: format!("缺少必填字段: {}", headers[0]),
        })
}

fn required_f64(record: &RawRecord, headers: &[&str], row: usize) -> ImportResult<f64> {
    optional_f64(record, headers, row)?.ok_or_else(|| ImportError::FieldMappingError {
        row,
        message: format!("缺少必填字段: {}", headers[0]),
    })
}

fn optional_f64(record: &RawRecord, headers: &[&str], row: usize) -> ImportResult<Option<f64>> {
    match lookup(record, headers) {
        None => Ok(None),
        Some((field, value)) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|e| ImportError::TypeConversionError {
                row,
                field: field.to_string(),
                message: format!("无法解析数值 '{}': {}", value, e),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> RawRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_map_camel_case_headers() {
        let r = record(&[
            ("attendanceRate", "80"),
            ("gpa", "2.8"),
            ("behavioralIssues", "minor"),
            ("familyIncome", "low"),
            ("parentalEducation", "highschool"),
            ("studyHours", "12"),
        ]);

        let f = FieldMapper::new().map_to_features(&r, 0).unwrap();
        assert_eq!(f.attendance_rate, 80.0);
        assert_eq!(f.behavioral_issues, BehavioralIssues::Minor);
        assert_eq!(f.study_hours, Some(12.0));
        assert_eq!(f.age, None);
    }

    #[test]
    fn test_map_snake_case_headers() {
        let r = record(&[
            ("attendance_rate", "60"),
            ("gpa", "1.8"),
            ("behavioral_issues", "severe"),
            ("family_income", "low"),
            ("parent_education", "none"),
            ("previous_failures", ""),
        ]);

        let f = FieldMapper::new().map_to_features(&r, 3).unwrap();
        assert_eq!(f.attendance_rate, 60.0);
        assert_eq!(f.parental_education, ParentalEducation::None);
        assert_eq!(f.previous_failures, None);
    }

    #[test]
    fn test_missing_required_field() {
        let r = record(&[("gpa", "2.0")]);
        let err = FieldMapper::new().map_to_features(&r, 7).unwrap_err();
        match err {
            ImportError::FieldMappingError { row, message } => {
                assert_eq!(row, 7);
                assert!(message.contains("attendanceRate"));
            }
            other => panic!("Expected FieldMappingError, got {:?}", other),
        }
    }

    #[test]
    fn test_unparseable_number() {
        let r = record(&[
            ("attendance", "eighty"),
            ("gpa", "2.0"),
            ("behavioralIssues", "none"),
            ("familyIncome", "high"),
            ("parentalEducation", "college"),
        ]);

        let err = FieldMapper::new().map_to_features(&r, 1).unwrap_err();
        match err {
            ImportError::TypeConversionError { row, field, .. } => {
                assert_eq!(row, 1);
                assert_eq!(field, "attendance");
            }
            other => panic!("Expected TypeConversionError, got {:?}", other),
        }
    }

    #[test]
    fn test_student_id_fallback_to_row() {
        let mapper = FieldMapper::new();
        assert_eq!(mapper.student_id(&record(&[("studentId", "S9")]), 4), "S9");
        assert_eq!(mapper.student_id(&record(&[("gpa", "3.0")]), 4), "4");
    }
}
