// ==========================================
// 学生辍学风险评估 - 风险评分引擎
// ==========================================
// 职责: 积分累加 -> 概率归一化 -> 风险分级 -> 干预建议
// 输入: StudentFeatures
// 输出: RiskAssessment
// ==========================================
// 红线: 纯函数, 无状态, 无 I/O, 永不失败
// ==========================================

use crate::domain::risk::{RiskAssessment, ScoreBreakdown};
use crate::domain::student::StudentFeatures;
use crate::domain::types::{BehavioralIssues, FamilyIncome, ParentalEducation, RiskTier};

// ==========================================
// 常量定义
// ==========================================

/// 权重表理论最高分 (40+30+15+10+5), 作为归一化除数
pub const MAX_RISK_SCORE: u32 = 100;

/// 概率上限, 不输出"确定辍学"
pub const PROBABILITY_CAP: f64 = 0.95;

/// High 等级下界 (含)
pub const HIGH_TIER_THRESHOLD: f64 = 0.70;

/// Medium 等级下界 (含)
pub const MEDIUM_TIER_THRESHOLD: f64 = 0.40;

pub const REC_ATTENDANCE: &str = "Implement attendance monitoring and family outreach program";
pub const REC_ACADEMIC: &str = "Provide academic tutoring and mentorship support";
pub const REC_BEHAVIORAL: &str = "Refer to counseling services and behavioral intervention program";
pub const REC_FINANCIAL: &str = "Connect family with financial aid and community resources";
pub const REC_FAMILY_LITERACY: &str =
    "Engage parents through family literacy and involvement programs";
pub const REC_CONTINUE_MONITORING: &str = "Continue monitoring student progress";
pub const REC_MAINTAIN_COMMUNICATION: &str = "Maintain regular communication with family";

// ==========================================
// 干预建议规则表
// ==========================================
// 按声明顺序评估, 所有命中规则均输出; 只看原始特征, 不看积分

/// 单条建议规则 (谓词 + 文案)
pub struct RecommendationRule {
    pub applies: fn(&StudentFeatures) -> bool,
    pub message: &'static str,
}

pub const RECOMMENDATION_RULES: [RecommendationRule; 5] = [
    RecommendationRule {
        applies: |f| f.attendance_rate < 85.0,
        message: REC_ATTENDANCE,
    },
    RecommendationRule {
        applies: |f| f.gpa < 2.5,
        message: REC_ACADEMIC,
    },
    RecommendationRule {
        // 未识别取值同样 != none
        applies: |f| f.behavioral_issues != BehavioralIssues::None,
        message: REC_BEHAVIORAL,
    },
    RecommendationRule {
        applies: |f| f.family_income == FamilyIncome::Low,
        message: REC_FINANCIAL,
    },
    RecommendationRule {
        applies: |f| {
            matches!(
                f.parental_education,
                ParentalEducation::None | ParentalEducation::HighSchool
            )
        },
        message: REC_FAMILY_LITERACY,
    },
];

/// 无规则命中时的默认建议
pub const DEFAULT_RECOMMENDATIONS: [&str; 2] =
    [REC_CONTINUE_MONITORING, REC_MAINTAIN_COMMUNICATION];

// ==========================================
// RiskEngine - 风险评分引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine {
    // 无状态引擎, 可跨线程共享
}

impl RiskEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 评估辍学风险
    ///
    /// # 参数
    /// - `features`: 学生特征
    ///
    /// # 返回
    /// RiskAssessment (对任意输入均返回完整结果)
    pub fn assess(&self, features: &StudentFeatures) -> RiskAssessment {
        // 1. 分维度积分
        let breakdown = self.score_breakdown(features);
        let risk_score = breakdown.total();

        // 2. 归一化
        let probability = normalize(risk_score);

        // 3. 分级
        let risk_tier = tier_for(probability);

        // 4. 干预建议
        let recommendations = recommend(features);

        tracing::debug!(
            risk_score,
            probability,
            risk_tier = %risk_tier,
            attendance = breakdown.attendance,
            gpa = breakdown.gpa,
            behavioral = breakdown.behavioral,
            family_income = breakdown.family_income,
            parental_education = breakdown.parental_education,
            "风险评估完成"
        );

        RiskAssessment {
            risk_score,
            probability,
            risk_tier,
            recommendations,
        }
    }

    /// 分维度积分 (各维度独立计算, 与顺序无关)
    pub fn score_breakdown(&self, features: &StudentFeatures) -> ScoreBreakdown {
        ScoreBreakdown {
            attendance: attendance_points(features.attendance_rate),
            gpa: gpa_points(features.gpa),
            behavioral: behavioral_points(features.behavioral_issues),
            family_income: family_income_points(features.family_income),
            parental_education: parental_education_points(features.parental_education),
        }
    }
}

// ==========================================
// 积分规则
// ==========================================
// NaN 不满足任何 `<` 比较, 该维度计 0 分

/// 出勤率积分 (0-40)
pub fn attendance_points(attendance_rate: f64) -> u32 {
    if attendance_rate < 70.0 {
        40
    } else if attendance_rate < 85.0 {
        25
    } else if attendance_rate < 95.0 {
        10
    } else {
        0
    }
}

/// 绩点积分 (0-30)
pub fn gpa_points(gpa: f64) -> u32 {
    if gpa < 2.0 {
        30
    } else if gpa < 2.5 {
        20
    } else if gpa < 3.0 {
        10
    } else {
        0
    }
}

/// 行为问题积分 (0-15)
pub fn behavioral_points(behavioral_issues: BehavioralIssues) -> u32 {
    match behavioral_issues {
        BehavioralIssues::Severe => 15,
        BehavioralIssues::Moderate => 10,
        BehavioralIssues::Minor => 5,
        BehavioralIssues::None => 0,
        BehavioralIssues::Unrecognized => 0,
    }
}

/// 家庭收入积分 (0-10)
pub fn family_income_points(family_income: FamilyIncome) -> u32 {
    match family_income {
        FamilyIncome::Low => 10,
        FamilyIncome::Medium => 5,
        FamilyIncome::High => 0,
        FamilyIncome::Unrecognized => 0,
    }
}

/// 父母受教育程度积分 (0-5)
pub fn parental_education_points(parental_education: ParentalEducation) -> u32 {
    match parental_education {
        ParentalEducation::None => 5,
        ParentalEducation::HighSchool => 3,
        ParentalEducation::College
        | ParentalEducation::Bachelor
        | ParentalEducation::Graduate => 0,
        ParentalEducation::Unrecognized => 0,
    }
}

// ==========================================
// 归一化 / 分级 / 建议
// ==========================================

/// 积分 -> 概率, 上限 0.95
pub fn normalize(risk_score: u32) -> f64 {
    (risk_score as f64 / MAX_RISK_SCORE as f64).min(PROBABILITY_CAP)
}

/// 概率 -> 风险等级 (按顺序判定, 先命中先返回; 边界值归入较高等级)
pub fn tier_for(probability: f64) -> RiskTier {
    if probability >= HIGH_TIER_THRESHOLD {
        RiskTier::High
    } else if probability >= MEDIUM_TIER_THRESHOLD {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// 按规则表生成干预建议, 无命中时返回两条默认建议
pub fn recommend(features: &StudentFeatures) -> Vec<String> {
    let triggered: Vec<String> = RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(features))
        .map(|rule| rule.message.to_string())
        .collect();

    if triggered.is_empty() {
        DEFAULT_RECOMMENDATIONS.iter().map(|m| m.to_string()).collect()
    } else {
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        attendance: f64,
        gpa: f64,
        behavioral: BehavioralIssues,
        income: FamilyIncome,
        education: ParentalEducation,
    ) -> StudentFeatures {
        StudentFeatures::new(attendance, gpa, behavioral, income, education)
    }

    #[test]
    fn test_attendance_buckets() {
        assert_eq!(attendance_points(-5.0), 40);
        assert_eq!(attendance_points(69.99), 40);
        assert_eq!(attendance_points(70.0), 25);
        assert_eq!(attendance_points(84.9), 25);
        assert_eq!(attendance_points(85.0), 10);
        assert_eq!(attendance_points(94.9), 10);
        assert_eq!(attendance_points(95.0), 0);
        assert_eq!(attendance_points(150.0), 0);
    }

    #[test]
    fn test_gpa_buckets() {
        assert_eq!(gpa_points(1.99), 30);
        assert_eq!(gpa_points(2.0), 20);
        assert_eq!(gpa_points(2.49), 20);
        assert_eq!(gpa_points(2.5), 10);
        assert_eq!(gpa_points(2.99), 10);
        assert_eq!(gpa_points(3.0), 0);
        assert_eq!(gpa_points(4.0), 0);
    }

    #[test]
    fn test_nan_scores_zero() {
        assert_eq!(attendance_points(f64::NAN), 0);
        assert_eq!(gpa_points(f64::NAN), 0);
    }

    #[test]
    fn test_categorical_points() {
        assert_eq!(behavioral_points(BehavioralIssues::Severe), 15);
        assert_eq!(behavioral_points(BehavioralIssues::Unrecognized), 0);
        assert_eq!(family_income_points(FamilyIncome::Medium), 5);
        assert_eq!(family_income_points(FamilyIncome::Unrecognized), 0);
        assert_eq!(parental_education_points(ParentalEducation::HighSchool), 3);
        assert_eq!(parental_education_points(ParentalEducation::Graduate), 0);
    }

    #[test]
    fn test_normalize_caps_probability() {
        assert_eq!(normalize(0), 0.0);
        assert_eq!(normalize(53), 0.53);
        assert_eq!(normalize(95), 0.95);
        assert_eq!(normalize(100), 0.95);
    }

    #[test]
    fn test_tier_breakpoints_map_to_higher_tier() {
        assert_eq!(tier_for(0.0), RiskTier::Low);
        assert_eq!(tier_for(0.39), RiskTier::Low);
        assert_eq!(tier_for(0.40), RiskTier::Medium);
        assert_eq!(tier_for(normalize(40)), RiskTier::Medium);
        assert_eq!(tier_for(0.69), RiskTier::Medium);
        assert_eq!(tier_for(0.70), RiskTier::High);
        assert_eq!(tier_for(normalize(70)), RiskTier::High);
        assert_eq!(tier_for(0.95), RiskTier::High);
    }

    #[test]
    fn test_unrecognized_behavior_recommends_but_scores_zero() {
        let engine = RiskEngine::new();
        let f = features(
            98.0,
            3.8,
            BehavioralIssues::Unrecognized,
            FamilyIncome::High,
            ParentalEducation::Graduate,
        );

        let result = engine.assess(&f);
        assert_eq!(result.risk_score, 0);
        assert_eq!(result.recommendations, vec![REC_BEHAVIORAL.to_string()]);
    }

    #[test]
    fn test_recommendation_order_is_fixed() {
        let f = features(
            60.0,
            1.8,
            BehavioralIssues::Severe,
            FamilyIncome::Low,
            ParentalEducation::None,
        );

        assert_eq!(
            recommend(&f),
            vec![
                REC_ATTENDANCE,
                REC_ACADEMIC,
                REC_BEHAVIORAL,
                REC_FINANCIAL,
                REC_FAMILY_LITERACY,
            ]
        );
    }

    #[test]
    fn test_breakdown_matches_score() {
        let engine = RiskEngine::new();
        let f = features(
            80.0,
            2.8,
            BehavioralIssues::Minor,
            FamilyIncome::Low,
            ParentalEducation::HighSchool,
        );

        let breakdown = engine.score_breakdown(&f);
        assert_eq!(breakdown.attendance, 25);
        assert_eq!(breakdown.gpa, 10);
        assert_eq!(breakdown.total(), engine.assess(&f).risk_score);
    }
}
