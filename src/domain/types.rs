// ==========================================
// 学生辍学风险评估 - 领域类型定义
// ==========================================
// 依据: 风险评分规则 - 分类输入枚举 + 风险等级
// ==========================================
// 约定: 分类值精确匹配(不去除空白, 区分大小写)
//       枚举集合之外的取值统一落入 Unrecognized, 计 0 分
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 行为问题 (Behavioral Issues)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum BehavioralIssues {
    None,         // 无
    Minor,        // 轻微
    Moderate,     // 中等
    Severe,       // 严重
    Unrecognized, // 未识别
}

impl BehavioralIssues {
    /// 从字符串解析 (未识别的取值不报错)
    pub fn from_str(s: &str) -> Self {
        match s {
            "none" => BehavioralIssues::None,
            "minor" => BehavioralIssues::Minor,
            "moderate" => BehavioralIssues::Moderate,
            "severe" => BehavioralIssues::Severe,
            _ => BehavioralIssues::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BehavioralIssues::None => "none",
            BehavioralIssues::Minor => "minor",
            BehavioralIssues::Moderate => "moderate",
            BehavioralIssues::Severe => "severe",
            BehavioralIssues::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for BehavioralIssues {
    fn from(s: String) -> Self {
        BehavioralIssues::from_str(&s)
    }
}

impl fmt::Display for BehavioralIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 家庭收入 (Family Income)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FamilyIncome {
    Low,          // 低
    Medium,       // 中
    High,         // 高
    Unrecognized, // 未识别
}

impl FamilyIncome {
    /// 从字符串解析 (未识别的取值不报错)
    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => FamilyIncome::Low,
            "medium" => FamilyIncome::Medium,
            "high" => FamilyIncome::High,
            _ => FamilyIncome::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FamilyIncome::Low => "low",
            FamilyIncome::Medium => "medium",
            FamilyIncome::High => "high",
            FamilyIncome::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for FamilyIncome {
    fn from(s: String) -> Self {
        FamilyIncome::from_str(&s)
    }
}

impl fmt::Display for FamilyIncome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 父母受教育程度 (Parental Education)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ParentalEducation {
    None,         // 无
    HighSchool,   // 高中
    College,      // 专科
    Bachelor,     // 本科
    Graduate,     // 研究生
    Unrecognized, // 未识别
}

impl ParentalEducation {
    /// 从字符串解析 (未识别的取值不报错)
    pub fn from_str(s: &str) -> Self {
        match s {
            "none" => ParentalEducation::None,
            "highschool" => ParentalEducation::HighSchool,
            "college" => ParentalEducation::College,
            "bachelor" => ParentalEducation::Bachelor,
            "graduate" => ParentalEducation::Graduate,
            _ => ParentalEducation::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParentalEducation::None => "none",
            ParentalEducation::HighSchool => "highschool",
            ParentalEducation::College => "college",
            ParentalEducation::Bachelor => "bachelor",
            ParentalEducation::Graduate => "graduate",
            ParentalEducation::Unrecognized => "unrecognized",
        }
    }
}

impl From<String> for ParentalEducation {
    fn from(s: String) -> Self {
        ParentalEducation::from_str(&s)
    }
}

impl fmt::Display for ParentalEducation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 风险等级 (Risk Tier)
// ==========================================
// 顺序: Low < Medium < High
// 序列化格式: 首字母大写 (与前端展示一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    Low,    // 低风险
    Medium, // 中风险
    High,   // 高风险
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Medium, RiskTier::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
