// ==========================================
// 学生辍学风险评估 - 批量预测
// ==========================================
// 职责: 名册文件 -> 逐行评估 -> 汇总统计 -> JSON/CSV 输出
// 约定:
// - 单行失败不影响整批, 失败行记录错误原因
// - 百分比以总行数(含失败行)为分母, 平均概率只统计成功行
// - 空批次统计全部为 0, 不产生 NaN
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ConfigManager;
use crate::domain::types::RiskTier;
use crate::engine::risk::RiskEngine;
use crate::engine::strategy::{DropoutPredictor, ScoringModel};
use crate::i18n::{t, t_with_args};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{RawRecord, UniversalFileParser};

// ==========================================
// 批量结果模型
// ==========================================

/// 单行结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchRecord {
    Scored {
        student_id: String,
        risk_tier: RiskTier,
        risk_score: u32,
        probability: f64,
        top_recommendations: Vec<String>,
    },
    Failed {
        student_id: String,
        error: String,
    },
}

impl BatchRecord {
    pub fn student_id(&self) -> &str {
        match self {
            BatchRecord::Scored { student_id, .. } | BatchRecord::Failed { student_id, .. } => {
                student_id
            }
        }
    }
}

/// 风险等级分布项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCount {
    pub tier: RiskTier,
    pub count: usize,
    pub percentage: f64,
}

/// 批量汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub scored: usize,
    pub errors: usize,
    pub tier_distribution: Vec<TierCount>,
    pub average_probability: f64,
    pub high_risk_count: usize,
    pub high_risk_percentage: f64,
}

impl BatchSummary {
    /// 由单行结果计算汇总
    pub fn from_records(records: &[BatchRecord]) -> Self {
        let total = records.len();
        let probabilities: Vec<f64> = records
            .iter()
            .filter_map(|r| match r {
                BatchRecord::Scored { probability, .. } => Some(*probability),
                BatchRecord::Failed { .. } => None,
            })
            .collect();
        let scored = probabilities.len();

        let count_tier = |tier: RiskTier| {
            records
                .iter()
                .filter(|r| matches!(r, BatchRecord::Scored { risk_tier, .. } if *risk_tier == tier))
                .count()
        };

        let tier_distribution = RiskTier::ALL
            .iter()
            .map(|&tier| {
                let count = count_tier(tier);
                TierCount {
                    tier,
                    count,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        let average_probability = if scored == 0 {
            0.0
        } else {
            probabilities.iter().sum::<f64>() / scored as f64
        };

        let high_risk_count = count_tier(RiskTier::High);

        Self {
            total,
            scored,
            errors: total - scored,
            tier_distribution,
            average_probability,
            high_risk_count,
            high_risk_percentage: percentage(high_risk_count, total),
        }
    }

    /// 汇总文本 (按当前语言)
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.errors > 0 {
            let count = self.errors.to_string();
            lines.push(t_with_args("batch.errors", &[("count", count.as_str())]));
        }

        lines.push(t("batch.summary_title"));
        for item in self.tier_distribution.iter().filter(|i| i.count > 0) {
            let count = item.count.to_string();
            let pct = format!("{:.1}", item.percentage);
            let line = t_with_args(
                "batch.tier_line",
                &[
                    ("tier", item.tier.as_str()),
                    ("count", count.as_str()),
                    ("pct", pct.as_str()),
                ],
            );
            lines.push(format!("  {}", line));
        }

        let avg_pct = format!("{:.2}", self.average_probability * 100.0);
        lines.push(t_with_args(
            "batch.average_probability",
            &[("pct", avg_pct.as_str())],
        ));

        let high_count = self.high_risk_count.to_string();
        let high_pct = format!("{:.1}", self.high_risk_percentage);
        lines.push(t_with_args(
            "batch.high_risk",
            &[("count", high_count.as_str()), ("pct", high_pct.as_str())],
        ));
        lines
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

/// 整批报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: String,
    pub generated_at: DateTime<Utc>,
    pub model: ScoringModel,
    pub records: Vec<BatchRecord>,
    pub summary: BatchSummary,
}

/// CSV 输出行 (扁平结构)
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    student_id: &'a str,
    status: &'static str,
    risk_tier: Option<&'static str>,
    risk_score: Option<u32>,
    probability: Option<f64>,
    top_recommendations: Option<String>,
    error: Option<&'a str>,
}

impl<'a> From<&'a BatchRecord> for CsvRow<'a> {
    fn from(record: &'a BatchRecord) -> Self {
        match record {
            BatchRecord::Scored {
                student_id,
                risk_tier,
                risk_score,
                probability,
                top_recommendations,
            } => CsvRow {
                student_id: student_id.as_str(),
                status: "scored",
                risk_tier: Some(risk_tier.as_str()),
                risk_score: Some(*risk_score),
                probability: Some(*probability),
                top_recommendations: Some(top_recommendations.join("; ")),
                error: None,
            },
            BatchRecord::Failed { student_id, error } => CsvRow {
                student_id: student_id.as_str(),
                status: "failed",
                risk_tier: None,
                risk_score: None,
                probability: None,
                top_recommendations: None,
                error: Some(error.as_str()),
            },
        }
    }
}

// ==========================================
// BatchPredictor - 批量预测器
// ==========================================
pub struct BatchPredictor {
    predictor: Arc<dyn DropoutPredictor>,
    mapper: FieldMapper,
    top_recommendations: usize,
    progress_interval: usize,
}

impl BatchPredictor {
    /// 创建批量预测器
    ///
    /// # 参数
    /// - predictor: 预测器
    /// - top_recommendations: 每行保留的建议条数
    /// - progress_interval: 进度日志间隔 (行)
    pub fn new(
        predictor: Arc<dyn DropoutPredictor>,
        top_recommendations: usize,
        progress_interval: usize,
    ) -> Self {
        Self {
            predictor,
            mapper: FieldMapper::new(),
            top_recommendations,
            progress_interval: progress_interval.max(1),
        }
    }

    /// 使用规则引擎 + 配置项创建
    pub fn from_config(config: &ConfigManager) -> Self {
        Self::new(
            Arc::new(RiskEngine::new()),
            config.get_batch_top_recommendations(),
            config.get_batch_progress_interval(),
        )
    }

    /// 逐行评估
    pub fn process(&self, records: &[RawRecord]) -> BatchReport {
        let total = records.len();
        let mut results = Vec::with_capacity(total);

        for (row, record) in records.iter().enumerate() {
            let student_id = self.mapper.student_id(record, row);

            let result = match self.mapper.map_to_features(record, row) {
                Ok(features) => {
                    let assessment = self.predictor.predict(&features);
                    BatchRecord::Scored {
                        student_id,
                        risk_tier: assessment.risk_tier,
                        risk_score: assessment.risk_score,
                        probability: assessment.probability,
                        top_recommendations: assessment
                            .recommendations
                            .into_iter()
                            .take(self.top_recommendations)
                            .collect(),
                    }
                }
                Err(e) => {
                    tracing::warn!(row, student_id = %student_id, error = %e, "学生记录处理失败");
                    BatchRecord::Failed {
                        student_id,
                        error: e.to_string(),
                    }
                }
            };
            results.push(result);

            if (row + 1) % self.progress_interval == 0 {
                tracing::info!(processed = row + 1, total, "批量预测进度");
            }
        }

        let summary = BatchSummary::from_records(&results);
        let report = BatchReport {
            batch_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now(),
            model: self.predictor.model(),
            records: results,
            summary,
        };

        tracing::info!(
            batch_id = %report.batch_id,
            total = report.summary.total,
            errors = report.summary.errors,
            high_risk = report.summary.high_risk_count,
            "批量预测完成"
        );
        report
    }

    /// 解析名册文件后逐行评估
    pub fn process_file<P: AsRef<Path>>(&self, input: P) -> ImportResult<BatchReport> {
        let input = input.as_ref();
        let records = UniversalFileParser.parse(input)?;
        tracing::info!(path = %input.display(), rows = records.len(), "学生名册已加载");
        Ok(self.process(&records))
    }
}

/// CSV 输出路径: 与 JSON 同名, 扩展名替换为 .csv
pub fn csv_path_for(json_path: &Path) -> PathBuf {
    json_path.with_extension("csv")
}

/// 保存批量结果 (JSON + 同名 CSV), 返回 CSV 路径
pub fn save_results(report: &BatchReport, json_path: &Path) -> ImportResult<PathBuf> {
    if let Some(parent) = json_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| ImportError::FileWriteError(format!("{}: {}", parent.display(), e)))?;
    }

    let csv_path = csv_path_for(json_path);
    let mut writer = csv::Writer::from_path(&csv_path)?;
    for record in &report.records {
        writer.serialize(CsvRow::from(record))?;
    }
    writer
        .flush()
        .map_err(|e| ImportError::FileWriteError(format!("{}: {}", csv_path.display(), e)))?;
    tracing::info!(path = %csv_path.display(), "批量结果已保存 (CSV)");

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(json_path, json)
        .map_err(|e| ImportError::FileWriteError(format!("{}: {}", json_path.display(), e)))?;
    tracing::info!(path = %json_path.display(), "批量结果已保存 (JSON)");

    Ok(csv_path)
}
