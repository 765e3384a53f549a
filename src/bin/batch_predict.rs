// 批量预测: 对整班/整校学生名册逐行评估, 输出 JSON + CSV 并打印汇总。
//
// Usage:
//   cargo run --bin batch_predict -- <input.csv|input.xlsx> [output.json]
//
// 未指定输出路径时使用配置项 batch_output_path (默认 results/batch_predictions.json)。

use std::path::PathBuf;

use anyhow::Context;
use student_dropout_risk::config::ConfigManager;
use student_dropout_risk::importer::{save_results, BatchPredictor};
use student_dropout_risk::{i18n, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(v) => PathBuf::from(v),
        None => {
            eprintln!("Usage: batch_predict <input_csv|input_xlsx> [output_json]");
            eprintln!("Example: batch_predict data/students.csv results/predictions.json");
            std::process::exit(1);
        }
    };

    let config = ConfigManager::load().context("加载配置失败")?;
    i18n::set_locale(&config.get_locale());

    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.get_batch_output_path());

    tracing::info!(input = %input.display(), output = %output.display(), "开始批量预测");

    let predictor = BatchPredictor::from_config(&config);
    let report = predictor
        .process_file(&input)
        .with_context(|| format!("处理学生名册失败: {}", input.display()))?;

    let csv_path = save_results(&report, &output)
        .with_context(|| format!("保存结果失败: {}", output.display()))?;

    for line in report.summary.summary_lines() {
        eprintln!("{}", line);
    }
    tracing::info!(
        json = %output.display(),
        csv = %csv_path.display(),
        "批量预测完成"
    );
    Ok(())
}
