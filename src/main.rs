// ==========================================
// 学生辍学风险评估 - 单次预测入口
// ==========================================
// 用法:
//   student-dropout-risk [request.json]
// 未指定文件时从 stdin 读取请求体, 结果以 JSON 输出到 stdout
// 失败时输出兜底响应 (model = "Error"), 与预测接口一致
// ==========================================

use std::io::Read;

use anyhow::Context;
use student_dropout_risk::api::{fallback_response, PredictApi};
use student_dropout_risk::config::ConfigManager;
use student_dropout_risk::{i18n, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = ConfigManager::load_or_default();
    i18n::set_locale(&config.get_locale());

    tracing::info!("{} v{}", student_dropout_risk::APP_NAME, student_dropout_risk::VERSION);

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("读取请求文件失败: {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取 stdin 失败")?;
            buf
        }
    };

    let api = PredictApi::default();
    let response = match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(body) => api.predict_or_fallback(&body),
        Err(e) => {
            tracing::error!(error = %e, "请求体不是合法 JSON");
            fallback_response(&e.to_string())
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

