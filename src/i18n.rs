// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持英文（默认）和中文
// 范围: 仅边界层提示信息; 评估结果中的建议文案固定为英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 支持的语言, 首项为默认语言
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh-CN"];

/// 是否为支持的语言代码
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use student_dropout_risk::i18n::t;
/// let msg = t("validation.invalid_input");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use student_dropout_risk::i18n::t_with_args;
/// let msg = t_with_args("validation.missing_field", &[("field", "gpa")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // locale 为全局状态, 涉及文案断言的测试需持有此锁
    pub(crate) static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_supported_locales() {
        assert!(is_supported("en"));
        assert!(is_supported("zh-CN"));
        assert!(!is_supported("fr"));
        assert!(!is_supported("EN"));
    }

    #[test]
    fn test_switch_locale_changes_fallback_message() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
        assert_eq!(t("prediction.failed"), "预测处理失败");

        set_locale("en");
        assert_eq!(t("prediction.failed"), "Failed to process prediction");
    }

    #[test]
    fn test_validation_message_with_field() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        let msg = t_with_args("validation.not_a_number", &[("field", "attendanceRate")]);
        assert_eq!(msg, "Field attendanceRate must be a number");

        set_locale("zh-CN");
        let msg = t_with_args("validation.missing_field", &[("field", "gpa")]);
        assert_eq!(msg, "缺少必填字段: gpa");

        set_locale("en");
    }
}
