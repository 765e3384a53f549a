// ==========================================
// 学生辍学风险评估 - 导入层
// ==========================================
// 职责: 学生名册导入与批量预测
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod batch;
pub mod error;
pub mod field_mapper;
pub mod file_parser;

// 重导出核心类型
pub use batch::{save_results, BatchPredictor, BatchRecord, BatchReport, BatchSummary, TierCount};
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use file_parser::{CsvParser, ExcelParser, FileParser, RawRecord, UniversalFileParser};
