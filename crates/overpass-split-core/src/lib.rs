//! Overpass JSON 拆分库
//!
//! 要点：
//! - 整读输入文档，取 `elements` 列表（缺失视为空）。
//! - 每个带非 null `id` 的元素写成 `<output_dir>/<id>.json`，2 空格缩进、非 ASCII 原样、字段顺序不变。
//! - 无 id 的元素静默跳过；汇总计数为原始条目总数。
//! - 串行执行，任何 I/O 或解析错误都是致命的。

mod document;
mod error;
mod options;
mod split;
mod types;
mod writer;

pub use document::{elements, load_document};
pub use error::{Result, SplitError};
pub use options::{SplitOptions, SplitStats, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, ELEMENTS_KEY, ID_KEY};
pub use split::{split_document, summary_line};
pub use types::{element_id, ElementId};
pub use writer::{to_pretty_json, write_element};
