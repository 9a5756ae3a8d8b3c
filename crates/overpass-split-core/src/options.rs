//! 拆分选项与统计信息（模块）
use std::path::PathBuf;

/// 默认输入文件（从 Overpass 下载的 JSON）
pub const DEFAULT_INPUT: &str = "hue.json";
/// 默认输出目录（每个 element 一个文件）
pub const DEFAULT_OUTPUT_DIR: &str = "elements";
/// 顶层列表字段名
pub const ELEMENTS_KEY: &str = "elements";
/// 标识字段名（同时用于文件命名）
pub const ID_KEY: &str = "id";

/// 拆分选项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// 输入 JSON 文件路径
    pub input: PathBuf,
    /// 输出目录；不存在时自动创建（含父目录），已存在时不清空
    pub output_dir: PathBuf,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// 拆分统计信息（便于 CLI 打印）
/// 恒有 `files_written + skipped == elements_total`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitStats {
    /// 原始 elements 条目总数（含被跳过的）
    pub elements_total: usize,
    pub files_written: usize,
    /// 缺少 id 或 id 为 null 的条目
    pub skipped: usize,
}
