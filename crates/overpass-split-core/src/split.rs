//! 拆分主流程：整读 → 逐个元素 → 逐个写文件（串行）
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::document::{elements, load_document};
use crate::error::{Result, SplitError};
use crate::options::{SplitOptions, SplitStats};
use crate::types::element_id;
use crate::writer::write_element;

/// 将输入文档中每个带 id 的元素写成 `<output_dir>/<id>.json`
/// - 先创建输出目录（因此解析失败时目录可能已经存在）
/// - 缺少 id / id 为 null 的条目静默跳过
/// - 任一写入失败立即中止，不做部分成功统计
/// - 重复 id 后写覆盖先写
pub fn split_document(opts: &SplitOptions) -> Result<SplitStats> {
    fs::create_dir_all(&opts.output_dir)
        .map_err(|source| SplitError::CreateDir { path: opts.output_dir.clone(), source })?;

    let doc = load_document(&opts.input)?;
    let items = elements(&doc)?;

    let mut stats = SplitStats { elements_total: items.len(), ..SplitStats::default() };
    for (idx, element) in items.iter().enumerate() {
        let Some(id) = element_id(element) else {
            debug!(idx, "element has no id, skipped");
            stats.skipped += 1;
            continue;
        };
        let path = write_element(&opts.output_dir, &id, element)?;
        debug!(idx, %id, path = %path.display(), "element written");
        stats.files_written += 1;
    }

    Ok(stats)
}

/// 汇总行：计数为原始条目总数（含跳过的）
pub fn summary_line(stats: &SplitStats, output_dir: &Path) -> String {
    format!("Saved {} files into directory '{}'", stats.elements_total, output_dir.display())
}
