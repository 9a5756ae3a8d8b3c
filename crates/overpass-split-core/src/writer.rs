//! 单个元素落盘
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, SplitError};
use crate::types::ElementId;

/// 2 空格缩进，非 ASCII 字符原样保留，字段顺序与输入一致，末尾无换行
pub fn to_pretty_json(id: &ElementId<'_>, element: &Value) -> Result<String> {
    serde_json::to_string_pretty(element).map_err(|source| SplitError::Serialize { id: id.to_string(), source })
}

/// 将元素写入 `<dir>/<id>.json`，已存在则覆盖；返回写入路径
pub fn write_element(dir: &Path, id: &ElementId<'_>, element: &Value) -> Result<PathBuf> {
    let path = dir.join(id.file_name()?);
    let body = to_pretty_json(id, element)?;

    let write_err = |source| SplitError::WriteElement { path: path.clone(), source };
    let mut out = BufWriter::new(File::create(&path).map_err(write_err)?);
    out.write_all(body.as_bytes()).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    Ok(path)
}
