//! 输入文档加载（整读，不做流式解析）
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Result, SplitError};
use crate::options::ELEMENTS_KEY;

/// 读取并解析整个 JSON 文件
/// - 文件不存在/不可读/非 UTF-8 → `ReadInput`
/// - 非法 JSON → `Parse`
pub fn load_document(path: &Path) -> Result<Value> {
    let read_err = |source| SplitError::ReadInput { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(read_err)?;

    serde_json::from_str(&buf).map_err(|source| SplitError::Parse { path: path.to_path_buf(), source })
}

/// 取出 `elements` 序列；字段缺失视为空序列
pub fn elements(doc: &Value) -> Result<&[Value]> {
    let obj = doc.as_object().ok_or(SplitError::NotAnObject)?;
    match obj.get(ELEMENTS_KEY) {
        None => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(_) => Err(SplitError::ElementsNotArray(ELEMENTS_KEY)),
    }
}
