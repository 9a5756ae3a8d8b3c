//! 公共类型（对外暴露）
use serde_json::Value;
use std::fmt;

use crate::error::{Result, SplitError};
use crate::options::ID_KEY;

/// 元素标识：`id` 字段的非 null 值（通常为整数）
#[derive(Debug, Clone, PartialEq)]
pub struct ElementId<'a>(&'a Value);

impl ElementId<'_> {
    /// 输出文件名：`<id>.json`
    /// 目录穿越或空名会被拒绝
    pub fn file_name(&self) -> Result<String> {
        let stem = self.to_string();
        let unsafe_stem = stem.is_empty()
            || stem == "."
            || stem == ".."
            || stem.contains(|c: char| matches!(c, '/' | '\\' | '\0'));
        if unsafe_stem {
            return Err(SplitError::InvalidId(stem));
        }
        Ok(format!("{stem}.json"))
    }
}

/// 字符串直接输出（不带引号），布尔值写作 `True`/`False`，其余按 JSON 文本形式
/// 数字保留输入中的原始写法（超出 u64 的整数不会变成浮点）
impl fmt::Display for ElementId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            other => write!(f, "{other}"),
        }
    }
}

/// 读取元素的 `id`；缺失、为 null 或元素本身不是对象时返回 None
pub fn element_id(element: &Value) -> Option<ElementId<'_>> {
    match element.as_object()?.get(ID_KEY)? {
        Value::Null => None,
        id => Some(ElementId(id)),
    }
}
