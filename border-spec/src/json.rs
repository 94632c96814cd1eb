//! # JSON 读取
//!
//! 把 JSON 对象文本读成与标签扫描相同形状的 [`AttributeMap`]。

use serde_json::Value;

use crate::error::{SpecError, SpecResult};
use crate::value::{AttributeMap, RawValue};

/// 读取 JSON 对象：顶层键即字段名
pub fn read_json_object(text: &str) -> SpecResult<AttributeMap> {
    let value: Value = serde_json::from_str(text)?;

    match value {
        Value::Object(obj) => Ok(obj
            .into_iter()
            .map(|(key, value)| (key, RawValue::from(value)))
            .collect()),
        other => Err(SpecError::NotAnObject {
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Array(_) => "数组",
        Value::Object(_) => "对象",
    }
}
