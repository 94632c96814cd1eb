//! # Value 模块
//!
//! 定义扫描器 / JSON 读取器产出的未定型取值 [`RawValue`]，
//! 以及承载它们的有序映射 [`AttributeMap`]。
//!
//! ## 取值转换
//!
//! `as_*` 系列方法是**全函数**：类型不符或解析失败时返回 `None`，
//! 由调用方回退到字段默认值，从不报错。

use std::fmt;

/// 未定型的原始取值
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// 空值，如 `{}` 或 JSON `null`
    Null,
    /// 布尔值，如 `{true}`
    Bool(bool),
    /// 数字，如 `{0.75}`
    Number(f64),
    /// 字符串，如 `"square"`
    String(String),
    /// 数组，如 `{["#fff", "#000"]}`
    List(Vec<RawValue>),
}

impl RawValue {
    /// 转为浮点数：数字直接取值，字符串按小数解析
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Number(n) => Some(*n as f32),
            Self::String(s) => s.parse::<f32>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    /// 转为整数：数字向零截断，字符串按整数解析
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Number(n) => Some(*n as i32),
            Self::String(s) => s.parse::<i32>().ok(),
            _ => None,
        }
    }

    /// 仅字符串返回自身
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// 转为字符串列表
    ///
    /// 非字符串元素取其显示形式，`Null` 元素被丢弃。
    pub fn as_string_list(&self) -> Option<Vec<String>> {
        match self {
            Self::List(items) => Some(
                items
                    .iter()
                    .filter(|v| !matches!(v, Self::Null))
                    .map(|v| v.to_string())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// 类型名（用于日志）
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    match item {
                        Self::String(s) => write!(f, "{s:?}")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "]")
            }
        }
    }
}

impl From<serde_json::Value> for RawValue {
    /// JSON 对象没有对应变体，映射为 `Null`
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null | Value::Object(_) => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// 属性名 → 原始取值的有序映射
///
/// 保持首次插入的顺序；同名属性后写覆盖先写。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, RawValue)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或覆盖，返回被覆盖的旧值
    pub fn insert(&mut self, name: impl Into<String>, value: RawValue) -> Option<RawValue> {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
