//! # Markup 模块
//!
//! 解析单个 JSX 风格的 `<PulsingBorder ... />` 标签（手写扫描，无正则依赖）。
//!
//! ## 流程
//!
//! ```text
//! 原始文本 → [定位标签] → 属性体 → [属性扫描] → AttributeMap
//! ```
//!
//! ## 支持的取值写法
//!
//! - 字符串：`fit="cover"`
//! - 花括号字面量：`spots={3}`、`bloom={0.45}`、`debug={true}`、`colorBack={"#000"}`
//! - 花括号数组：`colors={["#0dc1fd", "#d915ef"]}`
//!
//! 花括号与引号都按**第一个**结束字符截断：不支持嵌套花括号，也没有转义。
//!
//! ## 模块结构
//!
//! - `scanner`: 属性扫描器
//! - `literal`: 花括号内字面量解析

mod literal;
mod scanner;


use crate::error::MarkupError;
use crate::value::AttributeMap;

pub use scanner::scan_attributes;

/// 开标签字面量
pub const TAG_OPEN: &str = "<PulsingBorder";

/// 诊断 token 的最大字符数
pub const TOKEN_SNIPPET_LEN: usize = 16;

/// 截取诊断 token（按字符计数，不会切断 UTF-8）
pub(crate) fn snippet(s: &str) -> String {
    s.chars().take(TOKEN_SNIPPET_LEN).collect()
}

/// 定位标签并返回属性体
///
/// 属性体是标签名之后、闭合标记之前的文本。
/// 闭合标记优先查找 `/>`，找不到再查找 `>`。
pub fn extract_tag_body(snippet_text: &str) -> Result<&str, MarkupError> {
    let start = snippet_text
        .find(TAG_OPEN)
        .ok_or_else(|| MarkupError::MissingTagOpen {
            token: TAG_OPEN.to_string(),
        })?;
    let after_start = start + TAG_OPEN.len();
    let rest = &snippet_text[after_start..];

    let end = rest
        .find("/>")
        .or_else(|| rest.find('>'))
        .ok_or_else(|| MarkupError::MissingTagClose {
            token: "/>".to_string(),
        })?;

    Ok(&rest[..end])
}

/// 定位标签并扫描全部属性
pub fn parse_markup(snippet_text: &str) -> Result<AttributeMap, MarkupError> {
    let body = extract_tag_body(snippet_text)?;
    scan_attributes(body)
}
