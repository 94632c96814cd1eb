//! # 花括号字面量
//!
//! 解析 `{...}` 内（已去除首尾空白）的文本。

use super::snippet;
use crate::error::MarkupError;
use crate::value::RawValue;

/// 解析花括号内的字面量
///
/// 按顺序尝试：
/// - 空 → `Null`
/// - `[` 开头 → JSON 数组
/// - 整体被双引号包围 → 字符串（去掉引号）
/// - `true` / `false`（大小写不敏感）→ 布尔
/// - 有限数字 → 数字
pub(super) fn parse_brace_literal(raw: &str, name: &str) -> Result<RawValue, MarkupError> {
    if raw.is_empty() {
        return Ok(RawValue::Null);
    }

    if raw.starts_with('[') {
        return serde_json::from_str::<Vec<serde_json::Value>>(raw)
            .map(|items| RawValue::List(items.into_iter().map(RawValue::from).collect()))
            .map_err(|_| MarkupError::InvalidArrayLiteral {
                name: name.to_string(),
                token: snippet(raw),
            });
    }

    // 单个 `"` 同时满足首尾条件，结果为空字符串
    if raw.starts_with('"') && raw.ends_with('"') {
        let inner = &raw[1..];
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        return Ok(RawValue::String(inner.to_string()));
    }

    if raw.eq_ignore_ascii_case("true") {
        return Ok(RawValue::Bool(true));
    }
    if raw.eq_ignore_ascii_case("false") {
        return Ok(RawValue::Bool(false));
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(RawValue::Number(n)),
        _ => Err(MarkupError::UnsupportedValueLiteral {
            name: name.to_string(),
            token: snippet(raw),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(parse_brace_literal("", "x"), Ok(RawValue::Null));
        assert_eq!(parse_brace_literal("3", "x"), Ok(RawValue::Number(3.0)));
        assert_eq!(parse_brace_literal("-0.5", "x"), Ok(RawValue::Number(-0.5)));
        assert_eq!(parse_brace_literal("TRUE", "x"), Ok(RawValue::Bool(true)));
        assert_eq!(parse_brace_literal("False", "x"), Ok(RawValue::Bool(false)));
        assert_eq!(
            parse_brace_literal(r##""#000000""##, "x"),
            Ok(RawValue::String("#000000".to_string()))
        );
        assert_eq!(
            parse_brace_literal(r#""""#, "x"),
            Ok(RawValue::String(String::new()))
        );
    }

    #[test]
    fn test_lone_quote_is_empty_string() {
        assert_eq!(
            parse_brace_literal(r#"""#, "x"),
            Ok(RawValue::String(String::new()))
        );
    }

    #[test]
    fn test_array() {
        let value = parse_brace_literal(r##"["#fff", 2, null]"##, "colors").unwrap();
        assert_eq!(
            value,
            RawValue::List(vec![
                RawValue::from("#fff"),
                RawValue::Number(2.0),
                RawValue::Null
            ])
        );
    }

    #[test]
    fn test_invalid_array_reports_snippet() {
        let err = parse_brace_literal(r##"["#fff", "#000000000000000"##, "colors").unwrap_err();
        assert_eq!(
            err,
            MarkupError::InvalidArrayLiteral {
                name: "colors".to_string(),
                token: r##"["#fff", "#00000"##.to_string(),
            }
        );
    }

    #[test]
    fn test_identifier_is_unsupported() {
        let err = parse_brace_literal("someVariable", "speed").unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnsupportedValueLiteral {
                name: "speed".to_string(),
                token: "someVariable".to_string(),
            }
        );
        assert!(parse_brace_literal("inf", "speed").is_err());
    }
}
