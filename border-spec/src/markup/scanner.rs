//! # 属性扫描器
//!
//! 单游标、从左到右扫描属性体，每个属性依次经过：
//! 跳过空白 → 读属性名 → 期望 `=` → 读取值 → 写入映射。

use super::literal::parse_brace_literal;
use super::snippet;
use crate::error::MarkupError;
use crate::value::{AttributeMap, RawValue};

/// 扫描属性体
///
/// 输入: `colors={["#0dc1fd","#d915ef"]} spots={3} fit="cover"`
/// 输出: `{ colors: List, spots: Number(3), fit: String("cover") }`
pub fn scan_attributes(body: &str) -> Result<AttributeMap, MarkupError> {
    let mut scanner = AttrScanner::new(body);
    let mut map = AttributeMap::new();

    loop {
        scanner.skip_whitespace();
        if scanner.is_at_end() {
            break;
        }

        let name = scanner.read_name()?;
        scanner.expect_equals(name)?;
        let value = scanner.read_value(name)?;

        if map.insert(name, value).is_some() {
            tracing::debug!(name = %name, "重复属性，后者覆盖前者");
        }
    }

    Ok(map)
}

/// 属性扫描器
struct AttrScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> AttrScanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// 当前位置起的诊断 token
    fn token_here(&self) -> String {
        snippet(self.remaining())
    }

    /// 属性名：字母、数字、`_`、`-`
    fn read_name(&mut self) -> Result<&'a str, MarkupError> {
        let start = self.pos;
        while let Some(c) = self.peek_char() {
            if !(c.is_alphanumeric() || c == '_' || c == '-') {
                break;
            }
            self.pos += c.len_utf8();
        }

        if self.pos == start {
            return Err(MarkupError::UnexpectedToken {
                token: self.token_here(),
            });
        }
        Ok(&self.input[start..self.pos])
    }

    fn expect_equals(&mut self, name: &str) -> Result<(), MarkupError> {
        self.skip_whitespace();
        if self.peek_char() != Some('=') {
            return Err(MarkupError::ExpectedEquals {
                name: name.to_string(),
                token: self.token_here(),
            });
        }
        self.pos += 1;
        Ok(())
    }

    fn read_value(&mut self, name: &str) -> Result<RawValue, MarkupError> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(MarkupError::MissingValue {
                name: name.to_string(),
            }),
            Some('"') => self.read_quoted(name),
            Some('{') => self.read_braced(name),
            Some(_) => Err(MarkupError::UnexpectedValueStart {
                name: name.to_string(),
                token: self.token_here(),
            }),
        }
    }

    /// `"..."`：截到下一个 `"`，不处理转义
    fn read_quoted(&mut self, name: &str) -> Result<RawValue, MarkupError> {
        let content_start = self.pos + 1;
        let end = self.input[content_start..]
            .find('"')
            .ok_or_else(|| MarkupError::UnterminatedString {
                name: name.to_string(),
                token: self.token_here(),
            })?;

        let raw = &self.input[content_start..content_start + end];
        self.pos = content_start + end + 1;
        Ok(RawValue::String(raw.to_string()))
    }

    /// `{...}`：截到下一个 `}`，不支持嵌套
    fn read_braced(&mut self, name: &str) -> Result<RawValue, MarkupError> {
        let content_start = self.pos + 1;
        let end = self.input[content_start..]
            .find('}')
            .ok_or_else(|| MarkupError::UnterminatedBrace {
                name: name.to_string(),
                token: self.token_here(),
            })?;

        let raw = self.input[content_start..content_start + end].trim();
        self.pos = content_start + end + 1;
        parse_brace_literal(raw, name)
    }
}
