//! # Color 模块
//!
//! 把 CSS 风格的颜色字面量转换为归一化 RGBA。
//!
//! 支持三种写法：
//!
//! ```text
//! #rgb / #rrggbb / #rrggbbaa
//! rgb(255, 0, 0) / rgba(255, 0, 0, 0.5)
//! hsl(120, 100%, 50%) / hsla(120, 100%, 50%, 0.5)
//! ```
//!
//! 解析**永远不会失败**：空输入、格式错误、未知前缀一律降级为不透明黑色，
//! 渲染路径不会因为一个坏颜色而中断。手写解析，无正则依赖。

use serde::Serialize;

/// 归一化颜色，四个分量都在 [0, 1] 内
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// 不透明黑色，所有解析失败的降级值
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// 创建颜色，各分量会被钳制到 [0, 1]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: clamp01(r),
            g: clamp01(g),
            b: clamp01(b),
            a: clamp01(a),
        }
    }

    /// 解析颜色字面量，失败时返回 [`Rgba::BLACK`]
    pub fn parse(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::BLACK;
        }

        if let Some(hex) = text.strip_prefix('#') {
            parse_hex(hex)
        } else if starts_with_ignore_case(text, "rgb") {
            parse_rgb(text)
        } else if starts_with_ignore_case(text, "hsl") {
            parse_hsl(text)
        } else {
            None
        }
        .unwrap_or(Self::BLACK)
    }

    /// 按 `[r, g, b, a]` 顺序输出，便于上传为 shader uniform
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

/// 解析可能缺失的颜色字段
pub fn parse_color(text: Option<&str>) -> Rgba {
    text.map(Rgba::parse).unwrap_or(Rgba::BLACK)
}

/// 钳制到 [0, 1]；NaN 视为 0
fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.len() >= prefix.len()
        && s.chars()
            .zip(prefix.chars())
            .all(|(a, b)| a.eq_ignore_ascii_case(&b))
}

// -------------------------------------------------------------------------
// Hex
// -------------------------------------------------------------------------

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let mut value = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect::<String>(),
        _ => hex.to_string(),
    };
    if value.len() == 6 {
        value.push_str("ff");
    }
    if value.len() != 8 {
        return None;
    }

    // 已确认全是 ASCII，按字节切片是安全的
    let channel = |i: usize| -> Option<f32> {
        u8::from_str_radix(&value[i..i + 2], 16)
            .ok()
            .map(|byte| byte as f32 / 255.0)
    };

    Some(Rgba::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
}

// -------------------------------------------------------------------------
// 函数写法：rgb()/rgba()/hsl()/hsla()
// -------------------------------------------------------------------------

/// 函数写法的三个主分量与可选 alpha 原文
struct FnComponents<'a> {
    values: [f32; 3],
    alpha: Option<&'a str>,
}

impl FnComponents<'_> {
    /// alpha 缺失或不是合法小数（如 `1.2.3`）时为 1
    fn alpha_or_opaque(&self) -> f32 {
        self.alpha
            .and_then(|s| s.parse::<f32>().ok())
            .unwrap_or(1.0)
    }
}

/// 函数写法的游标
struct FnCursor<'a> {
    rest: &'a str,
}

impl<'a> FnCursor<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    }

    fn eat(&mut self, expected: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(expected)?;
        Some(())
    }

    /// 函数名：`name` 或 `name` + `a`，大小写不敏感
    fn eat_function_name(&mut self, name: &str) -> Option<()> {
        let head = self.rest.get(..name.len())?;
        if !head.eq_ignore_ascii_case(name) {
            return None;
        }
        self.rest = &self.rest[name.len()..];
        if let Some(rest) = self.rest.strip_prefix(['a', 'A']) {
            self.rest = rest;
        }
        Some(())
    }

    /// 连续的 ASCII 字符，至少一个
    fn take_run(&mut self, accept: impl Fn(char) -> bool) -> Option<&'a str> {
        let end = self
            .rest
            .find(|c: char| !accept(c))
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (run, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(run)
    }

    fn unsigned(&mut self) -> Option<f32> {
        self.take_run(|c| c.is_ascii_digit())?.parse::<f32>().ok()
    }

    fn decimal_run(&mut self) -> Option<&'a str> {
        self.take_run(|c| c.is_ascii_digit() || c == '.')
    }

    fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}

/// 匹配 `name[a]( X , Y , Z [, A] )`，`percent` 为真时 Y、Z 需紧跟 `%`
fn parse_function<'a>(input: &'a str, name: &str, percent: bool) -> Option<FnComponents<'a>> {
    let mut cursor = FnCursor::new(input);
    cursor.eat_function_name(name)?;
    cursor.skip_whitespace();
    cursor.eat('(')?;

    let mut values = [0.0f32; 3];
    for (i, slot) in values.iter_mut().enumerate() {
        if i > 0 {
            cursor.eat(',')?;
        }
        cursor.skip_whitespace();
        *slot = cursor.unsigned()?;
        if percent && i > 0 {
            cursor.eat('%')?;
        }
        cursor.skip_whitespace();
    }

    let alpha = if cursor.eat(',').is_some() {
        cursor.skip_whitespace();
        Some(cursor.decimal_run()?)
    } else {
        None
    };

    cursor.skip_whitespace();
    cursor.eat(')')?;
    cursor.skip_whitespace();
    if !cursor.is_empty() {
        return None;
    }

    Some(FnComponents { values, alpha })
}

fn parse_rgb(input: &str) -> Option<Rgba> {
    let parts = parse_function(input, "rgb", false)?;
    let [r, g, b] = parts.values;
    Some(Rgba::new(
        r / 255.0,
        g / 255.0,
        b / 255.0,
        parts.alpha_or_opaque(),
    ))
}

fn parse_hsl(input: &str) -> Option<Rgba> {
    let parts = parse_function(input, "hsl", true)?;
    let [h, s, l] = parts.values;
    Some(hsl_to_rgba(h, s, l, parts.alpha_or_opaque()))
}

/// HSL → RGB
///
/// `hue` 为角度，`saturation` / `lightness` 为百分数（0-100）。
fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Rgba {
    let h = (hue % 360.0 + 360.0) % 360.0;
    let s = clamp01(saturation / 100.0);
    let l = clamp01(lightness / 100.0);
    let a = clamp01(alpha);

    if s == 0.0 {
        return Rgba::new(l, l, l, a);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let t = h / 360.0;

    Rgba::new(
        hue_to_channel(p, q, t + 1.0 / 3.0),
        hue_to_channel(p, q, t),
        hue_to_channel(p, q, t - 1.0 / 3.0),
        a,
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
