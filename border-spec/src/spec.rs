//! # Spec 模块
//!
//! 把原始映射合并到默认参数上，得到 [`BorderSpec`]。
//!
//! ## 使用流程
//!
//! ```text
//! JSON 文本 ─► read_json_object() ─┐
//!                                  ├─► AttributeMap ─► BorderSpec::from_map()
//! 标签文本 ─► parse_markup() ──────┘
//! ```
//!
//! 两种输入共享同一个 [`BorderSpec::from_map`]，默认值只来自
//! [`BorderParams::default`]。

use serde::Serialize;

use crate::error::SpecResult;
use crate::json::read_json_object;
use crate::markup::parse_markup;
use crate::params::{AspectRatio, BorderParams, Fit};
use crate::value::{AttributeMap, RawValue};

/// 可识别的字段名（含仅供渲染表面使用的 `width` / `height`）
pub const FIELD_NAMES: &[&str] = &[
    "width",
    "height",
    "colors",
    "colorBack",
    "roundness",
    "thickness",
    "margin",
    "marginLeft",
    "marginRight",
    "marginTop",
    "marginBottom",
    "aspectRatio",
    "softness",
    "intensity",
    "bloom",
    "spots",
    "spotSize",
    "pulse",
    "smoke",
    "smokeSize",
    "speed",
    "frame",
    "fit",
    "scale",
    "rotation",
    "originX",
    "originY",
    "offsetX",
    "offsetY",
    "worldWidth",
    "worldHeight",
];

/// 解析结果：参数记录 + 可选的画布尺寸
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BorderSpec {
    /// 画布宽度（像素），仅渲染表面使用
    pub width: Option<i32>,
    /// 画布高度（像素），仅渲染表面使用
    pub height: Option<i32>,
    pub params: BorderParams,
}

impl BorderSpec {
    /// 从 JSON 对象文本构建
    pub fn from_json(text: &str) -> SpecResult<Self> {
        let map = read_json_object(text)?;
        Ok(Self::from_map(&map))
    }

    /// 从包含 `<PulsingBorder ... />` 的文本构建
    pub fn from_markup(text: &str) -> SpecResult<Self> {
        let map = parse_markup(text)?;
        Ok(Self::from_map(&map))
    }

    /// 自动识别输入格式，见 [`read_attributes`]
    pub fn parse(text: &str) -> SpecResult<Self> {
        let map = read_attributes(text)?;
        Ok(Self::from_map(&map))
    }

    /// 从原始映射构建（唯一的合并路径）
    ///
    /// 缺失或类型不符的字段取默认值，从不报错。
    pub fn from_map(map: &AttributeMap) -> Self {
        for key in map.keys() {
            if !FIELD_NAMES.contains(&key) {
                tracing::debug!(field = %key, "忽略未知字段");
            }
        }

        let fields = FieldReader { map };
        let d = BorderParams::default();

        let params = BorderParams {
            colors: fields
                .get("colors", RawValue::as_string_list)
                .unwrap_or(d.colors),
            color_back: fields
                .get("colorBack", |v| v.as_str().map(str::to_string))
                .unwrap_or(d.color_back),
            roundness: fields.float("roundness", d.roundness),
            thickness: fields.float("thickness", d.thickness),
            margin: fields.get("margin", RawValue::as_float).or(d.margin),
            margin_left: fields.float("marginLeft", d.margin_left),
            margin_right: fields.float("marginRight", d.margin_right),
            margin_top: fields.float("marginTop", d.margin_top),
            margin_bottom: fields.float("marginBottom", d.margin_bottom),
            aspect_ratio: fields.aspect_ratio(d.aspect_ratio),
            softness: fields.float("softness", d.softness),
            intensity: fields.float("intensity", d.intensity),
            bloom: fields.float("bloom", d.bloom),
            spots: fields.get("spots", RawValue::as_int).unwrap_or(d.spots),
            spot_size: fields.float("spotSize", d.spot_size),
            pulse: fields.float("pulse", d.pulse),
            smoke: fields.float("smoke", d.smoke),
            smoke_size: fields.float("smokeSize", d.smoke_size),
            speed: fields.float("speed", d.speed),
            frame: fields.float("frame", d.frame),
            fit: fields.fit(d.fit),
            scale: fields.float("scale", d.scale),
            rotation: fields.float("rotation", d.rotation),
            origin_x: fields.float("originX", d.origin_x),
            origin_y: fields.float("originY", d.origin_y),
            offset_x: fields.float("offsetX", d.offset_x),
            offset_y: fields.float("offsetY", d.offset_y),
            world_width: fields.float("worldWidth", d.world_width),
            world_height: fields.float("worldHeight", d.world_height),
        };

        Self {
            width: fields.get("width", RawValue::as_int),
            height: fields.get("height", RawValue::as_int),
            params,
        }
    }
}

/// 自动识别输入格式并读出原始映射
///
/// 去掉首部空白后以 `{` 开头视为 JSON，否则视为标签。
pub fn read_attributes(text: &str) -> SpecResult<AttributeMap> {
    if text.trim_start().starts_with('{') {
        read_json_object(text)
    } else {
        Ok(parse_markup(text)?)
    }
}

/// 按文件扩展名读出原始映射
///
/// `json`（大小写不敏感）强制按 JSON 读取，其余扩展名交给 [`read_attributes`] 自动识别。
pub fn read_attributes_for_extension(
    text: &str,
    extension: Option<&str>,
) -> SpecResult<AttributeMap> {
    if extension.is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        read_json_object(text)
    } else {
        read_attributes(text)
    }
}

/// 按字段名查找并转换
struct FieldReader<'a> {
    map: &'a AttributeMap,
}

impl FieldReader<'_> {
    /// 查找并转换；值存在但转换失败时记录警告
    fn get<T>(&self, name: &str, coerce: impl Fn(&RawValue) -> Option<T>) -> Option<T> {
        let raw = self.map.get(name)?;
        let value = coerce(raw);
        if value.is_none() && !matches!(raw, RawValue::Null) {
            tracing::warn!(
                field = %name,
                kind = raw.kind(),
                value = %raw,
                "字段类型不匹配，使用默认值"
            );
        }
        value
    }

    fn float(&self, name: &str, default: f32) -> f32 {
        self.get(name, RawValue::as_float).unwrap_or(default)
    }

    fn aspect_ratio(&self, default: AspectRatio) -> AspectRatio {
        let Some(s) = self.get("aspectRatio", |v| v.as_str().map(str::to_string)) else {
            return default;
        };
        let parsed = AspectRatio::parse_lenient(&s);
        if parsed == AspectRatio::Auto && !s.eq_ignore_ascii_case("auto") {
            tracing::warn!(value = %s, "未知 aspectRatio，降级为 auto");
        }
        parsed
    }

    fn fit(&self, default: Fit) -> Fit {
        let Some(s) = self.get("fit", |v| v.as_str().map(str::to_string)) else {
            return default;
        };
        let parsed = Fit::parse_lenient(&s);
        if parsed == Fit::Contain && !s.eq_ignore_ascii_case("contain") {
            tracing::warn!(value = %s, "未知 fit，降级为 contain");
        }
        parsed
    }
}
