//! # Params 模块
//!
//! 规范化后的 PulsingBorder 参数记录。
//!
//! [`BorderParams::default`] 是所有字段默认值的**唯一来源**：
//! JSON、标签、无输入三条构造路径都从这里取默认值。

use serde::Serialize;

use crate::color::{Rgba, parse_color};

/// 默认调色板
pub const DEFAULT_COLORS: [&str; 3] = ["#0dc1fd", "#d915ef", "#ff3f2ecc"];

/// 默认背景色
pub const DEFAULT_COLOR_BACK: &str = "#000000";

/// 宽高比模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    /// 跟随容器
    #[default]
    Auto,
    /// 强制正方形
    Square,
}

impl AspectRatio {
    /// 宽松解析（大小写不敏感），无法识别时返回 `Auto`
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "square" => Self::Square,
            _ => Self::Auto,
        }
    }

    /// shader uniform 取值
    pub fn uniform_value(self) -> f32 {
        match self {
            Self::Auto => 0.0,
            Self::Square => 1.0,
        }
    }
}

/// 内容相对容器的缩放方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    /// 不缩放
    None,
    /// 完整放入容器
    #[default]
    Contain,
    /// 铺满容器
    Cover,
}

impl Fit {
    /// 宽松解析（大小写不敏感），无法识别时返回 `Contain`
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "none" => Self::None,
            "cover" => Self::Cover,
            _ => Self::Contain,
        }
    }

    /// shader uniform 取值
    pub fn uniform_value(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Contain => 1.0,
            Self::Cover => 2.0,
        }
    }
}

/// 四边最终边距
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ResolvedMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// 动画参数视图
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionParams {
    /// 时间流速
    pub speed: f32,
    /// 起始时间（秒）
    pub frame: f32,
}

/// 尺寸 / 摆放参数视图
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SizingParams {
    pub fit: Fit,
    pub scale: f32,
    /// 旋转角度（度）
    pub rotation: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    /// 世界空间宽度，0 表示跟随画布
    pub world_width: f32,
    /// 世界空间高度，0 表示跟随画布
    pub world_height: f32,
}

/// PulsingBorder 参数记录
///
/// 构造后每个字段都有值；只有 `margin` 是可选的（缺省表示不覆盖四边）。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BorderParams {
    /// 光斑调色板（颜色字面量）
    pub colors: Vec<String>,
    /// 背景色（颜色字面量）
    pub color_back: String,
    pub roundness: f32,
    pub thickness: f32,
    /// 四边统一边距，存在时覆盖 `margin_*`
    pub margin: Option<f32>,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub aspect_ratio: AspectRatio,
    pub softness: f32,
    pub intensity: f32,
    pub bloom: f32,
    /// 光斑数量
    pub spots: i32,
    pub spot_size: f32,
    pub pulse: f32,
    pub smoke: f32,
    pub smoke_size: f32,
    pub speed: f32,
    pub frame: f32,
    pub fit: Fit,
    pub scale: f32,
    pub rotation: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub world_width: f32,
    pub world_height: f32,
}

impl Default for BorderParams {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
            color_back: DEFAULT_COLOR_BACK.to_string(),
            roundness: 0.25,
            thickness: 0.1,
            margin: None,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
            aspect_ratio: AspectRatio::Auto,
            softness: 0.75,
            intensity: 0.2,
            bloom: 0.25,
            spots: 5,
            spot_size: 0.5,
            pulse: 0.25,
            smoke: 0.3,
            smoke_size: 0.6,
            speed: 1.0,
            frame: 0.0,
            fit: Fit::Contain,
            scale: 0.6,
            rotation: 0.0,
            origin_x: 0.5,
            origin_y: 0.5,
            offset_x: 0.0,
            offset_y: 0.0,
            world_width: 0.0,
            world_height: 0.0,
        }
    }
}

impl BorderParams {
    /// 计算四边边距：`margin` 存在时四边都取它
    pub fn resolve_margins(&self) -> ResolvedMargins {
        match self.margin {
            Some(m) => ResolvedMargins {
                left: m,
                right: m,
                top: m,
                bottom: m,
            },
            None => ResolvedMargins {
                left: self.margin_left,
                right: self.margin_right,
                top: self.margin_top,
                bottom: self.margin_bottom,
            },
        }
    }

    pub fn motion(&self) -> MotionParams {
        MotionParams {
            speed: self.speed,
            frame: self.frame,
        }
    }

    pub fn sizing(&self) -> SizingParams {
        SizingParams {
            fit: self.fit,
            scale: self.scale,
            rotation: self.rotation,
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            offset_x: self.offset_x,
            offset_y: self.offset_y,
            world_width: self.world_width,
            world_height: self.world_height,
        }
    }

    /// 调色板逐项转换为 RGBA（坏颜色降级为黑色）
    pub fn palette(&self) -> Vec<Rgba> {
        self.colors.iter().map(|c| Rgba::parse(c)).collect()
    }

    /// 背景色 RGBA
    pub fn background(&self) -> Rgba {
        parse_color(Some(&self.color_back))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_web_preset() {
        let params = BorderParams::default();
        assert_eq!(params.colors, vec!["#0dc1fd", "#d915ef", "#ff3f2ecc"]);
        assert_eq!(params.color_back, "#000000");
        assert_eq!(params.roundness, 0.25);
        assert_eq!(params.thickness, 0.1);
        assert_eq!(params.margin, None);
        assert_eq!(params.margin_left, 0.0);
        assert_eq!(params.margin_right, 0.0);
        assert_eq!(params.margin_top, 0.0);
        assert_eq!(params.margin_bottom, 0.0);
        assert_eq!(params.aspect_ratio, AspectRatio::Auto);
        assert_eq!(params.softness, 0.75);
        assert_eq!(params.intensity, 0.2);
        assert_eq!(params.bloom, 0.25);
        assert_eq!(params.spots, 5);
        assert_eq!(params.spot_size, 0.5);
        assert_eq!(params.pulse, 0.25);
        assert_eq!(params.smoke, 0.3);
        assert_eq!(params.smoke_size, 0.6);
        assert_eq!(params.speed, 1.0);
        assert_eq!(params.frame, 0.0);
        assert_eq!(params.fit, Fit::Contain);
        assert_eq!(params.scale, 0.6);
        assert_eq!(params.rotation, 0.0);
        assert_eq!(params.origin_x, 0.5);
        assert_eq!(params.origin_y, 0.5);
        assert_eq!(params.offset_x, 0.0);
        assert_eq!(params.offset_y, 0.0);
        assert_eq!(params.world_width, 0.0);
        assert_eq!(params.world_height, 0.0);
    }

    #[test]
    fn test_aspect_ratio_parse_lenient() {
        assert_eq!(AspectRatio::parse_lenient("square"), AspectRatio::Square);
        assert_eq!(AspectRatio::parse_lenient("SQUARE"), AspectRatio::Square);
        assert_eq!(AspectRatio::parse_lenient("diagonal"), AspectRatio::Auto);
        assert_eq!(AspectRatio::parse_lenient(""), AspectRatio::Auto);
    }

    #[test]
    fn test_fit_parse_lenient() {
        assert_eq!(Fit::parse_lenient("none"), Fit::None);
        assert_eq!(Fit::parse_lenient("Cover"), Fit::Cover);
        assert_eq!(Fit::parse_lenient("contain"), Fit::Contain);
        assert_eq!(Fit::parse_lenient("stretch"), Fit::Contain);
    }

    #[test]
    fn test_uniform_values() {
        assert_eq!(AspectRatio::Auto.uniform_value(), 0.0);
        assert_eq!(AspectRatio::Square.uniform_value(), 1.0);
        assert_eq!(Fit::None.uniform_value(), 0.0);
        assert_eq!(Fit::Contain.uniform_value(), 1.0);
        assert_eq!(Fit::Cover.uniform_value(), 2.0);
    }

    #[test]
    fn test_margin_shorthand_overrides_edges() {
        let params = BorderParams {
            margin: Some(2.0),
            margin_left: 5.0,
            ..Default::default()
        };
        assert_eq!(
            params.resolve_margins(),
            ResolvedMargins {
                left: 2.0,
                right: 2.0,
                top: 2.0,
                bottom: 2.0
            }
        );
    }

    #[test]
    fn test_margin_edges_without_shorthand() {
        let params = BorderParams {
            margin_left: 5.0,
            margin_bottom: 1.5,
            ..Default::default()
        };
        assert_eq!(
            params.resolve_margins(),
            ResolvedMargins {
                left: 5.0,
                right: 0.0,
                top: 0.0,
                bottom: 1.5
            }
        );
    }

    #[test]
    fn test_views() {
        let params = BorderParams {
            speed: 2.0,
            frame: 10.0,
            fit: Fit::Cover,
            rotation: 45.0,
            ..Default::default()
        };
        assert_eq!(
            params.motion(),
            MotionParams {
                speed: 2.0,
                frame: 10.0
            }
        );
        let sizing = params.sizing();
        assert_eq!(sizing.fit, Fit::Cover);
        assert_eq!(sizing.rotation, 45.0);
        assert_eq!(sizing.scale, 0.6);
        assert_eq!(sizing.origin_x, 0.5);
    }

    #[test]
    fn test_palette_and_background() {
        let params = BorderParams {
            colors: vec!["#fff".to_string(), "not a color".to_string()],
            ..Default::default()
        };
        assert_eq!(
            params.palette(),
            vec![Rgba::new(1.0, 1.0, 1.0, 1.0), Rgba::BLACK]
        );
        assert_eq!(params.background(), Rgba::BLACK);
    }

    #[test]
    fn test_serialize_camel_case() {
        let json = serde_json::to_value(BorderParams::default()).unwrap();
        assert_eq!(json["colorBack"], "#000000");
        assert_eq!(json["aspectRatio"], "auto");
        assert_eq!(json["fit"], "contain");
        assert_eq!(json["spots"], 5);
        assert!(json["margin"].is_null());
    }
}
