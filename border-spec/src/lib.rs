//! # Border Spec
//!
//! PulsingBorder 效果的参数规格解析库。
//!
//! ## 架构概述
//!
//! `border-spec` 是纯逻辑核心，不依赖任何 IO 或渲染引擎。
//! 它把松散的文本描述规范化为强类型、字段齐全的参数记录，
//! 渲染层（shader、逐帧时间、屏幕空间几何）只消费结果：
//!
//! ```text
//! JSON / <PulsingBorder .../>
//!   │
//!   ▼
//! AttributeMap ──► BorderSpec::from_map() ──► BorderSpec { width, height, params }
//!                                                   │
//!                         Rgba::parse() ◄───────────┘（渲染层按需转换颜色）
//! ```
//!
//! ## 核心类型
//!
//! - [`BorderSpec`]：解析结果（参数记录 + 可选画布尺寸）
//! - [`BorderParams`]：规范化参数记录，`Default` 即默认值表
//! - [`Rgba`]：归一化颜色
//! - [`RawValue`] / [`AttributeMap`]：解析过程中的未定型取值
//!
//! ## 使用示例
//!
//! ```ignore
//! use border_spec::BorderSpec;
//!
//! let spec = BorderSpec::from_markup(r#"<PulsingBorder spots={3} fit="cover" />"#)?;
//! let margins = spec.params.resolve_margins();
//! let palette = spec.params.palette();
//! ```
//!
//! ## 模块结构
//!
//! - [`color`]：颜色字面量 → RGBA
//! - [`value`]：原始取值与取值转换
//! - [`markup`]：标签定位与属性扫描
//! - [`json`]：JSON 对象读取
//! - [`params`]：参数记录与默认值
//! - [`spec`]：合并构建
//! - [`error`]：错误类型定义

pub mod color;
pub mod error;
pub mod json;
pub mod markup;
pub mod params;
pub mod spec;
pub mod value;

// 重导出核心类型
pub use color::{Rgba, parse_color};
pub use error::{MarkupError, SpecError, SpecResult};
pub use json::read_json_object;
pub use markup::{TAG_OPEN, extract_tag_body, parse_markup, scan_attributes};
pub use params::{
    AspectRatio, BorderParams, DEFAULT_COLOR_BACK, DEFAULT_COLORS, Fit, MotionParams,
    ResolvedMargins, SizingParams,
};
pub use spec::{BorderSpec, read_attributes, read_attributes_for_extension};
pub use value::{AttributeMap, RawValue};
