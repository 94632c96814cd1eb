//! # Error 模块
//!
//! 定义 border-spec 中使用的错误类型。
//!
//! 只有标签定位与属性扫描会失败；颜色解析和取值转换永远不会失败，
//! 出错时降级为各自的默认值。

use thiserror::Error;

/// 标记（JSX 标签）解析错误
///
/// 每个变体都携带一个诊断 token：属性名，或未消费输入的前若干个字符。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarkupError {
    /// 找不到 `<PulsingBorder` 开标签
    #[error("缺少 <PulsingBorder> 标签（token: '{token}'）")]
    MissingTagOpen { token: String },

    /// 找不到 `/>` 或 `>` 闭合标记
    #[error("<PulsingBorder> 缺少闭合的 /> 或 >（token: '{token}'）")]
    MissingTagClose { token: String },

    /// 期望属性名，但遇到了其他字符
    #[error("期望属性名，实际为 '{token}'")]
    UnexpectedToken { token: String },

    /// 属性名后缺少 `=`
    #[error("属性 '{name}' 后期望 '='，实际为 '{token}'")]
    ExpectedEquals { name: String, token: String },

    /// `=` 后输入已结束
    #[error("属性 '{name}' 缺少取值")]
    MissingValue { name: String },

    /// 字符串缺少结束引号
    #[error("属性 '{name}' 的字符串未闭合：'{token}'")]
    UnterminatedString { name: String, token: String },

    /// 花括号缺少结束的 `}`
    #[error("属性 '{name}' 的花括号未闭合：'{token}'")]
    UnterminatedBrace { name: String, token: String },

    /// 花括号内的数组字面量无效
    #[error("属性 '{name}' 的数组字面量无效：'{token}'")]
    InvalidArrayLiteral { name: String, token: String },

    /// 花括号内的字面量无法识别
    #[error("属性 '{name}' 的取值不受支持：'{token}'")]
    UnsupportedValueLiteral { name: String, token: String },

    /// 取值既不是 `"` 也不是 `{` 开头
    #[error("属性 '{name}' 的取值起始无效：'{token}'")]
    UnexpectedValueStart { name: String, token: String },
}

impl MarkupError {
    /// 诊断 token
    ///
    /// `MissingValue` 没有剩余输入可以引用，返回属性名。
    pub fn token(&self) -> &str {
        match self {
            Self::MissingTagOpen { token }
            | Self::MissingTagClose { token }
            | Self::UnexpectedToken { token }
            | Self::ExpectedEquals { token, .. }
            | Self::UnterminatedString { token, .. }
            | Self::UnterminatedBrace { token, .. }
            | Self::InvalidArrayLiteral { token, .. }
            | Self::UnsupportedValueLiteral { token, .. }
            | Self::UnexpectedValueStart { token, .. } => token,
            Self::MissingValue { name } => name,
        }
    }
}

/// border-spec 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpecError {
    /// 标记解析错误
    #[error("标记解析错误: {0}")]
    Markup(#[from] MarkupError),

    /// JSON 结构解析失败（底层错误信息原样保留）
    #[error("JSON 解析错误: {message}")]
    Json { message: String },

    /// JSON 合法，但顶层不是对象
    #[error("JSON 顶层必须是对象，实际为 {found}")]
    NotAnObject { found: String },
}

impl From<serde_json::Error> for SpecError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type SpecResult<T> = Result<T, SpecError>;
