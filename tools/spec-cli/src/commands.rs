//! # 子命令实现
//!
//! `parse` / `color` / `check` 三个子命令的核心逻辑，与参数解析、输出分离以便测试。

use anyhow::Context;
use border_spec::{BorderSpec, ResolvedMargins, Rgba, SpecError, read_attributes_for_extension};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{CliConfig, OutputFormat};

/// 读取并解析规格文件
///
/// `.json` 扩展名强制按 JSON 解析，其余文件按内容自动识别。
pub fn load_spec(path: &Path) -> anyhow::Result<BorderSpec> {
    let text =
        fs::read_to_string(path).with_context(|| format!("读取规格文件失败: {}", path.display()))?;

    let extension = path.extension().and_then(|ext| ext.to_str());
    let map = read_attributes_for_extension(&text, extension)
        .with_context(|| format!("解析规格失败: {}", path.display()))?;

    debug!(path = %path.display(), "规格解析成功");
    Ok(BorderSpec::from_map(&map))
}

/// 附带渲染层转换结果的输出
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolvedOutput<'a> {
    #[serde(flatten)]
    spec: &'a BorderSpec,
    margins: ResolvedMargins,
    palette: Vec<[f32; 4]>,
    background: [f32; 4],
    aspect_ratio_value: f32,
    fit_value: f32,
}

impl<'a> ResolvedOutput<'a> {
    fn new(spec: &'a BorderSpec) -> Self {
        let params = &spec.params;
        Self {
            spec,
            margins: params.resolve_margins(),
            palette: params.palette().into_iter().map(Rgba::to_array).collect(),
            background: params.background().to_array(),
            aspect_ratio_value: params.aspect_ratio.uniform_value(),
            fit_value: params.fit.uniform_value(),
        }
    }
}

/// 按格式渲染规格
pub fn render_spec(spec: &BorderSpec, format: OutputFormat, resolve: bool) -> anyhow::Result<String> {
    if resolve {
        render(&ResolvedOutput::new(spec), format)
    } else {
        render(spec, format)
    }
}

fn render<T: Serialize + std::fmt::Debug>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Debug => format!("{:#?}", value),
    })
}

/// 颜色字面量 → 一行输出
pub fn describe_color(text: &str) -> String {
    let c = Rgba::parse(text);
    format!(
        "{} -> rgba({:.3}, {:.3}, {:.3}, {:.3})",
        text, c.r, c.g, c.b, c.a
    )
}

/// 目录检查结果
#[derive(Debug, Default)]
pub struct CheckReport {
    /// 检查的文件数量
    pub checked: usize,
    /// 失败的文件及原因
    pub failures: Vec<CheckFailure>,
}

/// 单个文件的失败信息
#[derive(Debug)]
pub struct CheckFailure {
    pub path: PathBuf,
    pub message: String,
    /// 诊断 token（标记错误才有）
    pub token: Option<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// 检查目录下所有规格文件
pub fn check_dir(dir: &Path, config: &CliConfig) -> anyhow::Result<CheckReport> {
    if !dir.exists() {
        anyhow::bail!("路径不存在: {}", dir.display());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| config.accepts_extension(p))
        .collect();
    files.sort();

    info!(dir = %dir.display(), count = files.len(), "开始检查规格文件");

    let mut report = CheckReport::default();
    for path in files {
        report.checked += 1;
        if let Err(err) = load_spec(&path) {
            warn!(path = %path.display(), error = %err, "规格检查失败");
            let token = err
                .downcast_ref::<SpecError>()
                .and_then(|e| match e {
                    SpecError::Markup(m) => Some(m.token().to_string()),
                    _ => None,
                });
            report.failures.push(CheckFailure {
                path,
                message: format!("{err:#}"),
                token,
            });
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_spec_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json = write(dir.path(), "a.json", r#"{"spots": 4}"#);
        let jsx = write(dir.path(), "b.jsx", "<PulsingBorder spots={4} />");

        assert_eq!(load_spec(&json).unwrap(), load_spec(&jsx).unwrap());
    }

    #[test]
    fn test_load_spec_extension_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let upper = write(dir.path(), "c.JSON", "<PulsingBorder spots={4} />");
        assert!(load_spec(&upper).is_err());

        let json_text_in_tsx = write(dir.path(), "d.tsx", r#"{"spots": 4}"#);
        assert_eq!(load_spec(&json_text_in_tsx).unwrap().params.spots, 4);
    }

    #[test]
    fn test_load_spec_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write(dir.path(), "bad.jsx", "<PulsingBorder spots=4 />");

        let err = load_spec(&bad).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("bad.jsx"), "{message}");
        assert!(err.downcast_ref::<SpecError>().is_some());
    }

    #[test]
    fn test_render_formats() {
        let spec = BorderSpec::default();

        let json = render_spec(&spec, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["params"]["spots"], 5);
        assert!(value["width"].is_null());

        let debug = render_spec(&spec, OutputFormat::Debug, false).unwrap();
        assert!(debug.contains("BorderSpec"));
    }

    #[test]
    fn test_render_resolved() {
        let spec = BorderSpec::from_markup("<PulsingBorder margin={3} fit=\"cover\" />").unwrap();
        let json = render_spec(&spec, OutputFormat::Pretty, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["margins"]["left"], 3.0);
        assert_eq!(value["fitValue"], 2.0);
        assert_eq!(value["palette"].as_array().unwrap().len(), 3);
        assert_eq!(value["background"], serde_json::json!([0.0, 0.0, 0.0, 1.0]));
        assert_eq!(value["params"]["fit"], "cover");
    }

    #[test]
    fn test_describe_color() {
        assert_eq!(
            describe_color("rgba(255, 0, 0, 0.5)"),
            "rgba(255, 0, 0, 0.5) -> rgba(1.000, 0.000, 0.000, 0.500)"
        );
        assert_eq!(
            describe_color("oops"),
            "oops -> rgba(0.000, 0.000, 0.000, 1.000)"
        );
    }

    #[test]
    fn test_check_dir() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "ok.json", r#"{"fit": "none"}"#);
        write(dir.path(), "nested/ok.tsx", "<PulsingBorder speed={2} />");
        write(dir.path(), "nested/bad.jsx", "<PulsingBorder speed {2} />");
        write(dir.path(), "bad.json", "[1, 2]");
        write(dir.path(), "notes.md", "not a spec");

        let report = check_dir(dir.path(), &CliConfig::default()).unwrap();
        assert_eq!(report.checked, 4);
        assert!(!report.is_ok());
        assert_eq!(report.failures.len(), 2);

        let markup_failure = report
            .failures
            .iter()
            .find(|f| f.path.ends_with("nested/bad.jsx"))
            .unwrap();
        assert_eq!(markup_failure.token.as_deref(), Some("{2} "));

        let json_failure = report
            .failures
            .iter()
            .find(|f| f.path.ends_with("bad.json"))
            .unwrap();
        assert_eq!(json_failure.token, None);
    }

    #[test]
    fn test_check_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(check_dir(&dir.path().join("nope"), &CliConfig::default()).is_err());
    }
}
