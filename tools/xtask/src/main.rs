//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-spec`: 运行 border-spec 覆盖率
//! - `cov-workspace`: 运行 workspace 覆盖率
//! - `spec-check`: 检查规格文件（语法、未知字段）

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use border_spec::read_attributes_for_extension;
use border_spec::spec::FIELD_NAMES;
use walkdir::WalkDir;
use xshell::{Shell, cmd};

fn ensure_cargo_llvm_cov_available(sh: &Shell) -> anyhow::Result<()> {
    if cmd!(sh, "cargo llvm-cov --version").quiet().run().is_err() {
        anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());
    let sh = Shell::new()?;

    match sub.as_str() {
        "check-all" => {
            eprintln!("\n==> cargo fmt --all -- --check");
            cmd!(sh, "cargo fmt --all -- --check").run()?;

            eprintln!("\n==> cargo clippy --workspace --all-targets");
            cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

            eprintln!("\n==> cargo test --workspace");
            cmd!(sh, "cargo test --workspace").run()?;
        }
        "cov-spec" => {
            ensure_cargo_llvm_cov_available(&sh)?;

            eprintln!("\n==> cargo llvm-cov -p border-spec --html");
            cmd!(sh, "cargo llvm-cov -p border-spec --all-features --html").run()?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "cov-workspace" => {
            ensure_cargo_llvm_cov_available(&sh)?;

            // 口径上排除 xtask 以免稀释信号
            eprintln!("\n==> cargo llvm-cov --workspace --exclude xtask --html");
            cmd!(
                sh,
                "cargo llvm-cov --workspace --exclude xtask --all-features --html"
            )
            .run()?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "spec-check" => {
            let path = args.next();
            spec_check(path.as_deref())?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  cov-spec        运行 border-spec 覆盖率报告
  cov-workspace   运行 workspace 覆盖率报告
  spec-check      检查规格文件

SPEC-CHECK:
  cargo xtask spec-check [path]

  不带参数：检查 specs/ 下所有 .json / .jsx / .tsx 文件（扩展名大小写不敏感）
  .json 按 JSON 读取，其余文件按内容自动识别（与 bspec check 一致）
  带路径参数：检查指定文件或目录

  检查内容：
    - JSON / 标签语法错误
    - 未知字段（会被忽略的拼写错误）
"#
    );
}

//=============================================================================
// spec-check 命令实现
//=============================================================================

/// 默认规格目录（相对于 workspace root）
const DEFAULT_SPECS_DIR: &str = "specs";

/// 规格文件扩展名
const SPEC_EXTENSIONS: [&str; 3] = ["json", "jsx", "tsx"];

/// 规格检查结果
#[derive(Default)]
struct SpecCheckResult {
    /// 检查的文件数量
    files_checked: usize,
    /// 解析错误数量
    parse_errors: usize,
    /// 未知字段警告
    unknown_fields: Vec<(String, String)>,
}

/// 执行规格检查
fn spec_check(path: Option<&str>) -> anyhow::Result<()> {
    let root = PathBuf::from(path.unwrap_or(DEFAULT_SPECS_DIR));
    if !root.exists() {
        anyhow::bail!(
            "路径不存在: {}\n请在 workspace 根目录运行，或指定规格路径",
            root.display()
        );
    }

    let files = collect_spec_files(&root);
    if files.is_empty() {
        eprintln!("未找到规格文件（.json / .jsx / .tsx）");
        return Ok(());
    }

    eprintln!("==> 检查 {} 个规格文件...\n", files.len());

    let mut result = SpecCheckResult::default();
    for file in &files {
        check_spec_file(file, &mut result);
    }

    print_check_result(&result);

    if result.parse_errors > 0 {
        anyhow::bail!("规格检查发现错误");
    }
    Ok(())
}

/// 收集规格文件（单个文件直接返回）
fn collect_spec_files(root: &Path) -> Vec<PathBuf> {
    if root.is_file() {
        return vec![root.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| SPEC_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        })
        .collect();
    files.sort();
    files
}

/// 检查单个规格文件
fn check_spec_file(file: &Path, result: &mut SpecCheckResult) {
    let file_id = file.display().to_string();
    result.files_checked += 1;

    let content = match std::fs::read_to_string(file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[ERROR] {}: 无法读取文件 - {}", file_id, e);
            result.parse_errors += 1;
            return;
        }
    };

    let extension = file.extension().and_then(|ext| ext.to_str());
    match read_attributes_for_extension(&content, extension) {
        Ok(map) => {
            for key in map.keys() {
                if !FIELD_NAMES.contains(&key) {
                    result.unknown_fields.push((file_id.clone(), key.to_string()));
                }
            }
        }
        Err(e) => {
            eprintln!("[ERROR] {}: {}", file_id, e);
            result.parse_errors += 1;
        }
    }
}

/// 输出检查结果
fn print_check_result(result: &SpecCheckResult) {
    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个规格文件", result.files_checked);
    eprintln!();

    for (file_id, key) in &result.unknown_fields {
        eprintln!("[WARN] {}: 未知字段 '{}'（将被忽略）", file_id, key);
    }

    let warn_count = result.unknown_fields.len();

    eprintln!();
    if result.parse_errors > 0 {
        eprintln!("❌ {} 个错误, {} 个警告", result.parse_errors, warn_count);
    } else if warn_count > 0 {
        eprintln!("⚠️  0 个错误, {} 个警告", warn_count);
    } else {
        eprintln!("✅ 检查通过，无错误");
    }
}
