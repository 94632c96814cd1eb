//! # bspec
//!
//! PulsingBorder 参数规格工具 - 解析、检查 JSON / JSX 规格并输出规范化参数。
//!
//! ## 用法
//!
//! ```bash
//! # 在项目根目录使用 cargo 运行
//! cargo run -p spec-cli -- parse specs/hero.jsx
//! cargo run -p spec-cli -- parse specs/hero.json --format json --resolve
//! cargo run -p spec-cli -- color "#0dc1fd" "hsl(120, 100%, 50%)"
//! cargo run -p spec-cli -- check specs
//!
//! # 或安装后直接使用
//! cargo install --path tools/spec-cli
//! bspec parse specs/hero.jsx
//! bspec --config bspec.json check
//! ```

mod commands;
mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use config::{CliConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "bspec")]
#[command(about = "PulsingBorder 参数规格工具 - 解析、检查 JSON / JSX 规格")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 配置文件（默认：bspec.json）
    #[arg(short, long, default_value = "bspec.json", global = true)]
    config: PathBuf,

    /// 输出调试日志（覆盖配置文件中的 log_level）
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 解析规格文件并输出规范化参数
    Parse {
        /// 规格文件路径（.json 或包含 <PulsingBorder /> 的文本）
        file: PathBuf,

        /// 输出格式（默认取配置文件）
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// 同时输出边距、RGBA 调色板等渲染层转换结果
        #[arg(short, long)]
        resolve: bool,
    },

    /// 把颜色字面量转换为归一化 RGBA
    Color {
        /// 颜色字面量，如 "#fff"、"rgba(255,0,0,0.5)"、"hsl(120,100%,50%)"
        #[arg(required = true)]
        colors: Vec<String>,
    },

    /// 检查目录下所有规格文件
    Check {
        /// 检查目录（默认取配置文件）
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("❌ {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config);
    config.validate()?;
    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Parse {
            file,
            format,
            resolve,
        } => {
            let spec = commands::load_spec(&file)?;
            let output = commands::render_spec(
                &spec,
                format.unwrap_or(config.format),
                resolve || config.resolve,
            )?;
            println!("{output}");
        }
        Commands::Color { colors } => {
            for color in &colors {
                println!("{}", commands::describe_color(color));
            }
        }
        Commands::Check { dir } => {
            let dir = dir.unwrap_or_else(|| config.check_dir.clone());
            let report = commands::check_dir(&dir, &config)?;

            for failure in &report.failures {
                eprintln!("  ✗ {}", failure.path.display());
                eprintln!("    {}", failure.message);
                if let Some(token) = &failure.token {
                    eprintln!("    token: {token:?}");
                }
            }
            eprintln!(
                "\n==> 检查 {} 个文件，{} 个失败",
                report.checked,
                report.failures.len()
            );

            if !report.is_ok() {
                anyhow::bail!("规格检查发现错误");
            }
        }
    }

    Ok(())
}

/// 初始化日志：写到 stderr，stdout 只留给命令输出
fn init_tracing(config: &CliConfig, verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        config.tracing_level()
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
