use anyhow::{Context, Result};
use clap::Parser;
use overpass_split_core::{split_document, summary_line, SplitOptions};
use tracing::info;

/// 命令行入口（基于 clap）；只提供 --help/--version，路径为固定常量
#[derive(Parser, Debug)]
#[command(
    name = "overpass-split",
    version,
    about = "Split an Overpass JSON export into one file per element",
    after_help = "Reads ./hue.json and writes ./elements/<id>.json"
)]
struct Cli {}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let _ = Cli::parse();

    let opts = SplitOptions::default();
    info!(input = ?opts.input, output_dir = ?opts.output_dir, "starting split");

    let stats = split_document(&opts).with_context(|| format!("split {} failed", opts.input.display()))?;

    info!(
        elements_total = stats.elements_total,
        files_written = stats.files_written,
        skipped = stats.skipped,
        "split finished"
    );
    println!("{}", summary_line(&stats, &opts.output_dir));

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志走 stderr，stdout 只保留汇总行
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
