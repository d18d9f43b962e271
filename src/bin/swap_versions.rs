use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use find_delete::domain::{swap_versions, VersionPair};

/// 交换当前版本目录 `<NAME>` 与备用版本目录 `<NAME>-<VERSION>`
#[derive(Parser, Debug)]
#[clap(name = "swap-versions", author, version, about, long_about = None)]
struct Args {
    /// 包含版本目录的父目录
    directory: PathBuf,

    /// 版本目录的基础名称
    #[clap(short, long, default_value = "flutter")]
    name: String,

    /// 两个版本号
    #[clap(long, num_args = 2, value_names = ["A", "B"], default_values = ["29", "27"])]
    versions: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.directory.is_dir() {
        bail!("无效的目录路径: {}", args.directory.display());
    }

    let pair = match args.versions.as_slice() {
        [first, second] => VersionPair {
            name: args.name,
            first: first.clone(),
            second: second.clone(),
        },
        _ => bail!("--versions 需要两个版本号"),
    };

    let outcome = swap_versions(&args.directory, &pair)?;
    println!(
        "已将 {} 版本 {} 设为默认 (版本 {} 已移至 {}-{})",
        pair.name, outcome.activated, outcome.deactivated, pair.name, outcome.deactivated
    );

    Ok(())
}
