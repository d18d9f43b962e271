use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use find_delete::domain::{PunctuationStripper, RenameOutcome};
use find_delete::infrastructure::{ErrorLogger, ErrorType};

/// 递归重命名目录下的文件，将名称中的 _-+=,!@#$%^&*().?'"\ 替换为空格
#[derive(Parser, Debug)]
#[clap(name = "strip-punct", author, version, about, long_about = None)]
struct Args {
    /// 要处理的目录
    directory: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if !args.directory.is_dir() {
        bail!("无效的目录路径: {}", args.directory.display());
    }

    let stripper = PunctuationStripper::new()?;
    let error_logger = ErrorLogger::new(false)?;
    let mut renamed = 0usize;

    for outcome in stripper.rename_all(&args.directory) {
        match outcome {
            RenameOutcome::Renamed { from, to } => {
                renamed += 1;
                let new_name = to.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                println!("Renamed: {} to {}", from.display(), new_name);
            }
            RenameOutcome::Conflict { from, to } => {
                println!("已跳过 {}: 目标已存在 {}", from.display(), to.display());
            }
            RenameOutcome::Failed(err) => {
                eprintln!("{}", err);
                error_logger.log_error(ErrorType::Rename, None, &err.to_string())?;
            }
            RenameOutcome::Unchanged(_) => {}
        }
    }

    println!("共重命名 {} 个文件", renamed);
    error_logger.print_error_summary();

    Ok(())
}
