use anyhow::Result;
use clap::{CommandFactory, Parser};

use find_delete::application::{self, Args, Config};
use find_delete::infrastructure::{ErrorLogger, Logger, LoggerTrait};
use find_delete::presentation::Console;
use find_delete::PrivilegeLevel;

fn main() -> Result<()> {
    // 没有参数时显示帮助并正常退出
    if std::env::args_os().len() <= 1 {
        Args::command().print_help()?;
        println!();
        return Ok(());
    }

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let log_enabled = args.logging_enabled(&config);

    // 请求无效时不创建任何日志文件
    let request = args.into_request(&config)?;
    request.validate()?;

    let logger = Logger::new(log_enabled)?;
    let error_logger = ErrorLogger::new(log_enabled)?;

    // 权限只在启动时检测一次
    let level = PrivilegeLevel::current();

    println!("在 {} 中查找: {}", request.root_directory.display(), request.patterns.join(", "));
    println!("匹配方式: {:?}", request.mode());
    if level.is_elevated() {
        println!("以 root 身份运行，删除前将逐项确认");
    }
    if logger.is_enabled() {
        println!("日志文件已创建: {}", logger.log_path().display());
    }
    println!();

    let mut console = Console::stdio();
    application::run(&request, level, &mut console, &logger, &error_logger)?;

    error_logger.print_error_summary();
    error_logger.finalize()?;

    Ok(())
}
