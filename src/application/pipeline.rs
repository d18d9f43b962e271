use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::{
    self, DeletionOutcome, DeletionReport, FindDeleteError, MatchResult, PrivilegeLevel,
    SearchRequest,
};
use crate::infrastructure::{ErrorLogger, ErrorType, LoggerTrait};
use crate::presentation::{self, Console, Decision};

/// 一次运行的结果
#[derive(Debug)]
pub struct RunReport {
    pub matches: MatchResult,
    pub search_failures: Vec<FindDeleteError>,
    pub decision: Decision,
    /// 只有确认删除后才有值
    pub deletion: Option<DeletionReport>,
}

/// 执行 搜索 → 确认 → 删除 流程
///
/// 只有无效请求会返回错误；搜索失败和删除失败都记录在报告中。
pub fn run<R: BufRead, W: Write>(
    request: &SearchRequest,
    level: PrivilegeLevel,
    console: &mut Console<R, W>,
    logger: &dyn LoggerTrait,
    error_logger: &ErrorLogger,
) -> Result<RunReport> {
    let start_time = Instant::now();

    if logger.is_enabled() {
        logger.log_message(&format!("搜索目录: {}", request.root_directory.display()))?;
        logger.log_message(&format!("搜索模式: {:?}", request.patterns))?;
        logger.log_message(&format!("匹配方式: {:?}", request.mode()))?;
        logger.log_message(&format!("权限: {}", level.as_str()))?;
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    progress.set_message(format!("正在搜索 {}", request.root_directory.display()));
    progress.enable_steady_tick(Duration::from_millis(100));

    let searched = domain::find(request, level, logger);
    progress.finish_and_clear();
    let outcome = searched?;

    for failure in &outcome.failures {
        writeln!(console.output(), "搜索出错: {}", failure)?;
        error_logger.log_error(ErrorType::Search, None, &failure.to_string())?;
    }

    let matches = outcome.matches;
    let decision = presentation::confirm(&matches, console)?;

    if logger.is_enabled() {
        logger.log_message(&format!("确认结果: {:?}", decision))?;
    }

    let deletion = match decision {
        Decision::Proceed => {
            let report = domain::delete(&matches, &request.root_directory, level, console);
            record_outcomes(&report, logger, error_logger)?;
            let elapsed = start_time.elapsed();
            presentation::print_deletion_report(console.output(), &report, elapsed)?;
            Some(report)
        }
        Decision::Abort => {
            if !matches.is_empty() {
                writeln!(console.output(), "用户已取消删除。")?;
            }
            None
        }
        Decision::Invalid => {
            writeln!(console.output(), "输入无效，请输入 'y' 或 'n'。未删除任何文件。")?;
            None
        }
    };

    logger.finalize(matches.len(), deletion.as_ref(), start_time.elapsed())?;

    Ok(RunReport {
        matches,
        search_failures: outcome.failures,
        decision,
        deletion,
    })
}

fn record_outcomes(
    report: &DeletionReport,
    logger: &dyn LoggerTrait,
    error_logger: &ErrorLogger,
) -> Result<()> {
    for item in &report.items {
        match &item.outcome {
            DeletionOutcome::Deleted => logger.log_entry(&item.path, "已删除")?,
            DeletionOutcome::Skipped => logger.log_entry(&item.path, "已跳过")?,
            DeletionOutcome::NotFound => {
                logger.log_entry(&item.path, "不存在")?;
                error_logger.log_error(ErrorType::NotFound, Some(&item.path), "文件或目录不存在")?;
            }
            DeletionOutcome::Failed(reason) => {
                logger.log_entry(&item.path, &format!("失败: {}", reason))?;
                error_logger.log_error(ErrorType::Deletion, Some(&item.path), reason)?;
            }
        }
    }
    Ok(())
}
