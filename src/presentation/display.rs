use std::io::{self, Write};
use std::time::Duration;

use crate::domain::{DeletionOutcome, DeletionReport, MatchResult};

/// 以 "1.250s"、"2m 05s"、"1h 02m 05s" 的形式显示耗时
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    match (secs / 3600, secs / 60 % 60, secs % 60) {
        (0, 0, s) => format!("{}.{:03}s", s, elapsed.subsec_millis()),
        (0, m, s) => format!("{}m {:02}s", m, s),
        (h, m, s) => format!("{}h {:02}m {:02}s", h, m, s),
    }
}

/// 输出匹配项列表
pub fn print_matches<W: Write>(out: &mut W, matches: &MatchResult) -> io::Result<()> {
    writeln!(out, "找到以下文件和目录:")?;
    for path in matches {
        writeln!(out, "\x1b[1;32m{}\x1b[0m", path.display())?;
    }
    Ok(())
}

/// 输出每一项的删除结果
pub fn print_deletion_report<W: Write>(
    out: &mut W,
    report: &DeletionReport,
    elapsed: Duration,
) -> io::Result<()> {
    for item in &report.items {
        match &item.outcome {
            DeletionOutcome::Deleted => writeln!(out, "已删除: {}", item.path.display())?,
            DeletionOutcome::NotFound => {
                writeln!(out, "文件或目录不存在: {}", item.path.display())?
            }
            DeletionOutcome::Skipped => writeln!(out, "已跳过: {}", item.path.display())?,
            DeletionOutcome::Failed(reason) => writeln!(
                out,
                "\x1b[1;31m删除失败 {}: {}\x1b[0m",
                item.path.display(),
                reason
            )?,
        }
    }

    let failures = report.not_found() + report.failed();
    writeln!(out, "\n删除摘要:")?;
    writeln!(out, "----------------------------")?;
    writeln!(out, "成功: {}", report.deleted())?;
    writeln!(out, "失败: {} (不存在 {}, 错误 {})", failures, report.not_found(), report.failed())?;
    if report.skipped() > 0 {
        writeln!(out, "跳过: {}", report.skipped())?;
    }
    writeln!(out, "用时: {}", format_elapsed(elapsed))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemOutcome;
    use std::path::PathBuf;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "2m 05s");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "1h 02m 05s");
    }

    #[test]
    fn test_report_counts() {
        let report = DeletionReport {
            items: vec![
                ItemOutcome { path: PathBuf::from("/a"), outcome: DeletionOutcome::Deleted },
                ItemOutcome { path: PathBuf::from("/b"), outcome: DeletionOutcome::NotFound },
                ItemOutcome {
                    path: PathBuf::from("/c"),
                    outcome: DeletionOutcome::Failed("denied".to_string()),
                },
            ],
        };
        let mut out = Vec::new();
        print_deletion_report(&mut out, &report, Duration::from_millis(250)).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("已删除: /a"));
        assert!(text.contains("文件或目录不存在: /b"));
        assert!(text.contains("denied"));
        assert!(text.contains("成功: 1"));
        assert!(text.contains("失败: 2 (不存在 1, 错误 1)"));
        assert!(!text.contains("跳过"));
        assert!(text.contains("用时: 0.250s"));
    }
}
