use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use chrono::Local;

use crate::domain::DeletionReport;

/// 日志记录器trait
pub trait LoggerTrait: Send + Sync {
    fn is_enabled(&self) -> bool;
    fn log_message(&self, message: &str) -> Result<()>;
    fn log_entry(&self, path: &Path, status: &str) -> Result<()>;
    fn finalize(&self, matches: usize, report: Option<&DeletionReport>, duration: std::time::Duration) -> Result<()>;
}

/// 运行日志记录器（记录搜索参数、匹配项和删除结果）
pub struct Logger {
    log_file: Arc<Mutex<Option<File>>>,
    log_path: PathBuf,
    enabled: bool,
}

impl Logger {
    /// 创建新的日志记录器，日志文件位于当前目录
    pub fn new(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self {
                log_file: Arc::new(Mutex::new(None)),
                log_path: PathBuf::new(),
                enabled: false,
            });
        }

        // 获取当前时间作为文件名的一部分
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        Self::with_path(PathBuf::from(format!("find_delete_{}.log", timestamp)))
    }

    /// 在指定路径创建日志文件
    pub fn with_path(log_path: PathBuf) -> Result<Self> {
        let now = Local::now();

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(true)
            .open(&log_path)?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?;

        writeln!(file_clone, "# find-delete 运行日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# --------------------------------------------")?;

        Ok(Self {
            log_file: Arc::new(Mutex::new(Some(file))),
            log_path,
            enabled: true,
        })
    }

    /// 获取日志文件路径
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    fn write_line(&self, line: &str) -> Result<()> {
        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "{}", line)?;
                file.flush()?;
            }
        }
        Ok(())
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        self.write_line(&format!("[{}] {}", timestamp, message))
    }

    fn log_entry(&self, path: &Path, status: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        self.write_line(&format!("[{}] 路径: {} | 状态: {}", timestamp, path.display(), status))
    }

    fn finalize(&self, matches: usize, report: Option<&DeletionReport>, duration: std::time::Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let now = Local::now();
        self.write_line("# --------------------------------------------")?;
        self.write_line(&format!("# 完成时间: {}", now.format("%Y-%m-%d %H:%M:%S")))?;
        self.write_line(&format!("# 总用时: {:.3}秒", duration.as_secs_f64()))?;
        self.write_line(&format!("# 匹配项数: {}", matches))?;
        match report {
            Some(report) => {
                self.write_line(&format!("# 已删除: {}", report.deleted()))?;
                self.write_line(&format!("# 不存在: {}", report.not_found()))?;
                self.write_line(&format!("# 已跳过: {}", report.skipped()))?;
                self.write_line(&format!("# 失败: {}", report.failed()))?;
            }
            None => self.write_line("# 未执行删除")?,
        }
        self.write_line("# ============================================")?;

        println!("完整日志已保存到: {}", self.log_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let logger = Logger::new(false).unwrap();
        assert!(!logger.is_enabled());
        assert!(logger.log_message("ignored").is_ok());
        assert!(logger.log_entry(Path::new("x"), "匹配").is_ok());
    }

    #[test]
    fn test_logger_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run.log");
        let logger = Logger::with_path(path.clone()).unwrap();
        let logger_trait: &dyn LoggerTrait = &logger;

        assert!(logger_trait.is_enabled());
        logger_trait.log_message("test message").unwrap();
        logger_trait.log_entry(Path::new("a/report.txt"), "匹配").unwrap();
        logger_trait.finalize(1, None, std::time::Duration::from_millis(5)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("test message"));
        assert!(content.contains("a/report.txt"));
        assert!(content.contains("# 匹配项数: 1"));
        assert_eq!(logger.log_path(), path.as_path());
    }
}
