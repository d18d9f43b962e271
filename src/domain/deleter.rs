use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::finder::MatchResult;
use crate::domain::privilege::PrivilegeLevel;

/// 单个路径的删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    Deleted,
    /// 路径已不存在 (例如已随父目录一起删除)
    NotFound,
    /// root 模式下逐项确认时被拒绝
    Skipped,
    Failed(String),
}

/// 路径及其删除结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOutcome {
    pub path: PathBuf,
    pub outcome: DeletionOutcome,
}

/// 整批删除的结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub items: Vec<ItemOutcome>,
}

impl DeletionReport {
    fn count(&self, f: impl Fn(&DeletionOutcome) -> bool) -> usize {
        self.items.iter().filter(|item| f(&item.outcome)).count()
    }

    pub fn deleted(&self) -> usize {
        self.count(|o| *o == DeletionOutcome::Deleted)
    }

    pub fn not_found(&self) -> usize {
        self.count(|o| *o == DeletionOutcome::NotFound)
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| *o == DeletionOutcome::Skipped)
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, DeletionOutcome::Failed(_)))
    }
}

/// root 模式下的逐项确认 (类似 `rm -i`)
pub trait ItemConfirm {
    fn confirm_item(&mut self, path: &Path) -> io::Result<bool>;
}

/// 相对路径基于根目录解析，绝对路径保持不变
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// 逐个删除匹配项，单项失败不影响后续
pub fn delete(
    matches: &MatchResult,
    root: &Path,
    level: PrivilegeLevel,
    confirm: &mut dyn ItemConfirm,
) -> DeletionReport {
    let mut report = DeletionReport::default();

    for path in matches {
        let full_path = resolve(root, path);
        let outcome = delete_one(&full_path, level, confirm);
        report.items.push(ItemOutcome { path: full_path, outcome });
    }

    report
}

fn delete_one(path: &Path, level: PrivilegeLevel, confirm: &mut dyn ItemConfirm) -> DeletionOutcome {
    // 不跟随符号链接，链接本身被删除
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => return classify_error(err),
    };

    if level.is_elevated() {
        match confirm.confirm_item(path) {
            Ok(true) => {}
            Ok(false) => return DeletionOutcome::Skipped,
            Err(err) => return DeletionOutcome::Failed(format!("无法读取确认: {}", err)),
        }
    }

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => DeletionOutcome::Deleted,
        Err(err) => classify_error(err),
    }
}

fn classify_error(err: io::Error) -> DeletionOutcome {
    if err.kind() == io::ErrorKind::NotFound {
        DeletionOutcome::NotFound
    } else {
        DeletionOutcome::Failed(err.to_string())
    }
}
