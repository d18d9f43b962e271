use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::error::{FindDeleteError, Result};
use crate::domain::pattern::{MatchMode, NamePredicate, PatternMatcher};
use crate::domain::privilege::PrivilegeLevel;
use crate::infrastructure::LoggerTrait;

/// 一次搜索请求
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub root_directory: PathBuf,
    pub patterns: Vec<String>,
    pub exact_match: bool,
    pub case_insensitive: bool,
}

impl SearchRequest {
    pub fn new(root_directory: impl Into<PathBuf>, patterns: Vec<String>) -> Self {
        Self {
            root_directory: root_directory.into(),
            patterns,
            exact_match: false,
            case_insensitive: true,
        }
    }

    pub fn exact(mut self, exact_match: bool) -> Self {
        self.exact_match = exact_match;
        self
    }

    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn mode(&self) -> MatchMode {
        MatchMode::from_flags(self.exact_match, self.case_insensitive)
    }

    /// 检查请求本身是否有效并构造匹配器
    pub fn validate(&self) -> Result<PatternMatcher> {
        let matcher = PatternMatcher::new(&self.patterns, self.mode())?;

        if !self.root_directory.is_dir() {
            return Err(FindDeleteError::InvalidRequest(format!(
                "目录不存在或不是目录: {}",
                self.root_directory.display()
            )));
        }

        Ok(matcher)
    }
}

/// 匹配到的路径 (相对于根目录)，保持发现顺序，不去重
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    paths: Vec<PathBuf>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        self.paths.push(path);
    }

    pub fn extend(&mut self, other: MatchResult) {
        self.paths.extend(other.paths);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl From<Vec<PathBuf>> for MatchResult {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// 搜索结果以及失败的模式
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub matches: MatchResult,
    pub failures: Vec<FindDeleteError>,
}

/// 对每个模式分别遍历根目录，收集匹配的文件和目录
pub fn find(
    request: &SearchRequest,
    level: PrivilegeLevel,
    logger: &dyn LoggerTrait,
) -> Result<SearchOutcome> {
    let matcher = request.validate()?;
    let mut outcome = SearchOutcome::default();

    for (pattern, predicate) in matcher.predicates() {
        match search_pattern(&request.root_directory, pattern, predicate, level, logger) {
            Ok(found) => {
                if logger.is_enabled() {
                    let _ = logger.log_message(&format!("模式 '{}' 匹配 {} 项", pattern, found.len()));
                }
                outcome.matches.extend(found);
            }
            Err(err) => {
                if logger.is_enabled() {
                    let _ = logger.log_message(&format!("错误: {}", err));
                }
                outcome.failures.push(err);
            }
        }
    }

    Ok(outcome)
}

/// 单个模式的遍历
///
/// 普通用户跳过无法读取的子目录；root 下任何遍历错误都使该模式失败。
fn search_pattern(
    root: &Path,
    pattern: &str,
    predicate: &NamePredicate,
    level: PrivilegeLevel,
    logger: &dyn LoggerTrait,
) -> Result<MatchResult> {
    let mut found = MatchResult::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                if level.is_elevated() {
                    return Err(FindDeleteError::SearchFailed {
                        pattern: pattern.to_string(),
                        cause: err.to_string(),
                    });
                }
                if logger.is_enabled() {
                    let _ = logger.log_message(&format!("已跳过(无法读取): {}", err));
                }
                continue;
            }
        };

        // 根目录本身不是候选项
        if entry.depth() == 0 {
            continue;
        }

        if predicate.matches_path(entry.path()) {
            let relative = entry
                .path()
                .strip_prefix(root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| entry.path().to_path_buf());
            if logger.is_enabled() {
                let _ = logger.log_entry(&relative, "匹配");
            }
            found.push(relative);
        }
    }

    Ok(found)
}
