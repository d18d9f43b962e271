use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::domain::error::{FindDeleteError, Result};

/// 名称匹配方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// 与文件名完全相同 (区分大小写)
    Exact,
    /// 文件名包含模式 (区分大小写)
    Contains,
    /// 文件名包含模式 (不区分大小写)，等同于 `*pattern*`
    ContainsIgnoreCase,
}

impl MatchMode {
    /// 根据命令行标志确定匹配方式，exact 优先
    pub fn from_flags(exact_match: bool, case_insensitive: bool) -> Self {
        if exact_match {
            MatchMode::Exact
        } else if case_insensitive {
            MatchMode::ContainsIgnoreCase
        } else {
            MatchMode::Contains
        }
    }
}

/// 单个模式对应的名称谓词
#[derive(Debug, Clone)]
pub enum NamePredicate {
    Exact(String),
    Contains(Regex),
}

impl NamePredicate {
    /// 从用户输入创建谓词，模式始终按字面解释
    pub fn new(pattern: &str, mode: MatchMode) -> Result<Self> {
        if pattern.is_empty() {
            return Err(FindDeleteError::InvalidRequest("搜索模式不能为空".to_string()));
        }

        match mode {
            MatchMode::Exact => Ok(NamePredicate::Exact(pattern.to_string())),
            MatchMode::Contains | MatchMode::ContainsIgnoreCase => {
                let regex = RegexBuilder::new(&regex::escape(pattern))
                    .case_insensitive(mode == MatchMode::ContainsIgnoreCase)
                    .build()
                    .map_err(|err| FindDeleteError::SearchFailed {
                        pattern: pattern.to_string(),
                        cause: err.to_string(),
                    })?;
                Ok(NamePredicate::Contains(regex))
            }
        }
    }

    /// 检查文件名是否匹配
    pub fn matches_name(&self, name: &str) -> bool {
        match self {
            NamePredicate::Exact(expected) => name == expected,
            NamePredicate::Contains(regex) => regex.is_match(name),
        }
    }

    /// 检查路径的最后一个组成部分是否匹配
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .map_or(false, |name| self.matches_name(&name.to_string_lossy()))
    }
}

/// 一组模式，按输入顺序保存，任意一个匹配即视为匹配
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    entries: Vec<(String, NamePredicate)>,
}

impl PatternMatcher {
    pub fn new(patterns: &[String], mode: MatchMode) -> Result<Self> {
        if patterns.is_empty() {
            return Err(FindDeleteError::InvalidRequest("至少需要一个搜索模式".to_string()));
        }

        let entries = patterns
            .iter()
            .map(|pattern| -> Result<(String, NamePredicate)> {
                Ok((pattern.clone(), NamePredicate::new(pattern, mode)?))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// 按顺序返回 (原始模式, 谓词)
    pub fn predicates(&self) -> impl Iterator<Item = (&str, &NamePredicate)> {
        self.entries.iter().map(|(pattern, predicate)| (pattern.as_str(), predicate))
    }

    pub fn is_match(&self, path: &Path) -> bool {
        self.entries.iter().any(|(_, predicate)| predicate.matches_path(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
