use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use regex::bytes::Regex;

use crate::domain::error::FindDeleteError;

/// 需要替换为空格的字符: _-+=,!@#$%^&*().?'"\
pub const PUNCTUATION_PATTERN: &str = r#"[_\-+=,!@#$%^&*()\.\?'"\\]"#;

/// 单个文件的重命名结果
#[derive(Debug)]
pub enum RenameOutcome {
    Renamed { from: PathBuf, to: PathBuf },
    /// 名称无需修改，或去除标点后为空
    Unchanged(PathBuf),
    /// 目标名称已存在，不覆盖
    Conflict { from: PathBuf, to: PathBuf },
    Failed(FindDeleteError),
}

/// 去除文件名中的标点
///
/// 按字节处理，名称中非 UTF-8 的字节原样保留。
pub struct PunctuationStripper {
    pattern: Regex,
}

impl PunctuationStripper {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            pattern: Regex::new(PUNCTUATION_PATTERN)?,
        })
    }

    /// 计算新文件名，扩展名保持不变；结果为空或名称无法按字节读取时返回 None
    pub fn clean_name(&self, file_name: &OsStr) -> Option<OsString> {
        let bytes = name_bytes(file_name)?;
        let (stem, extension) = split_extension(bytes);
        let replaced = self.pattern.replace_all(stem, &b" "[..]);
        let cleaned = trim_whitespace(&replaced);

        if cleaned.is_empty() {
            return None;
        }

        let mut new_name = cleaned.to_vec();
        if let Some(ext) = extension {
            new_name.push(b'.');
            new_name.extend_from_slice(ext);
        }
        name_from_bytes(new_name)
    }

    /// 递归处理目录下的所有文件
    pub fn rename_all(&self, directory: &Path) -> Vec<RenameOutcome> {
        // 先收集文件列表，再逐个重命名
        let files: Vec<PathBuf> = WalkBuilder::new(directory)
            .standard_filters(false)
            .follow_links(false)
            .build()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .collect();

        files.into_iter().map(|path| self.rename_one(&path)).collect()
    }

    fn rename_one(&self, path: &Path) -> RenameOutcome {
        let file_name = match path.file_name() {
            Some(name) => name,
            None => return RenameOutcome::Unchanged(path.to_path_buf()),
        };

        let new_name = match self.clean_name(file_name) {
            Some(name) if name.as_os_str() != file_name => name,
            _ => return RenameOutcome::Unchanged(path.to_path_buf()),
        };

        let target = path.with_file_name(&new_name);
        if fs::symlink_metadata(&target).is_ok() {
            return RenameOutcome::Conflict {
                from: path.to_path_buf(),
                to: target,
            };
        }

        match fs::rename(path, &target) {
            Ok(()) => RenameOutcome::Renamed {
                from: path.to_path_buf(),
                to: target,
            },
            Err(source) => RenameOutcome::Failed(FindDeleteError::RenameFailed {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Some(name.as_bytes())
}

#[cfg(unix)]
fn name_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Some(OsString::from_vec(bytes))
}

// 非 Unix 平台只处理合法 UTF-8 名称
#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    name.to_str().map(str::as_bytes)
}

#[cfg(not(unix))]
fn name_from_bytes(bytes: Vec<u8>) -> Option<OsString> {
    String::from_utf8(bytes).ok().map(OsString::from)
}

fn trim_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|b| !b.is_ascii_whitespace()).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| !b.is_ascii_whitespace()).map_or(start, |idx| idx + 1);
    &bytes[start..end]
}

/// 按最后一个 '.' 拆分，以 '.' 开头且无其他 '.' 的名称没有扩展名
fn split_extension(file_name: &[u8]) -> (&[u8], Option<&[u8]>) {
    match file_name.iter().rposition(|&b| b == b'.') {
        Some(idx) if file_name[..idx].iter().any(|&b| b != b'.') => {
            (&file_name[..idx], Some(&file_name[idx + 1..]))
        }
        _ => (file_name, None),
    }
}
