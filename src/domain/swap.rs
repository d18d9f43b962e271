use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::{FindDeleteError, Result};

/// 一组版本目录: `<name>` 为当前使用的版本，`<name>-<version>` 为备用版本
#[derive(Debug, Clone)]
pub struct VersionPair {
    pub name: String,
    pub first: String,
    pub second: String,
}

impl Default for VersionPair {
    fn default() -> Self {
        Self {
            name: "flutter".to_string(),
            first: "29".to_string(),
            second: "27".to_string(),
        }
    }
}

impl VersionPair {
    fn versioned(&self, directory: &Path, version: &str) -> PathBuf {
        directory.join(format!("{}-{}", self.name, version))
    }

    fn active(&self, directory: &Path) -> PathBuf {
        directory.join(&self.name)
    }

    fn temp(&self, directory: &Path) -> PathBuf {
        directory.join(format!("{}-temp", self.name))
    }
}

/// 交换完成后成为当前版本的版本号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub activated: String,
    pub deactivated: String,
}

/// 通过三次重命名交换当前版本和备用版本
pub fn swap_versions(directory: &Path, pair: &VersionPair) -> Result<SwapOutcome> {
    let active = pair.active(directory);
    let first = pair.versioned(directory, &pair.first);
    let second = pair.versioned(directory, &pair.second);

    let (incoming, outgoing, activated, deactivated) = if first.exists() && active.exists() {
        (first, second, &pair.first, &pair.second)
    } else if second.exists() && active.exists() {
        (second, first, &pair.second, &pair.first)
    } else {
        return Err(FindDeleteError::SwapFailed(format!(
            "未找到所需目录，请确认 '{name}-{a}' 与 '{name}' 或 '{name}-{b}' 与 '{name}' 存在",
            name = pair.name,
            a = pair.first,
            b = pair.second,
        )));
    };

    let temp = pair.temp(directory);
    for occupied in [&temp, &outgoing] {
        if occupied.exists() {
            return Err(FindDeleteError::SwapFailed(format!(
                "目标目录已存在: {}",
                occupied.display()
            )));
        }
    }

    rename_step(&active, &temp)?;

    if let Err(err) = rename_step(&incoming, &active) {
        // 撤回第一步，让当前版本保持原位
        return Err(match fs::rename(&temp, &active) {
            Ok(()) => err,
            Err(undo) => FindDeleteError::SwapFailed(format!(
                "{}; 原当前版本仍在 {}: {}",
                err,
                temp.display(),
                undo
            )),
        });
    }

    rename_step(&temp, &outgoing).map_err(|err| {
        FindDeleteError::SwapFailed(format!(
            "{}; 原当前版本仍在 {}，请手动改名为 {}",
            err,
            temp.display(),
            outgoing.display()
        ))
    })?;

    Ok(SwapOutcome {
        activated: activated.clone(),
        deactivated: deactivated.clone(),
    })
}

fn rename_step(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|err| {
        FindDeleteError::SwapFailed(format!("{} -> {}: {}", from.display(), to.display(), err))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make(dir: &Path, name: &str, marker: &str) {
        fs::create_dir(dir.join(name)).unwrap();
        fs::write(dir.join(name).join("VERSION"), marker).unwrap();
    }

    fn marker(dir: &Path, name: &str) -> String {
        fs::read_to_string(dir.join(name).join("VERSION")).unwrap()
    }

    #[test]
    fn test_activates_first_version() {
        let dir = tempdir().unwrap();
        make(dir.path(), "flutter", "27");
        make(dir.path(), "flutter-29", "29");

        let outcome = swap_versions(dir.path(), &VersionPair::default()).unwrap();

        assert_eq!(outcome.activated, "29");
        assert_eq!(marker(dir.path(), "flutter"), "29");
        assert_eq!(marker(dir.path(), "flutter-27"), "27");
        assert!(!dir.path().join("flutter-29").exists());
        assert!(!dir.path().join("flutter-temp").exists());
    }

    #[test]
    fn test_swapping_twice_restores_layout() {
        let dir = tempdir().unwrap();
        make(dir.path(), "flutter", "27");
        make(dir.path(), "flutter-29", "29");
        let pair = VersionPair::default();

        swap_versions(dir.path(), &pair).unwrap();
        let outcome = swap_versions(dir.path(), &pair).unwrap();

        assert_eq!(outcome.activated, "27");
        assert_eq!(marker(dir.path(), "flutter"), "27");
        assert_eq!(marker(dir.path(), "flutter-29"), "29");
    }

    #[test]
    fn test_custom_pair() {
        let dir = tempdir().unwrap();
        make(dir.path(), "node", "18");
        make(dir.path(), "node-20", "20");
        let pair = VersionPair {
            name: "node".to_string(),
            first: "18".to_string(),
            second: "20".to_string(),
        };

        let outcome = swap_versions(dir.path(), &pair).unwrap();

        assert_eq!(outcome.activated, "20");
        assert_eq!(marker(dir.path(), "node-18"), "18");
    }

    #[test]
    fn test_missing_folders() {
        let dir = tempdir().unwrap();
        make(dir.path(), "flutter-29", "29");

        let err = swap_versions(dir.path(), &VersionPair::default()).unwrap_err();
        assert!(matches!(err, FindDeleteError::SwapFailed(_)));
        assert!(dir.path().join("flutter-29").exists());
    }

    #[test]
    fn test_existing_temp_aborts_before_renaming() {
        let dir = tempdir().unwrap();
        make(dir.path(), "flutter", "27");
        make(dir.path(), "flutter-29", "29");
        make(dir.path(), "flutter-temp", "?");

        assert!(swap_versions(dir.path(), &VersionPair::default()).is_err());
        assert_eq!(marker(dir.path(), "flutter"), "27");
    }

    #[test]
    fn test_existing_outgoing_aborts_before_renaming() {
        let dir = tempdir().unwrap();
        make(dir.path(), "flutter", "28");
        make(dir.path(), "flutter-29", "29");
        make(dir.path(), "flutter-27", "27");

        let err = swap_versions(dir.path(), &VersionPair::default()).unwrap_err();

        assert!(err.to_string().contains("flutter-27"));
        assert_eq!(marker(dir.path(), "flutter"), "28");
        assert_eq!(marker(dir.path(), "flutter-29"), "29");
        assert_eq!(marker(dir.path(), "flutter-27"), "27");
        assert!(!dir.path().join("flutter-temp").exists());
    }
}
