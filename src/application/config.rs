use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::Deserialize;

/// 应用程序配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 搜索相关配置
    pub search: SearchConfig,
    /// 日志相关配置
    pub logging: LoggingConfig,
}

/// 搜索配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 未指定目录时的搜索目录
    pub default_directory: String,
    /// 未指定匹配方式时是否忽略大小写
    pub case_insensitive: bool,
}

/// 日志配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 是否写入运行日志和错误日志
    pub enabled: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_directory: ".".to_string(),
            case_insensitive: true,
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// 显式指定的文件必须存在；否则尝试程序同级目录下的 config.toml，
    /// 不存在时使用默认配置。不会自动创建配置文件。
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::default_config_path() {
                Ok(path) if path.exists() => Self::load_from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(config)
    }

    /// 获取配置文件的默认路径
    pub fn default_config_path() -> Result<PathBuf> {
        let exe_path = std::env::current_exe()
            .context("无法获取程序路径")?;

        let exe_dir = exe_path.parent()
            .context("无法获取程序目录")?;

        Ok(exe_dir.join("config.toml"))
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.search.default_directory.trim().is_empty() {
            anyhow::bail!("default_directory 不能为空");
        }

        Ok(())
    }
}
