use std::path::PathBuf;

use clap::Parser;

use crate::application::Config;
use crate::domain::{FindDeleteError, Result, SearchRequest};

/// 按名称查找文件和目录，确认后删除
#[derive(Parser, Debug)]
#[clap(name = "find-delete", author, version, about, long_about = None)]
pub struct Args {
    /// 要查找的名称 (位置参数形式)
    #[clap(value_name = "FILE")]
    pub pattern: Option<String>,

    /// 要搜索的目录 (位置参数形式)
    #[clap(value_name = "DIRECTORY")]
    pub path: Option<PathBuf>,

    /// 要查找的名称，可以指定多个
    #[clap(short = 'f', long = "file", value_name = "NAME", num_args = 1..)]
    pub files: Vec<String>,

    /// 要搜索的目录，默认为当前目录
    #[clap(short, long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// 名称必须完全相同 (区分大小写)
    #[clap(short, long)]
    pub exact: bool,

    /// 名称包含即可，不区分大小写 (默认)
    #[clap(short = 'i', long, conflicts_with = "case_sensitive")]
    pub case_insensitive: bool,

    /// 名称包含即可，区分大小写
    #[clap(short = 's', long)]
    pub case_sensitive: bool,

    /// 启用日志记录，日志文件保存到当前目录
    #[clap(long)]
    pub log: bool,

    /// 配置文件路径
    #[clap(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// 合并命令行和配置，生成搜索请求
    ///
    /// `--file` 的模式在前，位置参数的模式在后；`--directory` 优先于位置目录。
    pub fn into_request(self, config: &Config) -> Result<SearchRequest> {
        let mut patterns = self.files;
        patterns.extend(self.pattern);

        if patterns.is_empty() {
            return Err(FindDeleteError::InvalidRequest(
                "缺少搜索名称，请使用 --file NAME 或位置参数 <FILE>".to_string(),
            ));
        }

        let root = self
            .directory
            .or(self.path)
            .unwrap_or_else(|| PathBuf::from(&config.search.default_directory));

        let case_insensitive = if self.case_sensitive {
            false
        } else if self.case_insensitive {
            true
        } else {
            config.search.case_insensitive
        };

        Ok(SearchRequest::new(root, patterns)
            .exact(self.exact)
            .case_insensitive(case_insensitive))
    }

    pub fn logging_enabled(&self, config: &Config) -> bool {
        self.log || config.logging.enabled
    }
}
