use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::domain::ItemConfirm;

/// 交互式输入输出，测试中可替换为内存缓冲区
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 输出提示并读取一行，去除首尾空白；EOF 返回空字符串
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ItemConfirm for Console<R, W> {
    /// `rm -i` 风格: 以 y 开头的回答表示删除
    fn confirm_item(&mut self, path: &Path) -> io::Result<bool> {
        let answer = self.ask(&format!("删除 '{}'? (y/n): ", path.display()))?;
        Ok(answer.to_lowercase().starts_with('y'))
    }
}
