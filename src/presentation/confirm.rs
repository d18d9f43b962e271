use std::io::{self, BufRead, Write};

use crate::domain::MatchResult;
use crate::presentation::console::Console;
use crate::presentation::display;

/// 确认结果，"拒绝" 与 "输入无效" 必须区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
    Invalid,
}

pub const PROMPT: &str = "是否继续删除? (y/n): ";

/// 展示所有匹配项并要求用户明确回答 y 或 n
///
/// 没有匹配项时直接返回 `Abort`，不读取输入。
pub fn confirm<R: BufRead, W: Write>(
    matches: &MatchResult,
    console: &mut Console<R, W>,
) -> io::Result<Decision> {
    if matches.is_empty() {
        writeln!(console.output(), "在指定目录中没有找到匹配的文件或目录。")?;
        return Ok(Decision::Abort);
    }

    display::print_matches(console.output(), matches)?;

    let answer = console.ask(PROMPT)?;
    Ok(parse_answer(&answer))
}

/// 不区分大小写: y → Proceed，n → Abort，其他 → Invalid
pub fn parse_answer(answer: &str) -> Decision {
    match answer.trim().to_lowercase().as_str() {
        "y" => Decision::Proceed,
        "n" => Decision::Abort,
        _ => Decision::Invalid,
    }
}
