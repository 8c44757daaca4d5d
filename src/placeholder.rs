//! 占位符提取：扫描 SQL 片段中的 `:name` / `@name` 命名占位符。
//!
//! 紧跟在同一前缀字符之后的匹配（`::integer` 类型转换、`@@session_var` 会话变量）
//! 不算占位符。

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// 占位符前缀约定。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    /// `:name`
    Colon,
    /// `@name`
    At,
}

impl Prefix {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b':' => Some(Self::Colon),
            b'@' => Some(Self::At),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Colon => ':',
            Self::At => '@',
        }
    }

    /// 把 `other` 合并进已钉住的前缀：`None` 时采用对方，冲突时报 `MixedPrefix`。
    pub(crate) fn pin(current: &mut Option<Prefix>, other: Option<Prefix>) -> Result<()> {
        match (*current, other) {
            (_, None) => Ok(()),
            (None, Some(p)) => {
                *current = Some(p);
                Ok(())
            }
            (Some(a), Some(b)) if a == b => Ok(()),
            _ => Err(Error::MixedPrefix),
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 一个片段的提取结果。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    /// 去重后的占位符名，按首次出现顺序。
    pub names: Vec<String>,
    /// 片段中使用的前缀；没有占位符时为 `None`。
    pub prefix: Option<Prefix>,
}

impl Placeholders {
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER_RE.get_or_init(|| {
        Regex::new(r"[:@][A-Za-z_][A-Za-z0-9_]*").expect("invalid built-in placeholder regex")
    })
}

/// 提取 `fragment` 中的命名占位符。
///
/// 同一片段内同时出现 `:` 与 `@` 返回 [`Error::MixedPrefix`]。
pub fn extract(fragment: &str) -> Result<Placeholders> {
    let bytes = fragment.as_bytes();
    let mut out = Placeholders::default();

    for m in placeholder_regex().find_iter(fragment) {
        let start = m.start();
        let marker = bytes[start];
        if start > 0 && bytes[start - 1] == marker {
            continue;
        }

        Prefix::pin(&mut out.prefix, Prefix::from_byte(marker))?;

        let name = &m.as_str()[1..];
        if !out.names.iter().any(|n| n == name) {
            out.names.push(name.to_string());
        }
    }

    Ok(out)
}
